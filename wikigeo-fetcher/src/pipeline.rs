use crate::batch::{BATCH_SIZE, partition_titles};
use crate::client::WikiClient;
use crate::error::{GeocodeError, Result};
use crate::graph::{Link, LinkGraph, LonLat, Page};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Reports completed batches as (done, total).
pub type BatchProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Cooperative cancellation signal, checked between batch round trips. Lets the
/// caller stop an in-flight run when nothing is observing it any more.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What to do with a linked page the API returns no coordinates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UngeocodedPolicy {
    /// Drop it from both output arrays, recording the title in
    /// `LinkGraph::skipped`.
    #[default]
    Skip,
}

/// One-hop link geocoder: resolves a seed article's outbound links to
/// coordinates and builds the page/link arrays the render layers consume.
pub struct Geocoder {
    client: WikiClient,
    ungeocoded_policy: UngeocodedPolicy,
    progress_callback: Option<BatchProgressCallback>,
    cancel: CancelFlag,
}

impl Geocoder {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, 10)
    }

    pub fn with_timeout(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: WikiClient::with_timeout(endpoint, timeout_secs)?,
            ungeocoded_policy: UngeocodedPolicy::default(),
            progress_callback: None,
            cancel: CancelFlag::new(),
        })
    }

    pub fn with_ungeocoded_policy(mut self, policy: UngeocodedPolicy) -> Self {
        self.ungeocoded_policy = policy;
        self
    }

    pub fn with_progress_callback(mut self, callback: BatchProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run the pipeline for one seed title. All accumulation is local; the
    /// graph is returned once, after the last batch. Any transport or parse
    /// fault aborts the run and discards everything gathered so far.
    pub async fn geocode(&self, seed_title: &str) -> Result<LinkGraph> {
        info!("Geocoding link graph for '{}'", seed_title);

        let seed = self.client.seed_page(seed_title).await?;

        let mut pages = Vec::new();
        let mut links = Vec::new();
        let mut skipped = Vec::new();

        let seed_coordinate: Option<LonLat> = seed
            .coordinates
            .as_ref()
            .and_then(|coords| coords.first())
            .map(|c| [c.lon, c.lat]);

        if let Some(coordinate) = seed_coordinate {
            pages.push(Page {
                title: seed_title.to_string(),
                coordinates: coordinate,
            });
        } else {
            warn!(
                "Seed page '{}' has no coordinates; no arcs will be produced",
                seed_title
            );
        }

        let link_titles: Vec<String> = seed
            .links
            .unwrap_or_default()
            .into_iter()
            .map(|link| link.title)
            .collect();

        let batches = partition_titles(&link_titles, BATCH_SIZE);
        let total_batches = batches.len();
        debug!(
            "Resolving {} linked titles in {} batches",
            link_titles.len(),
            total_batches
        );

        for (index, batch) in batches.iter().enumerate() {
            if self.cancel.is_cancelled() {
                warn!(
                    "Cancelled before batch {}/{}; discarding partial graph",
                    index + 1,
                    total_batches
                );
                return Err(GeocodeError::Cancelled);
            }

            let batch_pages = self.client.page_coordinates(batch).await?;

            for page in batch_pages {
                let Some(title) = page.title else {
                    continue;
                };

                match page.coordinates.as_ref().and_then(|coords| coords.first()) {
                    Some(c) => {
                        let coordinates = [c.lon, c.lat];
                        pages.push(Page {
                            title: title.clone(),
                            coordinates,
                        });
                        if let Some(end) = seed_coordinate {
                            links.push(Link {
                                start: coordinates,
                                end,
                                title,
                                distance: 1,
                                start_title: seed_title.to_string(),
                            });
                        }
                    }
                    None => match self.ungeocoded_policy {
                        UngeocodedPolicy::Skip => skipped.push(title),
                    },
                }
            }

            if let Some(ref callback) = self.progress_callback {
                callback(index + 1, total_batches);
            }
        }

        info!(
            "Geocoded {} pages, {} links ({} titles without coordinates)",
            pages.len(),
            links.len(),
            skipped.len()
        );

        Ok(LinkGraph {
            seed_title: seed_title.to_string(),
            pages,
            links,
            skipped,
        })
    }
}
