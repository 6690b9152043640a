use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use wikigeo_fetcher::pipeline::BatchProgressCallback;
use wikigeo_fetcher::{CancelFlag, Geocoder, LinkGraph};

/// Options for configuring a geocoding run
pub struct GeocodeOptions {
    pub title: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub show_progress_bar: bool,
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        Self {
            title: "Tehran".to_string(),
            endpoint: wikigeo_fetcher::client::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            show_progress_bar: true,
        }
    }
}

/// Callback for reporting run-level status messages
pub type GeocodeStatusCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Execute the link-geocoding pipeline with the given options.
/// Returns the completed graph, or an error if the run faulted anywhere;
/// a faulted run flushes nothing.
pub async fn execute_geocode(
    options: GeocodeOptions,
    cancel: CancelFlag,
    status_callback: Option<GeocodeStatusCallback>,
) -> Result<LinkGraph, String> {
    let GeocodeOptions {
        title,
        endpoint,
        timeout_secs,
        show_progress_bar,
    } = options;

    if let Some(ref callback) = status_callback {
        callback(format!("Geocoding links of '{}'", title));
    }

    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Fetching seed page '{}'...", title));
        Some(Arc::new(pb))
    } else {
        None
    };

    let batch_callback: BatchProgressCallback = if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        Arc::new(move |done: usize, total: usize| {
            pb_clone.set_message(format!("Resolving coordinates... batch {}/{}", done, total));
            pb_clone.tick();
        })
    } else {
        Arc::new(|_done: usize, _total: usize| {})
    };

    let geocoder = Geocoder::with_timeout(&endpoint, timeout_secs)
        .map_err(|e| format!("Failed to configure geocoder: {}", e))?
        .with_progress_callback(batch_callback)
        .with_cancel_flag(cancel);

    let result = geocoder.geocode(&title).await;

    if let Some(ref pb) = progress_bar {
        match &result {
            Ok(graph) => pb.finish_with_message(format!(
                "Geocoding complete: {} pages, {} links",
                graph.pages.len(),
                graph.links.len()
            )),
            Err(_) => pb.finish_and_clear(),
        }
    }

    result.map_err(|e| format!("Geocoding run failed: {}", e))
}

/// Generate a text summary of a completed run
pub fn generate_geocode_report(graph: &LinkGraph) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Geocoded pages: {}\n", graph.pages.len()));
    report.push_str(&format!("  Links to seed:  {}\n", graph.links.len()));
    report.push_str(&format!(
        "  Skipped (no coordinates): {}\n",
        graph.skipped.len()
    ));

    if let Some(seed) = graph.pages.iter().find(|p| p.title == graph.seed_title) {
        report.push_str(&format!(
            "\n  Seed: {} at [{:.4}, {:.4}]\n",
            seed.title, seed.coordinates[0], seed.coordinates[1]
        ));
    }

    if !graph.skipped.is_empty() {
        report.push_str("\n## Titles without coordinates:\n");
        for title in &graph.skipped {
            report.push_str(&format!("  - {}\n", title));
        }
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikigeo_fetcher::{Link, Page};

    fn sample_graph() -> LinkGraph {
        LinkGraph {
            seed_title: "Tehran".to_string(),
            pages: vec![
                Page {
                    title: "Tehran".to_string(),
                    coordinates: [51.4, 35.7],
                },
                Page {
                    title: "Iran".to_string(),
                    coordinates: [53.688, 32.4279],
                },
            ],
            links: vec![Link {
                start: [53.688, 32.4279],
                end: [51.4, 35.7],
                title: "Iran".to_string(),
                distance: 1,
                start_title: "Tehran".to_string(),
            }],
            skipped: vec!["Stub".to_string()],
        }
    }

    #[test]
    fn test_report_counts() {
        let report = generate_geocode_report(&sample_graph());
        assert!(report.contains("Geocoded pages: 2"));
        assert!(report.contains("Links to seed:  1"));
        assert!(report.contains("Skipped (no coordinates): 1"));
        assert!(report.contains("- Stub"));
    }

    #[test]
    fn test_report_names_seed() {
        let report = generate_geocode_report(&sample_graph());
        assert!(report.contains("Seed: Tehran"));
    }

    #[test]
    fn test_default_options() {
        let options = GeocodeOptions::default();
        assert_eq!(options.title, "Tehran");
        assert_eq!(options.timeout_secs, 10);
        assert!(options.endpoint.contains("wikipedia.org"));
    }
}
