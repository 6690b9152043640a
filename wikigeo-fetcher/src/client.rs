use crate::error::{GeocodeError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Wire shape of a MediaWiki `action=query` response. Only the pieces the
/// pipeline consumes are modeled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
pub struct QueryBody {
    /// Keyed by page id ("-1" for titles the API could not resolve).
    pub pages: HashMap<String, ApiPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage {
    pub title: Option<String>,
    pub coordinates: Option<Vec<ApiCoordinate>>,
    pub links: Option<Vec<ApiLink>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApiCoordinate {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLink {
    pub title: String,
}

/// Thin client over the MediaWiki query API.
pub struct WikiClient {
    client: Client,
    endpoint: Url,
}

impl WikiClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, 10)
    }

    pub fn with_timeout(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GeocodeError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        let client = Client::builder()
            .user_agent("wikigeo/0.1 (https://github.com/smorin/wikigeo)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Fetch the seed article with its outbound links (namespace 0, unlimited
    /// page size) and its own coordinates. Returns the single page object.
    pub async fn seed_page(&self, title: &str) -> Result<ApiPage> {
        debug!("Fetching seed page {}", title);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "links|coordinates"),
                ("pllimit", "max"),
                ("plnamespace", "0"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?;

        let body: QueryResponse = response.json().await?;
        let pages = Self::pages_from(body)?;

        pages
            .into_values()
            .next()
            .ok_or_else(|| GeocodeError::MalformedResponse("empty pages map".to_string()))
    }

    /// Resolve coordinates for a batch of titles in one round trip. Titles are
    /// pipe-joined as the API's bulk-query form expects.
    pub async fn page_coordinates(&self, titles: &[String]) -> Result<Vec<ApiPage>> {
        let joined = titles.join("|");
        debug!("Fetching coordinates for {} titles", titles.len());

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("action", "query"),
                ("titles", joined.as_str()),
                ("prop", "coordinates"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?;

        let body: QueryResponse = response.json().await?;
        let pages = Self::pages_from(body)?;

        Ok(pages.into_values().collect())
    }

    fn pages_from(body: QueryResponse) -> Result<HashMap<String, ApiPage>> {
        let query = body
            .query
            .ok_or_else(|| GeocodeError::MalformedResponse("missing query object".to_string()))?;
        Ok(query.pages)
    }
}
