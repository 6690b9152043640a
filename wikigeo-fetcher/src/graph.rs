use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair, in the order the render layers consume it.
pub type LonLat = [f64; 2];

/// A geocoded article. Identity is the title; duplicates are possible since the
/// pipeline performs no dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub coordinates: LonLat,
}

/// A directed arc from a linked article back to the seed article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub start: LonLat,
    pub end: LonLat,
    pub title: String,
    pub distance: u32,
    #[serde(rename = "startTitle")]
    pub start_title: String,
}

/// The result of one geocoding run: the two flat arrays the render layers take,
/// the seed the run was anchored on, and the titles dropped for lacking
/// coordinates. A seed without coordinates appears in `seed_title` but not in
/// `pages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkGraph {
    pub seed_title: String,
    pub pages: Vec<Page>,
    pub links: Vec<Link>,
    pub skipped: Vec<String>,
}

impl LinkGraph {
    /// Titles of every geocoded page other than the seed. These are the
    /// candidates a second traversal hop would start from.
    pub fn linked_page_titles(&self) -> Vec<String> {
        self.pages
            .iter()
            .filter(|page| page.title != self.seed_title)
            .map(|page| page.title.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.links.is_empty()
    }
}
