use crate::catalog::{Category, Store};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;
use url::Url;

/// Runtime configuration for a crawl.
///
/// Constructed once at startup and passed into the coordinator; nothing
/// here changes while workers are running.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Base storefront URL, prepended to catalog category links and
    /// product hrefs
    pub base_url: String,

    /// WebDriver endpoint each worker dials its session against
    pub webdriver_url: String,

    /// Number of concurrent workers (one browser session each)
    pub concurrency: usize,
}

impl CrawlerConfig {
    /// Validates and builds the configuration. A malformed URL or a
    /// zero worker count is fatal before any crawling starts.
    pub fn new(
        base_url: &str,
        webdriver_url: &str,
        concurrency: usize,
    ) -> Result<Self, Box<dyn Error>> {
        Url::parse(webdriver_url)
            .map_err(|e| format!("invalid WebDriver URL '{webdriver_url}': {e}"))?;
        Url::parse(base_url).map_err(|e| format!("invalid base URL '{base_url}': {e}"))?;

        if concurrency == 0 {
            return Err("concurrency must be at least 1".into());
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            webdriver_url: webdriver_url.to_string(),
            concurrency,
        })
    }
}

/// Catalog entry for one store, keyed by its string-encoded id.
#[derive(Debug, Deserialize)]
struct CatalogStore {
    store: String,
    categories: Vec<CatalogCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogCategory {
    link: String,
    category: String,
    sub_category: String,
    is_adult: bool,
}

/// Loads the store catalog from a JSON file.
pub fn load_stores(
    path: impl AsRef<Path>,
    base_url: &str,
) -> Result<HashSet<Store>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    parse_stores(&contents, base_url)
}

/// Builds the store set from catalog JSON, joining each category link
/// onto the base storefront URL.
pub fn parse_stores(json: &str, base_url: &str) -> Result<HashSet<Store>, Box<dyn Error>> {
    let catalog: HashMap<String, CatalogStore> = serde_json::from_str(json)?;

    let mut stores = HashSet::new();
    for (sid, entry) in catalog {
        let id: i32 = sid
            .parse()
            .map_err(|_| format!("invalid store id '{sid}' in catalog"))?;

        let categories = entry
            .categories
            .into_iter()
            .map(|c| {
                Category::new(
                    format!("{}{}", base_url, c.link),
                    c.category,
                    c.sub_category,
                    c.is_adult,
                )
            })
            .collect();

        stores.insert(Store::new(id, entry.store, categories));
    }

    Ok(stores)
}
