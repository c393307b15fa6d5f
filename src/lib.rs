// Re-export modules
pub mod catalog;
pub mod config;
pub mod crawlers;
pub mod parsers;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use catalog::{Category, Product, Store};
pub use results::{CSV_HEADERS, CsvRow};

use config::CrawlerConfig;
use std::collections::HashSet;

/// Builder for a crawl over a fixed store catalog.
///
/// The store set and configuration are immutable once the crawl starts;
/// each worker dials its own browser session against the configured
/// WebDriver endpoint.
pub struct Crawl {
    config: CrawlerConfig,
    stores: HashSet<Store>,
}

impl Crawl {
    /// Create a new crawl over the given stores
    pub fn new(config: CrawlerConfig, stores: HashSet<Store>) -> Self {
        Self { config, stores }
    }

    /// Override the number of concurrent workers
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    /// Run the crawl to completion and return the flattened product rows
    pub async fn run(self) -> Vec<CsvRow> {
        crawlers::web::run(&self.config, self.stores).await
    }
}
