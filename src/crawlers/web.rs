use crate::catalog::{self, Category, Product, Store};
use crate::config::CrawlerConfig;
use crate::parsers::html;
use crate::results::CsvRow;
use fantoccini::{Client, ClientBuilder};
use std::collections::HashSet;
use tokio::task::JoinSet;

/// Runs the full crawl: partitions the store set, drives one worker per
/// batch concurrently and merges their rows once every worker is done.
///
/// Each worker returns its own row vector; this function is the only
/// writer of the merged collection. A worker that dies before finishing
/// its batch is logged and charged zero rows instead of stalling the
/// join.
pub async fn run(config: &CrawlerConfig, stores: HashSet<Store>) -> Vec<CsvRow> {
    let batches = catalog::split_into_batches(stores, config.concurrency);
    ::log::info!(
        "Starting crawl: {} batches across {} workers",
        batches.len(),
        config.concurrency
    );

    let mut workers = JoinSet::new();
    for (worker_id, batch) in batches.into_iter().enumerate() {
        let config = config.clone();
        workers.spawn(async move { crawl_batch(worker_id, &config, batch).await });
    }

    let mut rows = Vec::new();
    while let Some(outcome) = workers.join_next().await {
        match outcome {
            Ok(worker_rows) => rows.extend(worker_rows),
            Err(e) => ::log::error!("Worker terminated abnormally: {}", e),
        }
    }

    rows
}

/// Crawls every category of every store in the batch over a single
/// browser session, then flattens the collected products into rows.
///
/// Category-scope failures never end the worker; only a session that
/// cannot be created does, in which case the batch contributes nothing.
async fn crawl_batch(
    worker_id: usize,
    config: &CrawlerConfig,
    batch: HashSet<Store>,
) -> Vec<CsvRow> {
    let client = match connect(worker_id, &config.webdriver_url).await {
        Some(client) => client,
        None => return Vec::new(),
    };
    ::log::info!(
        "Worker {} session started (stores={})",
        worker_id,
        batch.len()
    );

    let mut rows = Vec::new();
    for mut store in batch {
        let (sid, store_name) = (store.id, store.name.clone());
        for category in &mut store.categories {
            crawl_category(&client, config, sid, &store_name, category).await;
        }
        rows.extend(store.into_rows());
    }

    // The crawl loop above recovers from every category failure, so this
    // release runs on each non-panicking exit of the worker
    if let Err(e) = client.close().await {
        ::log::warn!("Worker {} failed to close session: {}", worker_id, e);
    }

    rows
}

/// Opens a WebDriver session against the remote endpoint.
async fn connect(worker_id: usize, webdriver_url: &str) -> Option<Client> {
    let mut chrome_options = serde_json::map::Map::new();
    chrome_options.insert(
        "args".to_string(),
        serde_json::json!(["--window-size=1920,1080"]),
    );

    let mut capabilities = serde_json::map::Map::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        serde_json::Value::Object(chrome_options),
    );

    match ClientBuilder::native()
        .capabilities(capabilities)
        .connect(webdriver_url)
        .await
    {
        Ok(client) => Some(client),
        Err(e) => {
            ::log::error!(
                "Worker {} failed to start a session at {}: {}",
                worker_id,
                webdriver_url,
                e
            );
            None
        }
    }
}

/// Collects the products of one category.
///
/// Page 1 doubles as the page-count probe, so its products are kept
/// even when the pagination label turns out to be unreadable. Later
/// pages are fetched strictly in ascending order; a single failed page
/// is skipped without aborting the category.
async fn crawl_category(
    client: &Client,
    config: &CrawlerConfig,
    sid: i32,
    store_name: &str,
    category: &mut Category,
) {
    let pages = match crawl_first_page(client, config, category).await {
        Some(pages) => pages,
        None => return,
    };

    if pages == 1 {
        ::log::info!(
            "Store {}(sid={}): collected '{}' products from a single page",
            store_name,
            sid,
            category.sub_category
        );
        return;
    }

    for page in 2..=pages {
        let page_link = format!("{}&page={}", category.link, page);
        if let Some(products) = fetch_page_products(client, config, &page_link).await {
            category.add_products(products);
        }
    }

    ::log::info!(
        "Store {}(sid={}): collected '{}' products from {} pages",
        store_name,
        sid,
        category.sub_category,
        pages
    );
}

/// Navigates to the category's first page, appends its products and
/// reads the total page count from the pagination widget.
///
/// Returns `None` when the category has to be abandoned: either the
/// navigation failed (nothing collected) or the pagination label was
/// unreadable (page-1 products already appended and kept).
async fn crawl_first_page(
    client: &Client,
    config: &CrawlerConfig,
    category: &mut Category,
) -> Option<u32> {
    if let Err(e) = client.goto(&category.link).await {
        ::log::error!(
            "Failed to open category {}: {}. Skipping the whole category.",
            category.link,
            e
        );
        return None;
    }

    let source = match client.source().await {
        Ok(source) => source,
        Err(e) => {
            ::log::error!(
                "Failed to read page source for {}: {}. Skipping the whole category.",
                category.link,
                e
            );
            return None;
        }
    };

    category.add_products(html::extract_products(&source, &config.base_url));

    match html::extract_page_count(&source) {
        Some(pages) => Some(pages),
        None => {
            ::log::error!(
                "Unreadable page count at {}. Keeping page 1, skipping the rest.",
                category.link
            );
            None
        }
    }
}

/// Opens one pagination page and extracts its products.
async fn fetch_page_products(
    client: &Client,
    config: &CrawlerConfig,
    link: &str,
) -> Option<Vec<Product>> {
    if let Err(e) = client.goto(link).await {
        ::log::error!("Failed to collect products from {}: {}", link, e);
        return None;
    }

    match client.source().await {
        Ok(source) => Some(html::extract_products(&source, &config.base_url)),
        Err(e) => {
            ::log::error!("Failed to read page source for {}: {}", link, e);
            None
        }
    }
}
