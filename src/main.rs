use clap::Parser;
use market_crawler::config::{self, CrawlerConfig};
use market_crawler::{Crawl, report};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match CrawlerConfig::new(&args.base_url, &args.webdriver_url, args.concurrency) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let stores = match config::load_stores(&args.catalog, &config.base_url) {
        Ok(stores) => stores,
        Err(e) => {
            ::log::error!(
                "Failed to load store catalog {}: {}",
                args.catalog.display(),
                e
            );
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Configuration loaded: {} stores, {} workers",
        stores.len(),
        config.concurrency
    );

    let start_time = std::time::Instant::now();
    let rows = Crawl::new(config, stores).run().await;
    ::log::info!(
        "Crawl complete: {} products in {:.2} seconds",
        rows.len(),
        start_time.elapsed().as_secs_f64()
    );

    match report::write_report(&args.output_dir, &rows) {
        Ok(path) => ::log::info!("Report saved: {}", path.display()),
        Err(e) => ::log::error!("Failed to save the report: {}", e),
    }
}
