use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "market-crawler")]
#[command(about = "Collects storefront product listings through a remote WebDriver endpoint")]
#[command(version)]
pub struct Args {
    /// Path to the JSON store catalog
    #[arg(default_value = "stores.json")]
    pub catalog: PathBuf,

    /// Base storefront URL used to build absolute category and product links
    #[arg(long, env = "MARKET_URL")]
    pub base_url: String,

    /// WebDriver endpoint the browser sessions are created against
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Number of concurrent crawl workers (one browser session each)
    #[arg(short, long, env = "THREADS", default_value_t = 4)]
    pub concurrency: usize,

    /// Directory the CSV report is written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}
