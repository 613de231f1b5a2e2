use anyhow::Context;
use covid19qc::ScrapingContext;
use dotenv::dotenv;

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    let today = context.scraping_config.clock.today();
    info!("Run date is {today} ({:?} clock)", context.scraping_config.clock);

    let path = context
        .run(today)
        .await
        .with_context(|| format!("scraping {} failed", context.scraping_config.url))?;
    info!("CSV at {}", path.display());
    println!("Saved!");
    Ok(())
}
