use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use crate::{
    ScrapeError, config::ScrapingConfig, csv_serializer::to_csv, namer::file_name_for,
    requests::RequestClient, table_scraper::TableScraper, writer::save,
};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub table_scraper: TableScraper,
    pub request_client: RequestClient,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(ScrapingConfig::new()?)
    }

    pub fn with_config(scraping_config: ScrapingConfig) -> anyhow::Result<Self> {
        let table_scraper = TableScraper::new(scraping_config.table_index)?;
        let request_client = RequestClient::new()?;
        Ok(ScrapingContext {
            scraping_config,
            table_scraper,
            request_client,
        })
    }

    /// Fetches the table and saves it as the CSV for `date`. Nothing touches
    /// the disk unless the fetch and parse both succeeded.
    pub async fn run(&self, date: NaiveDate) -> Result<PathBuf, ScrapeError> {
        let table = self
            .table_scraper
            .scrape(&self.request_client, &self.scraping_config.url)
            .await?;
        let csv = to_csv(&table)?;
        let file_name = file_name_for(date);
        info!("Saving {} rows as {}", table.len(), file_name);
        save(&self.scraping_config.output_dir, &file_name, &csv)
    }
}
