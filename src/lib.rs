mod clock;
mod config;
mod csv_serializer;
mod error;
mod namer;
mod requests;
mod scraping_context;
mod table_scraper;
mod text_manipulators;
mod writer;

pub use clock::Clock;
pub use config::{DEFAULT_URL, ScrapingConfig};
pub use csv_serializer::to_csv;
pub use error::ScrapeError;
pub use namer::file_name_for;
pub use requests::RequestClient;
pub use scraping_context::ScrapingContext;
pub use table_scraper::{Row, Table, TableScraper};
pub use writer::save;
