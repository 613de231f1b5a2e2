use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a scrape run. None of these are recovered from.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request never produced a response (DNS, refused connection, TLS...).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a success status.
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    /// The page no longer has the table we expect.
    #[error("no table found in page: {0}")]
    Parse(String),

    #[error("failed to serialize table to CSV: {0}")]
    Serialize(#[from] csv::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// True for both transport failures and non-success responses.
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. } | ScrapeError::Status { .. })
    }
}
