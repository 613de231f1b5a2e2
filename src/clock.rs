use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;

/// Which calendar decides the date stamped on the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    /// Whatever timezone the process runs in.
    #[default]
    Local,
    Utc,
}

impl Clock {
    pub fn today(self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Utc => Utc::now().date_naive(),
        }
    }
}
