use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::clock::Clock;

/// The Quebec government's daily COVID-19 situation page.
pub const DEFAULT_URL: &str = "https://www.quebec.ca/en/health/health-issues/a-z/2019-coronavirus/situation-coronavirus-in-quebec/";

const ENV_PREFIX: &str = "COVID19QC_";

/// The optional env vars (all prefixed with `COVID19QC_`) that tweak a run.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapingEnv {
    url: Option<String>,
    output_dir: Option<PathBuf>,
    table_index: Option<usize>,
    clock: Option<Clock>,
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub url: String,
    pub output_dir: PathBuf,
    pub table_index: usize,
    pub clock: Clock,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(scraping_env.into())
    }

    /// Same as [`ScrapingConfig::new`] but reads from `vars` instead of the process env.
    pub fn from_env_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let scraping_env = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, ScrapingEnv>(vars)
            .context("failed to load env variables into config struct")?;
        Ok(scraping_env.into())
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        ScrapingEnv::default().into()
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        Self {
            url: env.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            output_dir: env.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            table_index: env.table_index.unwrap_or(0),
            clock: env.clock.unwrap_or_default(),
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
