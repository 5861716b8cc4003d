use serde_json::Value;
use tracing::instrument;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::resolver::{resolve_catalog_event, resolve_catalog_event_versioned, Resolved};
use crate::urls::{self, GpsSpan};

/// Archive client bound to one host.
///
/// ```no_run
/// let client = gwosc::Client::default();
/// let record = client.fetch_catalog_event_json("GW150914", None)?;
/// # Ok::<(), gwosc::Error>(())
/// ```
#[derive(Debug)]
pub struct Client<F = HttpFetcher> {
    config: Config,
    fetcher: F,
}

impl Client<HttpFetcher> {
    pub fn new(config: Config) -> Self {
        let fetcher = HttpFetcher::new(&config);
        Self { config, fetcher }
    }
}

impl Default for Client<HttpFetcher> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<F: JsonFetcher> Client<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fetch_json(&self, url: &str) -> Result<Value> {
        self.fetcher.fetch(url)
    }

    #[instrument(skip(self))]
    pub fn fetch_dataset_json(&self, span: GpsSpan) -> Result<Value> {
        self.fetch_json(&urls::dataset_url(self.host(), span))
    }

    #[instrument(skip(self))]
    pub fn fetch_event_json(&self, event: &str) -> Result<Value> {
        self.fetch_json(&urls::event_url(self.host(), event))
    }

    #[instrument(skip(self))]
    pub fn fetch_run_json(&self, run: &str, detector: &str, span: GpsSpan) -> Result<Value> {
        self.fetch_json(&urls::run_url(self.host(), run, detector, span))
    }

    #[instrument(skip(self))]
    pub fn fetch_catalog_json(&self, catalog: &str) -> Result<Value> {
        self.fetch_json(&urls::catalog_url(self.host(), catalog))
    }

    /// Catalog record at `version`, or at the highest release for `None`/`Some(0)`.
    pub fn fetch_catalog_event_json(&self, event: &str, version: Option<u32>) -> Result<Value> {
        resolve_catalog_event(&self.fetcher, self.host(), event, version)
    }

    pub fn resolve_catalog_event(&self, event: &str, version: Option<u32>) -> Result<Resolved> {
        resolve_catalog_event_versioned(&self.fetcher, self.host(), event, version)
    }
}
