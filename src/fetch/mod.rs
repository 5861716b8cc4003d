//! JSON fetching.
//!
//! [`JsonFetcher`] is the only thing the query surface and the catalog
//! resolver know about the network. [`HttpFetcher`] is the real one.

mod http;

pub use http::HttpFetcher;

use serde_json::Value;

use crate::error::{Error, Result};

/// Retrieves a URL and decodes its body as JSON.
///
/// Implementations must not retry or cache, and must report an undecodable
/// body as [`Error::MalformedResponse`] and everything else as
/// [`Error::Transport`].
pub trait JsonFetcher {
    fn fetch(&self, url: &str) -> Result<Value>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    fn fetch(&self, url: &str) -> Result<Value> {
        (**self).fetch(url)
    }
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for Box<T> {
    fn fetch(&self, url: &str) -> Result<Value> {
        (**self).fetch(url)
    }
}

/// Outcome of one versioned catalog probe.
#[derive(Debug)]
pub enum Probe {
    Found(Value),
    /// The server said the resource is not there (404/410), or the body is
    /// not a record.
    Missing(Error),
    /// Anything else: unreachable host, timeout, 5xx.
    Failed(Error),
}

impl Probe {
    pub fn classify(result: Result<Value>) -> Self {
        match result {
            Ok(record) => Probe::Found(record),
            Err(err) if err.is_malformed() => Probe::Missing(err),
            Err(err) if matches!(err.status(), Some(404) | Some(410)) => Probe::Missing(err),
            Err(err) => Probe::Failed(err),
        }
    }
}
