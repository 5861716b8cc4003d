//! Client for the GWOSC JSON archive.
//!
//! Every query is a single blocking GET that returns a decoded
//! [`serde_json::Value`]. Catalog events are published under increasing
//! release versions (`{event}_R{version}`); [`resolver`] finds the highest
//! one when the caller does not ask for a specific version.
//!
//! The host is never global state: it is carried by a [`Config`] held in a
//! [`Client`], or passed explicitly to the free functions below.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod resolver;
pub mod urls;

pub use client::Client;
pub use config::{Config, DEFAULT_HOST, MAX_GPS};
pub use error::{Error, Result};
pub use fetch::{HttpFetcher, JsonFetcher, Probe};
pub use resolver::{resolve_catalog_event, resolve_catalog_event_versioned, Resolved};
pub use urls::GpsSpan;

use serde_json::Value;

/// Fetch and decode the JSON document at `url` with a default [`HttpFetcher`].
pub fn fetch_json(url: &str) -> Result<Value> {
    HttpFetcher::default().fetch(url)
}

/// Metadata for all datasets overlapping `[gpsstart, gpsend]`.
pub fn fetch_dataset_json(gpsstart: u64, gpsend: u64, host: &str) -> Result<Value> {
    let span = GpsSpan::new(gpsstart, gpsend)?;
    fetch_json(&urls::dataset_url(host, span))
}

/// Metadata for a single event.
pub fn fetch_event_json(event: &str, host: &str) -> Result<Value> {
    fetch_json(&urls::event_url(host, event))
}

/// Data links for a science run and detector, e.g. `("O1", "L1")`.
///
/// Pass [`GpsSpan::open`] to cover the whole run.
pub fn fetch_run_json(run: &str, detector: &str, span: GpsSpan, host: &str) -> Result<Value> {
    fetch_json(&urls::run_url(host, run, detector, span))
}

/// Listing for a named catalog, e.g. `GWTC-1-confident`.
pub fn fetch_catalog_json(catalog: &str, host: &str) -> Result<Value> {
    fetch_json(&urls::catalog_url(host, catalog))
}

/// Catalog record for `event`, at `version` or at the highest published one.
///
/// See [`resolve_catalog_event`] for how `None` and `Some(0)` are resolved.
pub fn fetch_catalog_event_json(event: &str, version: Option<u32>, host: &str) -> Result<Value> {
    resolve_catalog_event(&HttpFetcher::default(), host, event, version)
}
