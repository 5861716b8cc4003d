//! Catalog version resolution.
//!
//! Catalog events are published as `{event}_R1`, `{event}_R2`, ... and only
//! the newest release is guaranteed to stay online. With no version requested
//! the resolver walks the releases upward from 1 and keeps the last record it
//! could fetch:
//!
//! * probe 1 fails: the event has no catalog data, [`Error::NoCatalogData`].
//! * probe `k + 1` fails after `1..=k` succeeded: the record of `k` is the answer.
//!
//! Any failed probe ends the walk, including an outage that is not a clean
//! 404. Such terminations are logged at `warn` so they can be told apart from
//! normal exhaustion. There is no upper bound on the version: every iteration
//! issues one fetch and advances, so the walk stops at the first unfetchable
//! release.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::fetch::{JsonFetcher, Probe};
use crate::urls::catalog_event_url;

/// A catalog record together with the release it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub version: u32,
    pub record: Value,
}

/// Fetch the catalog record of `event`.
///
/// `Some(v)` with `v >= 1` fetches exactly that release and propagates its
/// failure unchanged. `None` and `Some(0)` resolve the highest release.
pub fn resolve_catalog_event<F>(
    fetcher: &F,
    host: &str,
    event: &str,
    version: Option<u32>,
) -> Result<Value>
where
    F: JsonFetcher + ?Sized,
{
    resolve_catalog_event_versioned(fetcher, host, event, version).map(|resolved| resolved.record)
}

#[instrument(skip(fetcher))]
pub fn resolve_catalog_event_versioned<F>(
    fetcher: &F,
    host: &str,
    event: &str,
    version: Option<u32>,
) -> Result<Resolved>
where
    F: JsonFetcher + ?Sized,
{
    if let Some(version) = version.filter(|v| *v > 0) {
        let record = fetcher.fetch(&catalog_event_url(host, event, version))?;
        return Ok(Resolved { version, record });
    }

    let mut latest: Option<Resolved> = None;
    let mut candidate: u32 = 1;
    loop {
        let url = catalog_event_url(host, event, candidate);
        let cause = match Probe::classify(fetcher.fetch(&url)) {
            Probe::Found(record) => {
                debug!(version = candidate, "found catalog release");
                latest = Some(Resolved {
                    version: candidate,
                    record,
                });
                candidate += 1;
                continue;
            }
            Probe::Missing(cause) => {
                debug!(version = candidate, error = %cause, "catalog release absent");
                cause
            }
            Probe::Failed(cause) => {
                warn!(
                    version = candidate,
                    error = %cause,
                    "catalog probe failed, treating as end of releases"
                );
                cause
            }
        };

        return match latest {
            Some(resolved) => {
                debug!(version = resolved.version, "resolved latest catalog release");
                Ok(resolved)
            }
            None => Err(Error::NoCatalogData {
                event: event.to_string(),
                cause: Box::new(cause),
            }),
        };
    }
}
