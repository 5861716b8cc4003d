//! URL templates for the archive endpoints.

use crate::config::MAX_GPS;
use crate::error::{Error, Result};

/// Inclusive GPS interval used by dataset and run queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsSpan {
    start: u64,
    end: u64,
}

impl GpsSpan {
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start > end || end > MAX_GPS {
            return Err(Error::InvalidGpsSpan {
                start,
                end,
                max: MAX_GPS,
            });
        }
        Ok(Self { start, end })
    }

    /// `[0, MAX_GPS]`, i.e. no restriction.
    pub fn open() -> Self {
        Self {
            start: 0,
            end: MAX_GPS,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl Default for GpsSpan {
    fn default() -> Self {
        Self::open()
    }
}

fn base(host: &str) -> &str {
    host.trim_end_matches('/')
}

pub fn dataset_url(host: &str, span: GpsSpan) -> String {
    format!("{}/archive/{}/{}/json/", base(host), span.start, span.end)
}

pub fn event_url(host: &str, event: &str) -> String {
    format!("{}/archive/{}/json/", base(host), event)
}

pub fn run_url(host: &str, run: &str, detector: &str, span: GpsSpan) -> String {
    format!(
        "{}/archive/links/{}/{}/{}/{}/json/",
        base(host),
        run,
        detector,
        span.start,
        span.end
    )
}

pub fn catalog_url(host: &str, catalog: &str) -> String {
    format!("{}/catalog/{}/json/", base(host), catalog)
}

pub fn catalog_event_url(host: &str, event: &str, version: u32) -> String {
    format!("{}/archive/{}_R{}/json/", base(host), event, version)
}
