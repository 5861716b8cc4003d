use thiserror::Error;

/// Errors raised by the archive client.
///
/// `Transport` and `MalformedResponse` come straight from a fetch and are
/// never recovered by the fetcher itself. `NoCatalogData` is only produced by
/// automatic catalog resolution when not a single version could be fetched.
#[derive(Debug, Error)]
pub enum Error {
    /// The host could not be reached, or answered with a non-2xx status.
    #[error("transport error fetching {url}: {message}")]
    Transport {
        url: String,
        /// HTTP status when the server answered, `None` for connection-level failures.
        status: Option<u16>,
        message: String,
    },

    /// A body was received but it is not UTF-8 JSON.
    #[error("failed to parse GWOSC JSON from {url}: {source}")]
    MalformedResponse {
        url: String,
        source: serde_json::Error,
    },

    /// Automatic resolution found zero published versions of `event`.
    #[error("no catalog datasets found for {event:?}")]
    NoCatalogData {
        event: String,
        /// Failure of the version-1 probe.
        #[source]
        cause: Box<Error>,
    },

    #[error("invalid GPS span [{start}, {end}]: expected start <= end <= {max}")]
    InvalidGpsSpan { start: u64, end: u64, max: u64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }

    pub fn is_no_catalog_data(&self) -> bool {
        matches!(self, Error::NoCatalogData { .. })
    }

    /// HTTP status of a `Transport` error, if the server sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// URL the failing fetch was issued against.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Transport { url, .. } | Error::MalformedResponse { url, .. } => Some(url),
            Error::NoCatalogData { cause, .. } => cause.url(),
            _ => None,
        }
    }
}
