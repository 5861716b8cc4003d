use std::fmt::Debug;
use std::io::Read;

use serde_json::Value;
use tracing::{debug, instrument};

use super::JsonFetcher;
use crate::config::Config;
use crate::error::{Error, Result};

/// Blocking HTTP fetcher backed by a `ureq` agent.
pub struct HttpFetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl JsonFetcher for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Value> {
        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => Error::Transport {
                url: url.to_string(),
                status: Some(code),
                message: format!("server returned status {code}"),
            },
            ureq::Error::Transport(t) => Error::Transport {
                url: url.to_string(),
                status: None,
                message: t.to_string(),
            },
        })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                status: None,
                message: format!("failed to read response body: {e}"),
            })?;
        debug!(bytes = body.len(), "received response");

        serde_json::from_slice(&body).map_err(|source| Error::MalformedResponse {
            url: url.to_string(),
            source,
        })
    }
}
