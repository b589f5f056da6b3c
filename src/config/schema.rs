use serde::Deserialize;
use std::time::Duration;

use crate::client::auth::AUDIENCE;
use crate::client::endpoints::DEFAULT_BASE_URL;
use crate::client::fetcher::ORIGIN_VALUE;

/// Thing whose properties the dashboard shows
pub const DEFAULT_THING_NAME: &str = "PetHealth";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    base_url: Option<String>,
    audience: Option<String>,
    origin: Option<String>,
    thing_name: Option<String>,
    timeout: Option<u64>,
    preflight: Option<bool>,
    tls_insecure: Option<bool>,
    log_level: Option<String>,
}
impl Settings {
    pub fn base_url(&self) -> &str {
        match &self.base_url {
            Some(s) => s,
            None => DEFAULT_BASE_URL,
        }
    }
    pub fn audience(&self) -> &str {
        match &self.audience {
            Some(s) => s,
            None => AUDIENCE,
        }
    }
    pub fn origin(&self) -> &str {
        match &self.origin {
            Some(s) => s,
            None => ORIGIN_VALUE,
        }
    }
    pub fn thing_name(&self) -> &str {
        match &self.thing_name {
            Some(s) => s,
            None => DEFAULT_THING_NAME,
        }
    }
    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(30))
    }
    pub fn preflight(&self) -> bool {
        self.preflight.unwrap_or(true)
    }
    pub fn tls_insecure(&self) -> bool {
        self.tls_insecure.unwrap_or(false)
    }
    pub fn log_level(&self) -> &str {
        match &self.log_level {
            Some(s) => s,
            None => "info",
        }
    }
}
