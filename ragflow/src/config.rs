use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Connection settings shared by every resource of one client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:9380`. API paths are appended to it.
    pub base_url: String,
    /// Bearer credential sent with every request.
    pub api_key: String,
    /// Upper bound for one non-streaming call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Reads `RAGFLOW_API_URL`, `RAGFLOW_API_KEY` and `RAGFLOW_TIMEOUT_MS`.
    ///
    /// Missing variables yield empty strings; [`crate::RagFlowClient::new`]
    /// rejects an empty base URL.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("RAGFLOW_API_URL").unwrap_or_default(),
            api_key: env::var("RAGFLOW_API_KEY").unwrap_or_default(),
            timeout_ms: parse_env_or("RAGFLOW_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base URL without trailing slashes, so paths can be appended directly.
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
