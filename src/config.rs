//! Typed configuration from environment variables.
//!
//! Loads once at startup. Sensitive values are wrapped in
//! `secrecy::SecretString` so they cannot leak into logs.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use crate::engine::{HttpEngine, JsonlEngine, NoopEngine, TransportEngine};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct AnalyticsConfig {
    /// Master switch. Defaults to off; a process that never opts in
    /// records nothing.
    pub enabled: bool,
    /// Collector endpoint for the HTTP engine.
    pub endpoint: Option<String>,
    /// Bearer token for the HTTP engine.
    pub api_key: Option<SecretString>,
    /// Local JSON-lines sink, used when no endpoint is configured.
    pub trace_file: Option<PathBuf>,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `ANALYTICS_ENABLED`, `ANALYTICS_ENDPOINT`,
    /// `ANALYTICS_API_KEY`, and `ANALYTICS_TRACE_FILE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `ANALYTICS_ENABLED` holds an
    /// unrecognized boolean value.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            enabled: match std::env::var("ANALYTICS_ENABLED") {
                Ok(raw) => parse_bool(&raw)?,
                Err(_) => false,
            },
            endpoint: std::env::var("ANALYTICS_ENDPOINT").ok(),
            api_key: std::env::var("ANALYTICS_API_KEY").ok().map(SecretString::from),
            trace_file: std::env::var("ANALYTICS_TRACE_FILE").ok().map(PathBuf::from),
        })
    }

    /// Build the engine this configuration selects.
    ///
    /// Disabled analytics gets a [`NoopEngine`], so callers always have
    /// a dispatcher rather than an `Option` code path. When enabled, an
    /// endpoint wins over a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when enabled with neither endpoint nor
    /// trace file; otherwise whatever the selected engine's constructor
    /// returns.
    pub fn build_engine(&self) -> Result<Arc<dyn TransportEngine>> {
        if !self.enabled {
            return Ok(Arc::new(NoopEngine::new()));
        }
        if let Some(ref endpoint) = self.endpoint {
            return Ok(Arc::new(HttpEngine::new(endpoint.clone(), self.api_key.clone())?));
        }
        if let Some(ref path) = self.trace_file {
            return Ok(Arc::new(JsonlEngine::create(path)?));
        }
        Err(Error::Config(
            "analytics enabled but neither ANALYTICS_ENDPOINT nor ANALYTICS_TRACE_FILE is set".to_string(),
        ))
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "unrecognized boolean value {other:?} for ANALYTICS_ENABLED"
        ))),
    }
}
