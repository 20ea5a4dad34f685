//! Error types for beacon.
//!
//! Errors arise only at the fallible edges: loading configuration and
//! constructing engines. The send path is fire-and-forget by contract
//! and never produces one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no tokio runtime available: {0}")]
    Runtime(String),

    #[error("trace file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
