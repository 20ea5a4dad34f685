//! # beacon
//!
//! Typed analytics event dispatch: a closed event catalog, a pure wire
//! codec, and pluggable fire-and-forget transport engines.
//!
//! Application code builds one [`AnalyticsDispatcher`] over a single
//! [`TransportEngine`] and calls [`AnalyticsDispatcher::log`]
//! unconditionally. Transport failures are logged and swallowed inside
//! the engine; analytics never crashes or blocks the caller.

pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod event;
pub mod telemetry;

pub use codec::EncodedEvent;
pub use config::AnalyticsConfig;
pub use dispatcher::AnalyticsDispatcher;
pub use engine::{HttpEngine, JsonlEngine, NoopEngine, RecordingEngine, TransportEngine};
pub use error::{Error, Result};
pub use event::{AnalyticsEvent, LoginFailureReason};
