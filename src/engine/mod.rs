//! Transport engines: pluggable delivery of encoded events.
//!
//! The dispatcher depends only on the [`TransportEngine`] trait; which
//! concrete engine backs it is a construction-time decision (see
//! [`crate::config`]).

pub mod http;
pub mod jsonl;
pub mod memory;

pub use http::HttpEngine;
pub use jsonl::JsonlEngine;
pub use memory::{NoopEngine, RecordingEngine};

use crate::codec::EncodedEvent;

/// A transport for encoded analytics events.
///
/// `send` is fire-and-forget: it must not panic and must not surface
/// transport failures to the caller. Implementations log failures
/// through `tracing` and drop them; the dispatch layer observes no
/// error channel at all. That is the right tradeoff for telemetry and
/// the wrong one for business-critical writes, so do not reuse this
/// trait for the latter.
pub trait TransportEngine: Send + Sync {
    /// Hand one encoded event to the transport.
    ///
    /// Returns once the work is handed off; any I/O the engine performs
    /// happens after return and is never awaited by the caller.
    fn send(&self, event: EncodedEvent);
}
