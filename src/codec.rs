//! Wire encoding for analytics events.
//!
//! Every event reduces to a `(name, metadata)` pair: a stable
//! lowerCamelCase event name and a string-keyed, string-valued metadata
//! map. Both projections are total pure functions over the variant set,
//! matched exhaustively, so adding a variant without updating them is a
//! compile error rather than a runtime surprise.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::event::AnalyticsEvent;

/// The transport-ready projection of an [`AnalyticsEvent`].
///
/// Produced once per dispatch, consumed by a single engine, never
/// persisted or reused. Metadata is a `BTreeMap` so equal events
/// serialize byte-identically regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedEvent {
    pub name: String,
    pub metadata: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// Stable event name for this variant.
    ///
    /// Identical across all instances of a variant regardless of
    /// payload, and never empty.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginScreenViewed => "loginScreenViewed",
            Self::LoginAttempted => "loginAttempted",
            Self::LoginFailed { .. } => "loginFailed",
            Self::LoginSucceeded => "loginSucceeded",
            Self::MessageListViewed => "messageListViewed",
            Self::MessageSelected { .. } => "messageSelected",
            Self::MessageDeleted { .. } => "messageDeleted",
        }
    }

    /// Metadata map for this variant. Empty for payload-free variants.
    ///
    /// Values stringify canonically and locale-independently: integers
    /// as base-10 ASCII digits with no leading zeros and a sign only
    /// when negative, booleans as `true`/`false`, enumerations through
    /// their pinned identifiers. The `index` key means the same list
    /// position in every variant that carries it.
    pub fn metadata(&self) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        match self {
            Self::LoginFailed { reason } => {
                metadata.insert("reason".to_string(), reason.as_str().to_string());
            }
            Self::MessageSelected { index } => {
                metadata.insert("index".to_string(), index.to_string());
            }
            Self::MessageDeleted { index, read } => {
                metadata.insert("index".to_string(), index.to_string());
                metadata.insert("read".to_string(), read.to_string());
            }
            Self::LoginScreenViewed
            | Self::LoginAttempted
            | Self::LoginSucceeded
            | Self::MessageListViewed => {}
        }
        metadata
    }

    /// Project this event to its wire shape.
    pub fn encode(&self) -> EncodedEvent {
        EncodedEvent {
            name: self.name().to_string(),
            metadata: self.metadata(),
        }
    }
}
