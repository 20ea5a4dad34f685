//! Network-backed engine: one fire-and-forget POST per event.
//!
//! Initiates the write and returns without waiting for acknowledgment.
//! Delivery failures are logged at `warn` and dropped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::codec::EncodedEvent;
use crate::error::{Error, Result};

use super::TransportEngine;

/// One session id per process lifetime, shared by every engine instance.
static SESSION_ID: LazyLock<Uuid> = LazyLock::new(Uuid::new_v4);

/// JSON body for one event write.
#[derive(Debug, Serialize)]
struct EventEnvelope {
    name: String,
    metadata: BTreeMap<String, String>,
    /// When the event was handed to the engine, not when it was delivered.
    occurred_at: DateTime<Utc>,
    /// Correlates events from one process lifetime, across engines.
    session_id: Uuid,
}

/// Posts each encoded event to a backend collector endpoint.
pub struct HttpEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
    session_id: Uuid,
    handle: Handle,
}

impl HttpEngine {
    /// Create an engine posting to `endpoint`, with optional bearer auth.
    ///
    /// Captures the current tokio runtime handle so that `send` can
    /// spawn requests without being async itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime,
    /// or [`Error::Http`] if the client cannot be built.
    pub fn new(endpoint: impl Into<String>, api_key: Option<SecretString>) -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|_| Error::Runtime("HttpEngine must be created inside a tokio runtime".to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("beacon/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            session_id: *SESSION_ID,
            handle,
        })
    }

    /// The process-wide session id stamped on every envelope.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl TransportEngine for HttpEngine {
    fn send(&self, event: EncodedEvent) {
        let body = EventEnvelope {
            name: event.name,
            metadata: event.metadata,
            occurred_at: Utc::now(),
            session_id: self.session_id,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        // Hand off and return; the caller never observes the outcome.
        self.handle.spawn(async move {
            match request.send().await {
                Ok(resp) if !resp.status().is_success() => {
                    tracing::warn!(
                        name = %body.name,
                        status = %resp.status(),
                        "analytics backend rejected event"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        name = %body.name,
                        error = %e,
                        "failed to deliver analytics event"
                    );
                }
            }
        });
    }
}
