//! JSON-lines file engine.
//!
//! Appends one JSON object per event to a local file, for staging
//! environments and offline analysis. On a write failure the engine
//! logs the error and disables itself; later sends become no-ops so a
//! full disk cannot turn into a log storm.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::codec::EncodedEvent;
use crate::error::Result;

use super::TransportEngine;

/// One line of the trace file: a timestamp plus the encoded event.
#[derive(Debug, Serialize)]
struct TraceLine {
    recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    event: EncodedEvent,
}

/// Appends encoded events to a JSON-lines file.
pub struct JsonlEngine {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    enabled: AtomicBool,
}

impl JsonlEngine {
    /// Open the trace file in append mode, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be opened.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            enabled: AtomicBool::new(true),
        })
    }

    /// Flush buffered lines to disk.
    pub fn flush(&self) {
        let mut writer = self.lock();
        if let Err(e) = writer.flush() {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to flush analytics trace file, disabling engine"
            );
            self.enabled.store(false, Ordering::Relaxed);
        }
    }

    /// Whether the engine is still accepting events.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, BufWriter<File>> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransportEngine for JsonlEngine {
    fn send(&self, event: EncodedEvent) {
        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }

        let line = TraceLine {
            recorded_at: Utc::now(),
            event,
        };
        let json = match serde_json::to_string(&line) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize analytics trace line");
                return;
            }
        };

        let mut writer = self.lock();
        if let Err(e) = writeln!(writer, "{json}") {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to write analytics trace line, disabling engine"
            );
            self.enabled.store(false, Ordering::Relaxed);
        }
    }
}

impl Drop for JsonlEngine {
    fn drop(&mut self) {
        // Best-effort flush; there is nowhere left to report a failure.
        if let Ok(writer) = self.writer.get_mut() {
            let _ = writer.flush();
        }
    }
}
