//! Dispatcher behavior: fire-and-forget semantics, ordering, injection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use beacon::engine::{NoopEngine, RecordingEngine, TransportEngine};
use beacon::{AnalyticsDispatcher, AnalyticsEvent, EncodedEvent, LoginFailureReason};

/// Engine whose transport always fails internally. Mimics a backend
/// write erroring after hand-off; per the trait contract the failure
/// stays inside the engine.
#[derive(Default)]
struct FailingEngine {
    failures: AtomicU64,
}

impl TransportEngine for FailingEngine {
    fn send(&self, event: EncodedEvent) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(name = %event.name, "simulated transport failure");
    }
}

// ---------------------------------------------------------------------------
// Fire-and-forget
// ---------------------------------------------------------------------------

#[test]
fn log_returns_normally_when_the_engine_fails_internally() {
    let engine = Arc::new(FailingEngine::default());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    dispatcher.log(AnalyticsEvent::LoginScreenViewed);
    dispatcher.log(AnalyticsEvent::LoginAttempted);
    dispatcher.log(AnalyticsEvent::LoginFailed {
        reason: LoginFailureReason::UserNotActivated,
    });

    // Every call came back; every failure stayed in the engine.
    assert_eq!(engine.failures.load(Ordering::Relaxed), 3);
}

#[test]
fn noop_engine_counts_but_stores_nothing() {
    let engine = Arc::new(NoopEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    dispatcher.log(AnalyticsEvent::MessageListViewed);
    dispatcher.log(AnalyticsEvent::LoginSucceeded);

    assert_eq!(engine.total_discarded(), 2);
}

// ---------------------------------------------------------------------------
// Ordering and forwarding
// ---------------------------------------------------------------------------

#[test]
fn sequential_logs_are_recorded_in_order() {
    let engine = Arc::new(RecordingEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    dispatcher.log(AnalyticsEvent::LoginScreenViewed);
    dispatcher.log(AnalyticsEvent::LoginAttempted);
    dispatcher.log(AnalyticsEvent::LoginFailed {
        reason: LoginFailureReason::WrongPassword,
    });
    dispatcher.log(AnalyticsEvent::LoginSucceeded);

    let names: Vec<String> = engine.sent().into_iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        [
            "loginScreenViewed",
            "loginAttempted",
            "loginFailed",
            "loginSucceeded"
        ]
    );
}

#[test]
fn dispatcher_forwards_the_encoded_projection_unchanged() {
    let engine = Arc::new(RecordingEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    let event = AnalyticsEvent::MessageDeleted {
        index: 3,
        read: true,
    };
    let expected = event.encode();
    dispatcher.log(event);

    assert_eq!(engine.sent(), vec![expected]);
}

#[test]
fn clones_share_one_engine() {
    let engine = Arc::new(RecordingEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());
    let other = dispatcher.clone();

    dispatcher.log(AnalyticsEvent::LoginAttempted);
    other.log(AnalyticsEvent::LoginSucceeded);

    assert_eq!(engine.len(), 2);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_senders_never_lose_events() {
    let engine = Arc::new(RecordingEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    dispatcher.log(AnalyticsEvent::MessageSelected { index: i });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Arrival order across threads is best-effort, but nothing drops.
    assert_eq!(engine.len(), 100);
}

#[test]
fn take_sent_drains_the_recording() {
    let engine = Arc::new(RecordingEngine::new());
    let dispatcher = AnalyticsDispatcher::new(engine.clone());

    dispatcher.log(AnalyticsEvent::LoginScreenViewed);
    assert_eq!(engine.take_sent().len(), 1);
    assert!(engine.is_empty());
}
