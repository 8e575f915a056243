//! Fakes shared by this crate's tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use edp_common::TransportError;

use crate::transport::{ActivityResult, ActivityUpdate, Connector, PresenceTransport};

#[derive(Default)]
pub struct RecordingTransport {
    updates: Mutex<Vec<ActivityUpdate>>,
    shown: Mutex<Option<ActivityUpdate>>,
    clears: AtomicUsize,
    pumps: AtomicUsize,
    fail_next_pump: AtomicBool,
    slow_call: Option<(usize, Duration)>,
    calls: AtomicUsize,
}

impl RecordingTransport {
    /// The first `update_activity` call sleeps for `delay` before applying.
    pub fn slow_first(delay: Duration) -> Self {
        Self::slow_call(0, delay)
    }

    /// The `index`-th (zero-based) `update_activity` call sleeps for
    /// `delay` before applying.
    pub fn slow_call(index: usize, delay: Duration) -> Self {
        Self {
            slow_call: Some((index, delay)),
            ..Self::default()
        }
    }

    /// What the client would display now.
    pub fn shown(&self) -> Option<ActivityUpdate> {
        self.shown.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<ActivityUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    pub fn pumps(&self) -> usize {
        self.pumps.load(Ordering::SeqCst)
    }

    pub fn fail_next_pump(&self) {
        self.fail_next_pump.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PresenceTransport for RecordingTransport {
    async fn update_activity(&self, activity: ActivityUpdate) -> ActivityResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((index, delay)) = self.slow_call {
            if call == index {
                tokio::time::sleep(delay).await;
            }
        }
        *self.shown.lock().unwrap() = Some(activity.clone());
        self.updates.lock().unwrap().push(activity);
        ActivityResult::Ok
    }

    async fn clear_activity(&self) -> ActivityResult {
        *self.shown.lock().unwrap() = None;
        self.clears.fetch_add(1, Ordering::SeqCst);
        ActivityResult::Ok
    }

    async fn pump_callbacks(&self) -> Result<(), TransportError> {
        if self.fail_next_pump.swap(false, Ordering::SeqCst) {
            return Err(TransportError::CallbackPump("client went away".into()));
        }
        self.pumps.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Rejects the first `failures` attempts, then hands out `transport`.
pub struct FlakyConnector {
    failures: usize,
    attempts: AtomicUsize,
    pumps_at_success: Mutex<Option<usize>>,
    pub transport: Arc<RecordingTransport>,
}

impl FlakyConnector {
    pub fn new(failures: usize) -> Self {
        Self::with_transport(failures, RecordingTransport::default())
    }

    pub fn with_transport(failures: usize, transport: RecordingTransport) -> Self {
        Self {
            failures,
            attempts: AtomicUsize::new(0),
            pumps_at_success: Mutex::new(None),
            transport: Arc::new(transport),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Pump count observed when the first successful attempt returned.
    pub fn pumps_at_success(&self) -> Option<usize> {
        *self.pumps_at_success.lock().unwrap()
    }
}

#[async_trait]
impl Connector for FlakyConnector {
    async fn connect(&self, _client_id: i64) -> Result<Arc<dyn PresenceTransport>, TransportError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.failures {
            return Err(TransportError::Unavailable(format!("attempt {attempt}")));
        }
        self.pumps_at_success
            .lock()
            .unwrap()
            .get_or_insert(self.transport.pumps());
        Ok(self.transport.clone())
    }
}

/// Poll `condition` until it holds or about two seconds pass.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..400 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
