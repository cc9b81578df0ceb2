//! In-memory secret store for resolver tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use stagekey::core::store::SecretStore;
use stagekey::error::{Result, SecretError};

/// Payload matching the documented example secret.
pub const EXAMPLE_SECRET: &str = r#"{"host":"h","username":"u","password":"p"}"#;

/// Store answering every fetch with the same payload after an optional delay.
#[derive(Debug)]
pub struct CountingStore {
    payload: Option<String>,
    delay: Duration,
    fail_first: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(payload: Option<&str>) -> Arc<Self> {
        Self::build(payload, Duration::ZERO, 0)
    }

    pub fn slow(payload: Option<&str>, delay: Duration) -> Arc<Self> {
        Self::build(payload, delay, 0)
    }

    /// Fail the first `failures` fetches with a store error.
    pub fn flaky(payload: Option<&str>, failures: usize) -> Arc<Self> {
        Self::build(payload, Duration::ZERO, failures)
    }

    fn build(payload: Option<&str>, delay: Duration, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            payload: payload.map(str::to_string),
            delay,
            fail_first: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for CountingStore {
    async fn fetch(&self, secret_id: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let remaining = self.fail_first.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_first.store(remaining - 1, Ordering::SeqCst);
            return Err(SecretError::Store(format!("{} unavailable", secret_id)).into());
        }
        Ok(self.payload.clone())
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
