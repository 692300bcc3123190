//! Bounded retries for document store calls
//!
//! Each attempt runs under a timeout. Transient failures are retried with
//! exponential backoff and jitter; anything else is returned immediately.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::config::Config;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Upper bound for one attempt
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.retry_attempts.max(1),
            base_delay: config.retry_base_delay,
            max_delay: Duration::from_secs(5),
            timeout: config.request_timeout,
        }
    }

    /// Delay before retry number `retry` (1-based): `base * 2^(retry-1)`,
    /// capped at `max_delay`, jittered down to at most half.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32 << retry.saturating_sub(1).min(16);
        let ceiling = self.base_delay.saturating_mul(factor).min(self.max_delay);
        let ceiling_ms = ceiling.as_millis() as u64;
        if ceiling_ms == 0 {
            return ceiling;
        }
        let jittered = rand::thread_rng().gen_range(ceiling_ms / 2..=ceiling_ms);
        Duration::from_millis(jittered)
    }

    /// Run `call` until it succeeds, fails permanently, or attempts run out
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut attempt = 1;
        loop {
            let result = match tokio::time::timeout(self.timeout, call()).await {
                Ok(result) => result,
                Err(_) => Err(StoreError::Timeout(self.timeout.as_millis() as u64)),
            };

            match result {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transient store failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_transient() {
                        tracing::error!(operation, attempt, error = %e, "Store call failed, giving up");
                    }
                    return Err(e);
                }
            }
        }
    }
}
