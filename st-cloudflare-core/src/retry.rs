//! Retry-until-ceiling
//!
//! Re-runs a failable async operation under exponential backoff with jitter
//! until it succeeds or the next attempt would start past an elapsed-time
//! ceiling. The operation is always attempted at least once, and an attempt
//! already in flight is never interrupted.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

/// Elapsed-time ceiling for a zone type conversion.
pub const CONVERSION_TIMEOUT: Duration = Duration::from_secs(30);

/// Exponential backoff parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the second attempt.
    pub initial_interval: Duration,
    /// Growth factor applied per failed attempt.
    pub multiplier: f64,
    /// Upper bound for a single delay (before jitter).
    pub max_interval: Duration,
    /// Jitter spread: a delay `d` becomes uniform in `[d*(1-r), d*(1+r)]`.
    pub randomization_factor: f64,
    /// No attempt is started once this much time has passed since the first.
    pub max_elapsed_time: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            multiplier: 2.0,
            max_interval: Duration::from_secs(10),
            randomization_factor: 0.5,
            max_elapsed_time: CONVERSION_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    /// Delay after the `retry`-th failure (0-based), without jitter.
    ///
    /// 500ms, 1s, 2s, 4s, 8s, then capped at `max_interval`.
    pub fn base_delay(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let secs = self.initial_interval.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = secs.min(self.max_interval.as_secs_f64());
        if capped.is_finite() && capped > 0.0 {
            Duration::from_secs_f64(capped)
        } else {
            Duration::ZERO
        }
    }

    /// Delay after the `retry`-th failure with jitter applied.
    pub fn next_delay(&self, retry: u32) -> Duration {
        let base = self.base_delay(retry);
        let factor = self.randomization_factor.clamp(0.0, 1.0);
        if factor <= 0.0 || base.is_zero() {
            return base;
        }
        let spread = rand::rng().random_range((1.0 - factor)..=(1.0 + factor));
        base.mul_f64(spread)
    }
}

/// The operation never succeeded before the ceiling.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    /// Error returned by the final attempt.
    pub last_error: E,
    /// Number of attempts made (at least 1).
    pub attempts: u32,
    /// Time from the first attempt until giving up.
    pub elapsed: Duration,
}

/// Run `operation` until it returns `Ok` or the policy's ceiling is reached.
///
/// `operation` receives the 1-based attempt number. Every attempt runs the
/// whole operation again; nothing inside it is resumed.
pub async fn retry_until_ceiling<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!("Operation succeeded on attempt {attempt}");
                }
                return Ok(value);
            }
            Err(e) => {
                let elapsed = started.elapsed();
                let delay = policy.next_delay(attempt - 1);
                if elapsed + delay > policy.max_elapsed_time {
                    log::warn!(
                        "Giving up after {attempt} attempt(s) in {:.1}s: {e}",
                        elapsed.as_secs_f32()
                    );
                    return Err(RetryExhausted {
                        last_error: e,
                        attempts: attempt,
                        elapsed,
                    });
                }
                log::warn!(
                    "Attempt {attempt} failed, retrying in {:.1}s: {e}",
                    delay.as_secs_f32()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
