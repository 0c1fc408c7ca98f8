//! Retry behavior, per endpoint class.
//!
//! The shop backend exposes exactly two kinds of endpoint for this SDK:
//! order/auth/contact actions, which must never repeat on their own (a
//! failed action becomes a notice and the user re-triggers it by hand),
//! and the idempotent catalog read, which may retry transient faults.
//! That split is the whole policy surface — there is no per-request
//! configuration to tune.

use std::time::Duration;

/// How many times an idempotent read retries after the initial attempt.
const CATALOG_MAX_RETRIES: u32 = 3;
/// Backoff starts here and doubles per attempt.
const BASE_DELAY: Duration = Duration::from_millis(200);
/// Backoff ceiling; the free-tier backend can take a while to wake.
const MAX_DELAY: Duration = Duration::from_secs(10);

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// No retries — every order action, login, register, and contact send.
    #[default]
    None,
    /// Retry transport faults, 429, and 502/503/504 — catalog reads only.
    Idempotent,
}

impl RetryPolicy {
    /// Retry budget beyond the first attempt.
    pub fn max_retries(&self) -> u32 {
        match self {
            RetryPolicy::None => 0,
            RetryPolicy::Idempotent => CATALOG_MAX_RETRIES,
        }
    }

    /// Whether a response with this status code is worth repeating.
    pub fn retries_status(&self, status: u16) -> bool {
        match self {
            RetryPolicy::None => false,
            RetryPolicy::Idempotent => matches!(status, 429 | 502 | 503 | 504),
        }
    }

    /// Backoff before retry `attempt` (0-indexed): exponential from
    /// [`BASE_DELAY`], capped at [`MAX_DELAY`], with ±25% jitter so
    /// simultaneous clients don't stampede a waking backend.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = BASE_DELAY.as_millis() as f64 * 2f64.powi(attempt as i32);
        let capped = base.min(MAX_DELAY.as_millis() as f64);

        let jitter_range = capped * 0.25;
        let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;

        Duration::from_millis((capped + jitter).max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_never_retries() {
        let policy = RetryPolicy::default();
        assert_eq!(policy, RetryPolicy::None);
        assert_eq!(policy.max_retries(), 0);
        assert!(!policy.retries_status(503));
        assert!(!policy.retries_status(429));
    }

    #[test]
    fn test_idempotent_retries_transient_statuses_only() {
        let policy = RetryPolicy::Idempotent;
        assert!(policy.retries_status(429));
        assert!(policy.retries_status(502));
        assert!(policy.retries_status(503));
        assert!(policy.retries_status(504));

        // Application failures must surface immediately.
        assert!(!policy.retries_status(400));
        assert!(!policy.retries_status(404));
        assert!(!policy.retries_status(500));
    }

    #[test]
    fn test_backoff_grows_within_jitter_bounds() {
        let policy = RetryPolicy::Idempotent;
        for attempt in 0..3 {
            let expected = 200f64 * 2f64.powi(attempt as i32);
            let ms = policy.delay_for_attempt(attempt).as_millis() as f64;
            assert!(ms >= expected * 0.75 - 1.0, "attempt {attempt}: {ms}");
            assert!(ms <= expected * 1.25 + 1.0, "attempt {attempt}: {ms}");
        }
    }

    #[test]
    fn test_backoff_caps_at_ceiling() {
        let policy = RetryPolicy::Idempotent;
        // 200ms * 2^10 is far past the cap; jitter stays within ±25% of it.
        let ms = policy.delay_for_attempt(10).as_millis();
        assert!(ms <= 12_500);
        assert!(ms >= 7_499);
    }
}
