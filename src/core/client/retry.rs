use std::time::Duration;

/// Delay strategy between retry attempts.
#[derive(Debug, Clone)]
pub enum Backoff {
    /// The same delay before every retry.
    Fixed(Duration),
    /// `base * factor^n` before retry `n`, capped at `max`.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
    },
}

/// Retry policy for GraphQL calls.
///
/// The endpoint fails transiently in several ways (reset connections,
/// 5xx statuses, HTML error pages where JSON belongs), so send errors,
/// non-success statuses, and undecodable bodies are all treated as
/// retryable. Page fetches are never retried; their callers degrade to an
/// empty result instead.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Fixed(Duration::from_secs(1)),
        }
    }
}

impl RetryConfig {
    /// Delay before retry `n` (zero-based; `0` precedes the second attempt).
    pub(crate) fn delay(&self, n: u32) -> Duration {
        match &self.backoff {
            Backoff::Fixed(d) => *d,
            Backoff::Exponential { base, factor, max } => {
                let scaled = base.as_secs_f64() * factor.powi(n as i32);
                Duration::from_secs_f64(scaled.min(max.as_secs_f64()))
            }
        }
    }
}
