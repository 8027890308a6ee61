//! Retry and backoff policy for suggestion requests

/// Bounded exponential backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub max_attempts: u32,
    pub base_delay_ms: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl Backoff {
    /// Delay after the given 0-based attempt: `base * 2^attempt`
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        self.base_delay_ms.saturating_mul(1u32 << attempt.min(31))
    }
}

/// What to do with one HTTP attempt's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// 2xx: read the body
    Success,
    /// 4xx: abort immediately, the request itself is bad
    Abort,
    /// Anything else (5xx, redirects we don't follow): try again
    Retry,
}

pub fn classify_status(status: u16) -> AttemptOutcome {
    match status {
        200..=299 => AttemptOutcome::Success,
        400..=499 => AttemptOutcome::Abort,
        _ => AttemptOutcome::Retry,
    }
}
