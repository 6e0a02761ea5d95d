//! Fetch retry policy.
//!
//! The policy only answers "retry or give up, and after how long"; the
//! controller owns the counter and the scheduling.

use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Fixed-delay, bounded retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the initial attempt.
    pub max_retries: u32,
    /// Delay between a failure and the next attempt.
    pub delay: Duration,
}

/// Outcome of consulting the policy after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter(Duration),
    GiveUp,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn fixed(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Decide what to do after a failure, given how many retries already ran.
    pub fn decide(&self, retries_so_far: u32) -> RetryDecision {
        if retries_so_far < self.max_retries {
            RetryDecision::RetryAfter(self.delay)
        } else {
            RetryDecision::GiveUp
        }
    }

    pub fn is_exhausted(&self, retries_so_far: u32) -> bool {
        retries_so_far >= self.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_retries_three_times_two_seconds_apart() {
        let policy = RetryPolicy::default();

        for retries in 0..3 {
            assert_eq!(
                policy.decide(retries),
                RetryDecision::RetryAfter(Duration::from_secs(2))
            );
            assert!(!policy.is_exhausted(retries));
        }

        assert_eq!(policy.decide(3), RetryDecision::GiveUp);
        assert!(policy.is_exhausted(3));
    }

    #[test]
    fn zero_retries_gives_up_immediately() {
        let policy = RetryPolicy::fixed(0, Duration::from_millis(5));
        assert_eq!(policy.decide(0), RetryDecision::GiveUp);
        assert!(policy.is_exhausted(0));
    }
}
