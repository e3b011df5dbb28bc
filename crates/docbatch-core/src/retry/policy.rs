use std::time::Duration;

use crate::retry::classify::Classification;

/// Why the policy refused a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The cause was not a capacity/throttling condition.
    NotRetryable { reason: String },
    /// The retry budget is spent.
    BudgetExhausted { max_retries: u32 },
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Stop the run and surface the failure.
    Stop(StopReason),
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Bounded fixed-backoff policy for batch submissions.
///
/// Capacity and throttling failures on a shared fleet typically clear on the
/// order of minutes, so the backoff is a fixed interval rather than
/// exponential. `run_timeout` bounds the whole run independently of the
/// retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of retries (the initial attempt is not counted).
    pub max_retries: u32,
    /// Delay before each retried submission.
    pub backoff: Duration,
    /// Enclosing bound on the whole run, any state.
    pub run_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 10,
            backoff: Duration::from_secs(120),
            run_timeout: Duration::from_secs(2 * 60 * 60),
        }
    }
}

impl RetryPolicy {
    /// Decide whether a classified failure warrants another submission.
    /// `retry_count` is the number of retries already taken (0 after the
    /// initial attempt).
    pub fn decide(&self, retry_count: u32, classification: &Classification) -> RetryDecision {
        if !classification.retryable {
            return RetryDecision::Stop(StopReason::NotRetryable {
                reason: classification.reason.clone(),
            });
        }
        if retry_count >= self.max_retries {
            return RetryDecision::Stop(StopReason::BudgetExhausted {
                max_retries: self.max_retries,
            });
        }
        RetryDecision::RetryAfter(self.backoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retryable() -> Classification {
        Classification {
            retryable: true,
            reason: "CapacityError".to_string(),
        }
    }

    #[test]
    fn stop_for_non_retryable() {
        let p = RetryPolicy::default();
        let c = Classification {
            retryable: false,
            reason: "ModelError: bad input".to_string(),
        };
        assert_eq!(
            p.decide(0, &c),
            RetryDecision::Stop(StopReason::NotRetryable {
                reason: "ModelError: bad input".to_string()
            })
        );
    }

    #[test]
    fn fixed_backoff_while_budget_remains() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(0, &retryable()), RetryDecision::RetryAfter(p.backoff));
        assert_eq!(p.decide(9, &retryable()), RetryDecision::RetryAfter(p.backoff));
    }

    #[test]
    fn respects_retry_budget() {
        let p = RetryPolicy::default();
        assert_eq!(
            p.decide(10, &retryable()),
            RetryDecision::Stop(StopReason::BudgetExhausted { max_retries: 10 })
        );
    }

    #[test]
    fn non_retryable_wins_over_exhausted_budget() {
        let p = RetryPolicy { max_retries: 0, ..Default::default() };
        let c = Classification {
            retryable: false,
            reason: "bad".to_string(),
        };
        assert!(matches!(
            p.decide(0, &c),
            RetryDecision::Stop(StopReason::NotRetryable { .. })
        ));
    }
}
