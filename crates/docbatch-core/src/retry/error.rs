//! Terminal error taxonomy for one orchestration run.
//!
//! The caller only ever observes one of these conditions (or success);
//! classification and retry counting stay inside the controller.

use thiserror::Error;

use crate::retry::classify::ClassifyError;

/// Terminal failure of an orchestration run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A capacity/throttling failure recurred past the retry budget.
    /// Distinct from `NonCapacityFailure` so operators can tell "the service
    /// never accepted the job" from "the job itself is broken".
    #[error("Exceeded maximum retry attempts ({max}) for capacity/throttling errors")]
    MaxRetriesExceeded { max: u32 },

    /// The failure cause did not match a retryable pattern.
    #[error("{reason}")]
    NonCapacityFailure { reason: String },

    /// A structured-looking cause failed to parse; never guessed either way.
    #[error(transparent)]
    MalformedCause(#[from] ClassifyError),

    /// The enclosing run-level timeout elapsed.
    #[error("run timed out before reaching a terminal job state")]
    TimedOut,

    /// The submission call itself failed (transport/seam fault), as opposed
    /// to the service reporting a failed job.
    #[error("job execution service error: {0:#}")]
    Service(anyhow::Error),
}

impl RunError {
    /// Stable machine-readable code for the terminal condition.
    pub fn code(&self) -> &'static str {
        match self {
            RunError::MaxRetriesExceeded { .. } => "MaxRetriesExceeded",
            RunError::NonCapacityFailure { .. } => "NonCapacityFailure",
            RunError::MalformedCause(_) => "MalformedCause",
            RunError::TimedOut => "TimedOut",
            RunError::Service(_) => "ServiceError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_retries_message_names_budget() {
        let e = RunError::MaxRetriesExceeded { max: 10 };
        assert_eq!(
            e.to_string(),
            "Exceeded maximum retry attempts (10) for capacity/throttling errors"
        );
        assert_eq!(e.code(), "MaxRetriesExceeded");
    }

    #[test]
    fn non_capacity_surfaces_reason_verbatim() {
        let e = RunError::NonCapacityFailure {
            reason: "ModelError: bad input".to_string(),
        };
        assert_eq!(e.to_string(), "ModelError: bad input");
        assert_eq!(e.code(), "NonCapacityFailure");
    }
}
