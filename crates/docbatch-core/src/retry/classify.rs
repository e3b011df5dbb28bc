//! Classify raw failure causes into retryable-transient versus terminal.
//!
//! The job-execution service reports a failed attempt with an opaque cause
//! string. Structured causes are JSON objects carrying a `FailureReason`
//! field; plain causes are free text. Capacity and throttling conditions are
//! expected under normal load on a shared fleet and must not abort the batch;
//! everything else surfaces promptly.

use serde::Deserialize;
use thiserror::Error;

/// Substring marking a transient capacity condition in a structured reason.
const CAPACITY_MARKER: &str = "CapacityError";
/// Substring marking a throttled plain-text cause.
const THROTTLING_MARKER: &str = "ThrottlingException";

/// Verdict for one failure cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Whether the controller may retry the submission.
    pub retryable: bool,
    /// Human-readable reason surfaced when the failure is terminal.
    pub reason: String,
}

/// A cause that looks structured (starts with `{`) but fails to parse.
/// Surfaced as its own condition: guessing retryable would retry a truly
/// broken job, guessing terminal would abandon a recoverable one.
#[derive(Debug, Error)]
#[error("malformed structured failure cause: {raw_cause}")]
pub struct ClassifyError {
    pub raw_cause: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Deserialize)]
struct StructuredCause {
    #[serde(rename = "FailureReason")]
    failure_reason: Option<String>,
}

/// Classify a raw failure cause. First matching rule wins:
/// empty cause, structured (`{`-prefixed) cause with/without a
/// `FailureReason`, then plain-text throttling, then terminal verbatim.
pub fn classify(raw_cause: &str) -> Result<Classification, ClassifyError> {
    if raw_cause.is_empty() {
        return Ok(Classification {
            retryable: false,
            reason: "Unknown failure".to_string(),
        });
    }

    if raw_cause.starts_with('{') {
        let parsed: StructuredCause =
            serde_json::from_str(raw_cause).map_err(|source| ClassifyError {
                raw_cause: raw_cause.to_string(),
                source,
            })?;
        return Ok(match parsed.failure_reason {
            Some(reason) if reason.contains(CAPACITY_MARKER) => Classification {
                retryable: true,
                reason,
            },
            Some(reason) => Classification {
                retryable: false,
                reason,
            },
            None => Classification {
                retryable: false,
                reason: "Unknown failure".to_string(),
            },
        });
    }

    if raw_cause.contains(THROTTLING_MARKER) {
        return Ok(Classification {
            retryable: true,
            reason: raw_cause.to_string(),
        });
    }

    Ok(Classification {
        retryable: false,
        reason: raw_cause.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_capacity_error_is_retryable() {
        let c = classify(r#"{"FailureReason":"ClientError: CapacityError: no capacity"}"#).unwrap();
        assert!(c.retryable);
    }

    #[test]
    fn structured_other_reason_is_terminal() {
        let c = classify(r#"{"FailureReason":"ModelError: bad input"}"#).unwrap();
        assert!(!c.retryable);
        assert_eq!(c.reason, "ModelError: bad input");
    }

    #[test]
    fn structured_without_reason_is_unknown() {
        let c = classify(r#"{"ErrorCode":"States.TaskFailed"}"#).unwrap();
        assert!(!c.retryable);
        assert_eq!(c.reason, "Unknown failure");
    }

    #[test]
    fn structured_null_reason_is_unknown() {
        let c = classify(r#"{"FailureReason":null}"#).unwrap();
        assert!(!c.retryable);
        assert_eq!(c.reason, "Unknown failure");
    }

    #[test]
    fn plain_throttling_is_retryable() {
        let c = classify("Rate exceeded: ThrottlingException").unwrap();
        assert!(c.retryable);
    }

    #[test]
    fn plain_other_is_terminal_verbatim() {
        let c = classify("Some other message").unwrap();
        assert!(!c.retryable);
        assert_eq!(c.reason, "Some other message");
    }

    #[test]
    fn empty_cause_is_unknown_failure() {
        let c = classify("").unwrap();
        assert!(!c.retryable);
        assert_eq!(c.reason, "Unknown failure");
    }

    #[test]
    fn malformed_structured_cause_is_an_error() {
        let err = classify("{not valid json").unwrap_err();
        assert_eq!(err.raw_cause, "{not valid json");
    }
}
