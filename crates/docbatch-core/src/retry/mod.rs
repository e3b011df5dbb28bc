//! Retry policy and the submission retry controller.
//!
//! This module encapsulates failure classification (capacity, throttling vs
//! terminal causes), the bounded backoff policy, and the submit → wait →
//! classify → resubmit loop so that callers see a single entry point with a
//! small set of terminal outcomes.

mod classify;
mod controller;
mod error;
mod policy;

pub use classify::{classify, Classification, ClassifyError};
pub use controller::{run_to_completion, RunOutcome, RunRequest};
pub use error::RunError;
pub use policy::{RetryDecision, RetryPolicy, StopReason};
