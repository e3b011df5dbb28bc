//! Seam to the external job-execution service.
//!
//! The controller only needs two things from the service: submit a named job
//! and (best-effort) cancel one. Each submitted attempt resolves to exactly
//! one terminal signal; the raw failure cause is opaque here and interpreted
//! by the classifier.

pub mod script;

use crate::params::JobParameters;

/// Terminal signal for one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded,
    Failed {
        /// Opaque cause string; may or may not be structured JSON.
        raw_cause: String,
    },
}

/// External job-execution service.
///
/// `submit` suspends until the service reports the attempt's terminal
/// outcome; the service governs job duration. A transport-level `Err` is
/// distinct from the service reporting a failed job.
#[allow(async_fn_in_trait)]
pub trait JobService {
    async fn submit(
        &self,
        job_name: &str,
        params: &JobParameters,
    ) -> anyhow::Result<AttemptOutcome>;

    /// Request cancellation of an in-flight submission. Best-effort: services
    /// without cancellation may ignore this and let the job finish.
    async fn cancel(&self, job_name: &str) -> anyhow::Result<()>;
}
