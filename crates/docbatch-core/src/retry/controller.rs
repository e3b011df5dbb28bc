//! The submit → wait → classify → resubmit loop for one orchestration run.
//!
//! One run is a single sequential flow: attempt N+1 never starts before
//! attempt N reaches a terminal signal. Concurrent runs are independent and
//! share no state; job names are namespaced by execution id.

use tokio::time::Instant;

use crate::naming;
use crate::params::{self, JobOverrides, JobParameters};
use crate::retry::classify::classify;
use crate::retry::error::RunError;
use crate::retry::policy::{RetryDecision, RetryPolicy, StopReason};
use crate::service::{AttemptOutcome, JobService};

/// Inputs for one orchestration run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Descriptive prefix for job names; truncated to 20 chars.
    pub base_name: String,
    /// Deployment marker embedded in job names; operator-bumped config.
    pub version_tag: String,
    /// Caller-chosen id distinguishing this run from concurrent ones.
    pub execution_id: String,
    /// Partial parameters; merged over `defaults` at run start.
    pub overrides: JobOverrides,
    /// Default parameter set (config-backed).
    pub defaults: JobParameters,
}

/// Successful terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Where the job wrote its results (the resolved output location).
    pub output_location: String,
    /// Total submissions issued, including the successful one.
    pub attempts: u32,
}

/// Per-run state owned exclusively by the controller. `params` is fixed for
/// the run's lifetime; `retry_count` only ever increments, by 1 per retry,
/// and doubles as the attempt number embedded in job names.
struct ExecutionState {
    retry_count: u32,
    params: JobParameters,
}

/// Drive one run to a terminal state.
///
/// Resolves parameters once, then loops: derive a name for the current
/// attempt, submit, await the service's terminal signal, classify a failure,
/// and either back off and resubmit or stop. The policy's `run_timeout`
/// bounds every await; on expiry the in-flight submission is cancelled
/// best-effort and the run surfaces `TimedOut`.
pub async fn run_to_completion<S: JobService>(
    service: &S,
    request: &RunRequest,
    policy: &RetryPolicy,
) -> Result<RunOutcome, RunError> {
    let mut state = ExecutionState {
        retry_count: 0,
        params: params::resolve(&request.overrides, &request.defaults),
    };
    let deadline = Instant::now() + policy.run_timeout;
    tracing::info!(
        execution_id = %request.execution_id,
        compute_profile = %state.params.compute_profile,
        input = %state.params.input_location,
        output = %state.params.output_location,
        "starting orchestration run"
    );

    loop {
        let job_name = naming::job_name(
            &request.base_name,
            &request.version_tag,
            &request.execution_id,
            state.retry_count,
        );
        tracing::info!(job_name = %job_name, attempt = state.retry_count, "submitting batch job");

        let outcome = tokio::select! {
            out = service.submit(&job_name, &state.params) => out.map_err(RunError::Service)?,
            _ = tokio::time::sleep_until(deadline) => {
                tracing::warn!(job_name = %job_name, "run timeout elapsed with a submission in flight");
                if let Err(err) = service.cancel(&job_name).await {
                    tracing::debug!(job_name = %job_name, error = %err, "cancel request failed");
                }
                return Err(RunError::TimedOut);
            }
        };

        match outcome {
            AttemptOutcome::Succeeded => {
                let attempts = state.retry_count + 1;
                tracing::info!(job_name = %job_name, attempts, "batch job succeeded");
                return Ok(RunOutcome {
                    output_location: state.params.output_location.clone(),
                    attempts,
                });
            }
            AttemptOutcome::Failed { raw_cause } => {
                let classification = classify(&raw_cause)?;
                tracing::info!(
                    job_name = %job_name,
                    retryable = classification.retryable,
                    reason = %classification.reason,
                    "batch job failed"
                );
                match policy.decide(state.retry_count, &classification) {
                    RetryDecision::Stop(StopReason::NotRetryable { reason }) => {
                        return Err(RunError::NonCapacityFailure { reason });
                    }
                    RetryDecision::Stop(StopReason::BudgetExhausted { max_retries }) => {
                        return Err(RunError::MaxRetriesExceeded { max: max_retries });
                    }
                    RetryDecision::RetryAfter(delay) => {
                        tracing::info!(
                            job_name = %job_name,
                            backoff_secs = delay.as_secs(),
                            "transient failure; backing off before resubmission"
                        );
                        tokio::select! {
                            _ = tokio::time::sleep(delay) => {}
                            _ = tokio::time::sleep_until(deadline) => {
                                tracing::warn!("run timeout elapsed during backoff");
                                return Err(RunError::TimedOut);
                            }
                        }
                        state.retry_count += 1;
                    }
                }
            }
        }
    }
}
