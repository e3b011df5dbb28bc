//! In-process job service replaying a scripted sequence of outcomes.
//!
//! Stand-in for a real service binding during local testing: the `simulate`
//! CLI command and the controller tests drive the retry loop against a
//! script such as `capacity,capacity,ok`. Every submission is recorded with
//! its job name and parameters so callers can assert on what was sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{bail, Result};

use crate::params::JobParameters;
use crate::service::{AttemptOutcome, JobService};

/// One scripted attempt outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Attempt succeeds.
    Ok,
    /// Structured capacity failure (retryable).
    Capacity,
    /// Plain-text throttling failure (retryable).
    Throttle,
    /// Terminal failure with the given plain-text reason.
    Fail(String),
    /// Structured-looking cause that does not parse.
    Malformed,
    /// Never resolves; exercises the run-level timeout.
    Hang,
}

impl ScriptStep {
    fn outcome(&self) -> AttemptOutcome {
        match self {
            ScriptStep::Ok => AttemptOutcome::Succeeded,
            ScriptStep::Capacity => AttemptOutcome::Failed {
                raw_cause: r#"{"FailureReason":"ClientError: CapacityError: insufficient capacity"}"#
                    .to_string(),
            },
            ScriptStep::Throttle => AttemptOutcome::Failed {
                raw_cause: "Rate exceeded: ThrottlingException".to_string(),
            },
            ScriptStep::Fail(reason) => AttemptOutcome::Failed {
                raw_cause: reason.clone(),
            },
            ScriptStep::Malformed => AttemptOutcome::Failed {
                raw_cause: "{not valid json".to_string(),
            },
            // Hang is handled before outcome() is reached.
            ScriptStep::Hang => unreachable!("hang step has no outcome"),
        }
    }
}

/// Parse a comma-separated script, e.g. `capacity,throttle,fail:bad model,ok`.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for token in script.split(',') {
        let token = token.trim();
        let step = match token {
            "ok" => ScriptStep::Ok,
            "capacity" => ScriptStep::Capacity,
            "throttle" => ScriptStep::Throttle,
            "malformed" => ScriptStep::Malformed,
            "hang" => ScriptStep::Hang,
            _ => match token.strip_prefix("fail:") {
                Some(reason) if !reason.is_empty() => ScriptStep::Fail(reason.to_string()),
                _ => bail!("unknown script token: {token:?}"),
            },
        };
        steps.push(step);
    }
    if steps.is_empty() {
        bail!("empty script");
    }
    Ok(steps)
}

/// Scripted service: pops one step per submission; the last step repeats if
/// the script runs out (so a one-step `capacity` script fails every attempt).
#[derive(Debug)]
pub struct ScriptedService {
    steps: Mutex<VecDeque<ScriptStep>>,
    submissions: Mutex<Vec<(String, JobParameters)>>,
    cancelled: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            submissions: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        }
    }

    /// All `(job_name, params)` pairs submitted so far, in order.
    pub fn submissions(&self) -> Vec<(String, JobParameters)> {
        self.submissions.lock().unwrap().clone()
    }

    /// Job names for which cancellation was requested.
    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }

    fn next_step(&self) -> ScriptStep {
        let mut steps = self.steps.lock().unwrap();
        if steps.len() > 1 {
            steps.pop_front().unwrap()
        } else {
            steps.front().cloned().expect("script is never empty")
        }
    }
}

impl JobService for ScriptedService {
    async fn submit(
        &self,
        job_name: &str,
        params: &JobParameters,
    ) -> anyhow::Result<AttemptOutcome> {
        self.submissions
            .lock()
            .unwrap()
            .push((job_name.to_string(), params.clone()));
        let step = self.next_step();
        tracing::debug!(job_name, ?step, "scripted submission");
        if matches!(step, ScriptStep::Hang) {
            std::future::pending::<()>().await;
        }
        Ok(step.outcome())
    }

    async fn cancel(&self, job_name: &str) -> anyhow::Result<()> {
        self.cancelled.lock().unwrap().push(job_name.to_string());
        Ok(())
    }
}
