//! Job parameter resolution: caller overrides merged over built-in defaults.
//!
//! Resolution happens once at the start of an execution; the resolved set is
//! immutable for the run's lifetime so retried attempts always submit the
//! exact same parameters.

use serde::{Deserialize, Serialize};

/// Built-in default compute profile for batch jobs.
pub const DEFAULT_COMPUTE_PROFILE: &str = "ml.g5.xlarge";
/// Built-in default input prefix.
pub const DEFAULT_INPUT_LOCATION: &str = "incoming/";
/// Built-in default output prefix.
pub const DEFAULT_OUTPUT_LOCATION: &str = "processed/runs/1/";

/// Fully-resolved parameters for one batch job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Compute profile identifier for the job (instance class, size).
    pub compute_profile: String,
    /// Prefix the job reads documents from.
    pub input_location: String,
    /// Prefix the job writes results to.
    pub output_location: String,
}

impl Default for JobParameters {
    fn default() -> Self {
        Self {
            compute_profile: DEFAULT_COMPUTE_PROFILE.to_string(),
            input_location: DEFAULT_INPUT_LOCATION.to_string(),
            output_location: DEFAULT_OUTPUT_LOCATION.to_string(),
        }
    }
}

/// Caller-supplied partial parameters. Any subset of fields may be set;
/// missing or empty fields fall back to the defaults during `resolve`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOverrides {
    #[serde(default)]
    pub compute_profile: Option<String>,
    #[serde(default)]
    pub input_location: Option<String>,
    #[serde(default)]
    pub output_location: Option<String>,
}

fn pick(over: Option<&String>, default: &str) -> String {
    match over {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

/// Merge caller overrides over a default parameter set. Per field, the
/// override wins when present and non-empty; otherwise the default applies.
/// Pure; no error path (an empty override set yields `defaults` unchanged).
pub fn resolve(overrides: &JobOverrides, defaults: &JobParameters) -> JobParameters {
    JobParameters {
        compute_profile: pick(overrides.compute_profile.as_ref(), &defaults.compute_profile),
        input_location: pick(overrides.input_location.as_ref(), &defaults.input_location),
        output_location: pick(overrides.output_location.as_ref(), &defaults.output_location),
    }
}
