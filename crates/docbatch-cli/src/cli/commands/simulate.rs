//! `docbatch simulate` – drive the retry controller against a scripted
//! service and print what happened.

use anyhow::Result;
use std::time::Duration;

use docbatch_core::config::DocbatchConfig;
use docbatch_core::params::JobOverrides;
use docbatch_core::retry::{run_to_completion, RunRequest};
use docbatch_core::service::script::{parse_script, ScriptedService};

pub struct SimulateArgs {
    pub script: String,
    pub base: Option<String>,
    pub execution_id: String,
    pub compute_profile: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub backoff_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub run_timeout_secs: Option<u64>,
}

pub async fn run_simulate(cfg: &DocbatchConfig, args: SimulateArgs) -> Result<()> {
    let service = ScriptedService::new(parse_script(&args.script)?);

    let mut policy = cfg.retry_policy();
    if let Some(secs) = args.backoff_secs {
        policy.backoff = Duration::from_secs(secs);
    }
    if let Some(max) = args.max_retries {
        policy.max_retries = max;
    }
    if let Some(secs) = args.run_timeout_secs {
        policy.run_timeout = Duration::from_secs(secs);
    }

    let request = RunRequest {
        base_name: args.base.unwrap_or_else(|| cfg.naming.default_base.clone()),
        version_tag: cfg.naming.version_tag.clone(),
        execution_id: args.execution_id,
        overrides: JobOverrides {
            compute_profile: args.compute_profile,
            input_location: args.input,
            output_location: args.output,
        },
        defaults: cfg.defaults.clone(),
    };

    let result = run_to_completion(&service, &request, &policy).await;

    for (i, (name, params)) in service.submissions().iter().enumerate() {
        println!(
            "attempt {i}: {name} (profile={}, in={}, out={})",
            params.compute_profile, params.input_location, params.output_location
        );
    }
    match result {
        Ok(outcome) => {
            println!(
                "Succeeded after {} attempt(s); results at {}",
                outcome.attempts, outcome.output_location
            );
            Ok(())
        }
        Err(err) => {
            println!("Terminal failure [{}]: {err}", err.code());
            Err(err.into())
        }
    }
}
