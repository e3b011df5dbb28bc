use crate::cli::commands::{run_simulate, SimulateArgs};
use docbatch_core::config::DocbatchConfig;

fn args(script: &str) -> SimulateArgs {
    SimulateArgs {
        script: script.to_string(),
        base: None,
        execution_id: "test".to_string(),
        compute_profile: None,
        input: None,
        output: None,
        backoff_secs: Some(0),
        max_retries: None,
        run_timeout_secs: None,
    }
}

#[tokio::test]
async fn simulate_capacity_then_success() {
    let cfg = DocbatchConfig::default();
    run_simulate(&cfg, args("capacity,ok")).await.unwrap();
}

#[tokio::test]
async fn simulate_terminal_failure_is_an_error() {
    let cfg = DocbatchConfig::default();
    let err = run_simulate(&cfg, args("fail:ModelError: bad input"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ModelError"));
}

#[tokio::test]
async fn simulate_rejects_bad_script() {
    let cfg = DocbatchConfig::default();
    let err = run_simulate(&cfg, args("nonsense")).await.unwrap_err();
    assert!(err.to_string().contains("unknown script token"));
}
