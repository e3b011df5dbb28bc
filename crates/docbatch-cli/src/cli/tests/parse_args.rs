use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn simulate_defaults() {
    let cmd = parse(&["docbatch", "simulate"]);
    match cmd {
        CliCommand::Simulate {
            script,
            execution_id,
            base,
            backoff_secs,
            ..
        } => {
            assert_eq!(script, "capacity,ok");
            assert_eq!(execution_id, "local");
            assert!(base.is_none());
            assert!(backoff_secs.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn simulate_with_overrides() {
    let cmd = parse(&[
        "docbatch",
        "simulate",
        "--script",
        "throttle,ok",
        "--input",
        "incoming/batchA/",
        "--backoff-secs",
        "1",
        "--max-retries",
        "2",
    ]);
    match cmd {
        CliCommand::Simulate {
            script,
            input,
            backoff_secs,
            max_retries,
            ..
        } => {
            assert_eq!(script, "throttle,ok");
            assert_eq!(input.as_deref(), Some("incoming/batchA/"));
            assert_eq!(backoff_secs, Some(1));
            assert_eq!(max_retries, Some(2));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn classify_takes_positional_cause() {
    let cmd = parse(&["docbatch", "classify", "Rate exceeded: ThrottlingException"]);
    match cmd {
        CliCommand::Classify { raw_cause } => {
            assert_eq!(raw_cause, "Rate exceeded: ThrottlingException");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn name_requires_execution_id() {
    assert!(Cli::try_parse_from(["docbatch", "name"]).is_err());
    let cmd = parse(&["docbatch", "name", "--execution-id", "e1", "--attempt", "3"]);
    match cmd {
        CliCommand::Name {
            execution_id,
            attempt,
            ..
        } => {
            assert_eq!(execution_id, "e1");
            assert_eq!(attempt, 3);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn resolve_accepts_partial_overrides() {
    let cmd = parse(&["docbatch", "resolve", "--output", "processed/custom/"]);
    match cmd {
        CliCommand::Resolve { output, input, .. } => {
            assert_eq!(output.as_deref(), Some("processed/custom/"));
            assert!(input.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn completions_parses_shell() {
    let cmd = parse(&["docbatch", "completions", "bash"]);
    assert!(matches!(cmd, CliCommand::Completions { .. }));
}
