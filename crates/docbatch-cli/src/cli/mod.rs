//! CLI for the DocBatch submission retry controller.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use docbatch_core::config;

use commands::{run_classify, run_completions, run_name, run_resolve, run_simulate};

/// Top-level CLI for the DocBatch batch submission driver.
#[derive(Debug, Parser)]
#[command(name = "docbatch")]
#[command(about = "DocBatch: batch submission retry controller for a document-OCR endpoint", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the retry controller against a scripted job service.
    Simulate {
        /// Comma-separated attempt outcomes: ok, capacity, throttle,
        /// malformed, hang, fail:<reason>. The last token repeats.
        #[arg(long, default_value = "capacity,ok")]
        script: String,

        /// Base name for derived job names (default from config).
        #[arg(long)]
        base: Option<String>,

        /// Execution identifier namespacing this run's job names.
        #[arg(long, default_value = "local")]
        execution_id: String,

        /// Override the compute profile.
        #[arg(long)]
        compute_profile: Option<String>,

        /// Override the input location.
        #[arg(long)]
        input: Option<String>,

        /// Override the output location.
        #[arg(long)]
        output: Option<String>,

        /// Backoff between attempts in seconds (default from config).
        #[arg(long)]
        backoff_secs: Option<u64>,

        /// Maximum retries (default from config).
        #[arg(long)]
        max_retries: Option<u32>,

        /// Run-level timeout in seconds (default from config).
        #[arg(long)]
        run_timeout_secs: Option<u64>,
    },

    /// Classify a raw failure cause as retryable or terminal.
    Classify {
        /// The raw cause string as reported by the job-execution service.
        raw_cause: String,
    },

    /// Preview the job name derived for an attempt.
    Name {
        /// Base name (truncated to 20 characters).
        #[arg(long)]
        base: Option<String>,

        /// Execution identifier.
        #[arg(long)]
        execution_id: String,

        /// Attempt number (the run's current retry count).
        #[arg(long, default_value = "0")]
        attempt: u32,
    },

    /// Show the resolved job parameters for a set of overrides.
    Resolve {
        /// Override the compute profile.
        #[arg(long)]
        compute_profile: Option<String>,

        /// Override the input location.
        #[arg(long)]
        input: Option<String>,

        /// Override the output location.
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Simulate {
                script,
                base,
                execution_id,
                compute_profile,
                input,
                output,
                backoff_secs,
                max_retries,
                run_timeout_secs,
            } => {
                run_simulate(
                    &cfg,
                    commands::SimulateArgs {
                        script,
                        base,
                        execution_id,
                        compute_profile,
                        input,
                        output,
                        backoff_secs,
                        max_retries,
                        run_timeout_secs,
                    },
                )
                .await?;
            }
            CliCommand::Classify { raw_cause } => run_classify(&raw_cause)?,
            CliCommand::Name {
                base,
                execution_id,
                attempt,
            } => run_name(&cfg, base.as_deref(), &execution_id, attempt),
            CliCommand::Resolve {
                compute_profile,
                input,
                output,
            } => run_resolve(&cfg, compute_profile, input, output),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
