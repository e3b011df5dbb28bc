//! `docbatch name` – preview the job name derived for an attempt.

use docbatch_core::config::DocbatchConfig;
use docbatch_core::naming;

pub fn run_name(cfg: &DocbatchConfig, base: Option<&str>, execution_id: &str, attempt: u32) {
    let base = base.unwrap_or(&cfg.naming.default_base);
    let name = naming::job_name(base, &cfg.naming.version_tag, execution_id, attempt);
    println!("{name}");
}
