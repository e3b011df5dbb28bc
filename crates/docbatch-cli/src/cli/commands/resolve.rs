//! `docbatch resolve` – show the resolved parameter set for overrides.

use docbatch_core::config::DocbatchConfig;
use docbatch_core::params::{resolve, JobOverrides};

pub fn run_resolve(
    cfg: &DocbatchConfig,
    compute_profile: Option<String>,
    input: Option<String>,
    output: Option<String>,
) {
    let overrides = JobOverrides {
        compute_profile,
        input_location: input,
        output_location: output,
    };
    let params = resolve(&overrides, &cfg.defaults);
    println!("compute_profile = {}", params.compute_profile);
    println!("input_location  = {}", params.input_location);
    println!("output_location = {}", params.output_location);
}
