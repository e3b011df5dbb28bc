//! `docbatch classify <raw-cause>` – show the classifier's verdict.

use anyhow::Result;
use docbatch_core::retry::classify;

pub fn run_classify(raw_cause: &str) -> Result<()> {
    let verdict = classify(raw_cause)?;
    if verdict.retryable {
        println!("retryable (transient capacity/throttling)");
    } else {
        println!("terminal: {}", verdict.reason);
    }
    Ok(())
}
