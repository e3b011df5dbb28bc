//! Job name derivation: unique, length-bounded identifiers per attempt.
//!
//! The downstream job-execution service rejects identifiers longer than 63
//! characters and treats name collisions as errors, so names embed the
//! execution id (namespacing across concurrent runs) and the attempt number
//! (uniqueness across retries of one run).

/// Maximum characters kept from the caller's base name.
pub const MAX_BASE_LEN: usize = 20;
/// Identifier length limit imposed by the job-execution service.
pub const MAX_NAME_LEN: usize = 63;

/// Derive the job name for one submission attempt.
///
/// Format: `<base20>-<version_tag>-<execution_id>-<attempt>`. Deterministic
/// for identical inputs, and distinct across attempts of the same execution.
/// An empty `base` is valid and simply yields a less descriptive prefix.
pub fn job_name(base: &str, version_tag: &str, execution_id: &str, attempt: u32) -> String {
    let base: String = base.chars().take(MAX_BASE_LEN).collect();
    let name = format!("{base}-{version_tag}-{execution_id}-{attempt}");
    if name.len() <= MAX_NAME_LEN {
        return name;
    }

    // Over budget: shorten the execution id from the left so the attempt
    // suffix (the uniqueness carrier) and the most distinctive tail of the
    // id both survive.
    let fixed = base.len() + version_tag.len() + format!("{attempt}").len() + 3;
    let keep = MAX_NAME_LEN.saturating_sub(fixed);
    let id_tail: String = execution_id
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{base}-{version_tag}-{id_tail}-{attempt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_all_parts() {
        let name = job_name("ocr-batch", "v1", "exec42", 0);
        assert_eq!(name, "ocr-batch-v1-exec42-0");
    }

    #[test]
    fn truncates_long_base() {
        let base = "a-very-long-descriptive-job-base-name";
        let name = job_name(base, "v1", "e1", 3);
        assert!(name.starts_with(&base[..MAX_BASE_LEN]));
        assert!(!name.contains("descriptive-job"));
        assert!(name.ends_with("-3"));
    }

    #[test]
    fn deterministic_for_same_inputs() {
        assert_eq!(job_name("b", "v1", "e", 2), job_name("b", "v1", "e", 2));
    }

    #[test]
    fn distinct_across_attempts() {
        let a0 = job_name("batch", "v1", "exec-1", 0);
        let a1 = job_name("batch", "v1", "exec-1", 1);
        assert_ne!(a0, a1);
    }

    #[test]
    fn distinct_across_executions() {
        let e1 = job_name("batch", "v1", "exec-1", 0);
        let e2 = job_name("batch", "v1", "exec-2", 0);
        assert_ne!(e1, e2);
    }

    #[test]
    fn stays_within_identifier_limit() {
        let long_id = "x".repeat(80);
        let name = job_name("twenty-char-base-nam", "v12", &long_id, 10);
        assert!(name.len() <= MAX_NAME_LEN, "name too long: {}", name.len());
        assert!(name.ends_with("-10"));
    }

    #[test]
    fn long_ids_remain_distinct_per_attempt() {
        let long_id = "run-2026-08-28-obscenely-long-execution-identifier".repeat(2);
        let a0 = job_name("base", "v1", &long_id, 0);
        let a1 = job_name("base", "v1", &long_id, 1);
        assert_ne!(a0, a1);
        assert!(a0.len() <= MAX_NAME_LEN && a1.len() <= MAX_NAME_LEN);
    }

    #[test]
    fn empty_base_still_valid() {
        let name = job_name("", "v1", "e", 0);
        assert_eq!(name, "-v1-e-0");
    }
}
