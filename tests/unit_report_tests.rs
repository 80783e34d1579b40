//! # Report Unit Tests / 报告单元测试
//!
//! Tests for `Harness::report`, exit codes and the JSON summary export.
//!
//! 测试 `Harness::report`、退出码以及 JSON 摘要导出。

mod common;

use common::{harness_with, lines_of, output_of, plain_harness};
use std::fs;
use tap_harness::reporting::write_summary_json;
use tap_harness::{FAILURE_EXIT_CODE, HarnessConfig, Summary};
use tempfile::tempdir;

#[cfg(test)]
mod exit_code_tests {
    use super::*;

    #[test]
    fn test_all_passed_exits_zero() {
        let mut h = plain_harness();
        for line in 1..=5 {
            h.record("f.rs", line, "p", "true", true);
        }
        assert_eq!(h.report(), 0);
    }

    #[test]
    fn test_single_failure_exits_nonzero() {
        let mut h = plain_harness();
        for line in 1..=5 {
            h.record("f.rs", line, "p", "true", true);
        }
        h.record("f.rs", 6, "f", "false", false);
        assert_eq!(h.report(), FAILURE_EXIT_CODE);
        assert_eq!(FAILURE_EXIT_CODE, 2);
    }

    #[test]
    fn test_no_assertions_exits_zero() {
        let mut h = plain_harness();
        assert_eq!(h.report(), 0);
    }

    #[test]
    fn test_silenced_report_keeps_exit_code() {
        let mut h = harness_with(HarnessConfig {
            silence_report: true,
            ..HarnessConfig::plain()
        });
        h.record("f.rs", 1, "f", "false", false);
        let before = output_of(&h);

        assert_eq!(h.report(), 2);
        assert_eq!(output_of(&h), before);
    }

    #[test]
    fn test_summary_exit_code() {
        let ok = Summary {
            total: 2,
            passed: 2,
            failed: 0,
        };
        let bad = Summary {
            total: 2,
            passed: 1,
            failed: 1,
        };
        assert!(ok.is_success());
        assert_eq!(ok.exit_code(), 0);
        assert!(!bad.is_success());
        assert_eq!(bad.exit_code(), 2);
    }
}

#[cfg(test)]
mod report_output_tests {
    use super::*;

    #[test]
    fn test_report_twice_prints_twice_without_reset() {
        let mut h = plain_harness();
        h.record("f.rs", 1, "p", "true", true);
        h.report();
        h.report();

        let lines = lines_of(&h);
        assert_eq!(lines.iter().filter(|l| l.as_str() == "1..1").count(), 2);
        assert_eq!(h.state().assertion_count(), 1);
    }

    #[test]
    fn test_report_matches_state() {
        let mut h = plain_harness();
        h.record("f.rs", 1, "p", "true", true);
        h.record("f.rs", 2, "f", "false", false);
        h.record("f.rs", 3, "p", "true", true);

        assert_eq!(
            h.summary(),
            Summary {
                total: 3,
                passed: 2,
                failed: 1,
            }
        );
        h.report();
        assert!(output_of(&h).ends_with("1..3\n# tests 3\n# pass  2\n# fail  1\n"));
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_write_summary_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = Summary {
            total: 8,
            passed: 7,
            failed: 1,
        };

        write_summary_json(&summary, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Summary = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, summary);
        assert!(content.contains("\"failed\": 1"));
    }

    #[test]
    fn test_write_summary_json_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/summary.json");
        let summary = Summary {
            total: 0,
            passed: 0,
            failed: 0,
        };

        let err = write_summary_json(&summary, &path).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
