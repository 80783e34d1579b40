//! # Demo Command Module / 演示命令模块
//!
//! This module implements the `demo` command: a small suite written against the
//! harness the same way a library's own test binary would be, run to stdout.
//!
//! 此模块实现了 `demo` 命令：一个像库自身测试程序那样针对测试框架编写的小型测试套件，
//! 输出到 stdout。

use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::Path;

use crate::core::config::HarnessConfig;
use crate::core::execution::TestSuite;
use crate::core::harness::Harness;
use crate::infra::t;
use crate::reporting::write_summary_json;
use crate::{tap_assert, tap_assert_eq, tap_assert_str_eq};

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn mult(a: i32, b: i32) -> i32 {
    a * b
}

fn pizza() -> &'static str {
    "calzone"
}

pub fn test_add<W: Write>(h: &mut Harness<W>) {
    tap_assert!(h, "2 + 2 = 4", add(2, 2) == 4);
    tap_assert_eq!(h, 6, add(3, 3));
}

pub fn test_mult<W: Write>(h: &mut Harness<W>) {
    tap_assert!(h, "2 * 2 = 4", mult(2, 2) == 4);
    tap_assert_eq!(h, 9, mult(3, 3));
}

pub fn test_str<W: Write>(h: &mut Harness<W>) {
    tap_assert_str_eq!(h, "calzone", pizza());
}

/// Stops at its second assertion; the third is never recorded.
pub fn test_short_circuit<W: Write>(h: &mut Harness<W>) {
    tap_assert!(h, "2 + 2 == 4", add(2, 2) == 4);
    tap_assert!(h, "1 == 2", add(1, 0) == 2);
    tap_assert!(h, "3 == 3", add(3, 0) == 3);
}

/// Runs after `test_short_circuit` to show that a failure only ends its own test.
pub fn test_after_failure<W: Write>(h: &mut Harness<W>) {
    tap_assert_str_eq!(h, "a", String::from("a"));
}

/// The demo suite. `include_failing` adds the two tests demonstrating short-circuiting.
///
/// 演示测试套件。`include_failing` 会加入演示短路行为的两个测试。
pub fn suite<W: Write + 'static>(include_failing: bool) -> TestSuite<W> {
    let suite = TestSuite::new()
        .test("test_add", test_add::<W>)
        .test("test_mult", test_mult::<W>)
        .test("test_str", test_str::<W>);

    if include_failing {
        suite
            .test("test_short_circuit", test_short_circuit::<W>)
            .test("test_after_failure", test_after_failure::<W>)
    } else {
        suite
    }
}

/// Executes the demo command.
///
/// # Arguments
/// * `config` - Output flags of the harness
/// * `include_failing` - Also run the failing tests
/// * `summary_json` - Optional path for a JSON copy of the summary
///
/// # Returns
/// The harness exit code: `0` when every assertion passed, `2` otherwise
pub fn execute(config: HarnessConfig, include_failing: bool, summary_json: Option<&Path>) -> Result<i32> {
    let mut harness = Harness::stdout(config);
    let code = suite(include_failing).run(&mut harness);

    if let Some(path) = summary_json {
        write_summary_json(&harness.summary(), path)
            .with_context(|| t!("summary_json_failed", path = path.display()).to_string())?;
        eprintln!("{}", t!("summary_json_written", path = path.display()));
    }

    if code == 0 {
        eprintln!("{}", t!("demo_overall_passed").green().bold());
    } else {
        eprintln!("{}", t!("demo_overall_failed", code = code).red().bold());
    }
    Ok(code)
}
