//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the harness components:
//! the running counters of a test run, the ephemeral result of a single assertion,
//! and the summary snapshot consumed by the report.
//!
//! 此模块定义了测试框架各组件共享的数据结构：
//! 测试运行的计数器、单个断言的临时结果，以及报告使用的摘要快照。

use serde::{Deserialize, Serialize};

/// Exit code returned by the report when at least one assertion failed.
/// 当至少有一个断言失败时，报告返回的退出码。
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Placeholder printed in failure diagnostics when no test is executing.
/// 当没有测试正在执行时，在失败诊断中打印的占位名称。
pub const UNKNOWN_TEST_NAME: &str = "<unknown>";

/// The mutable state of one test run.
///
/// Counters only ever grow. After every completed assertion
/// `assertion_count == pass_count + fail_count` holds.
///
/// 一次测试运行的可变状态。计数器只增不减。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunState {
    assertion_count: usize,
    pass_count: usize,
    fail_count: usize,
    current_test_name: Option<String>,
}

impl RunState {
    /// Creates an empty run state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one assertion and returns its 1-based index.
    /// 记录一个断言并返回其从 1 开始的序号。
    pub(crate) fn count(&mut self, passed: bool) -> usize {
        self.assertion_count += 1;
        if passed {
            self.pass_count += 1;
        } else {
            self.fail_count += 1;
        }
        self.assertion_count
    }

    /// Replaces the current test name, returning the previous one.
    pub(crate) fn enter_test(&mut self, name: &str) -> Option<String> {
        self.current_test_name.replace(name.to_string())
    }

    pub(crate) fn restore_test(&mut self, previous: Option<String>) {
        self.current_test_name = previous;
    }

    pub fn assertion_count(&self) -> usize {
        self.assertion_count
    }

    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    /// Name of the test currently executing, if any.
    pub fn current_test_name(&self) -> Option<&str> {
        self.current_test_name.as_deref()
    }

    /// Takes a read-only snapshot of the counters.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.assertion_count,
            passed: self.pass_count,
            failed: self.fail_count,
        }
    }
}

/// The outcome of a single assertion, built on each call and consumed by the formatter.
/// 单个断言的结果，每次调用时构建，并由格式化器立即消费。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionResult<'a> {
    /// Human-readable description of the check / 检查的可读描述
    pub message: &'a str,
    /// Literal source text of the checked expression / 被检查表达式的源代码文本
    pub expression_text: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub passed: bool,
}

/// Final counters of a run, as printed by the report and exported as JSON.
/// 一次运行的最终计数，由报告打印并可导出为 JSON。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// `0` when nothing failed, [`FAILURE_EXIT_CODE`] otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 { 0 } else { FAILURE_EXIT_CODE }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
