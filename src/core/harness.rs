//! # Harness & Assertion Recorder / 测试框架与断言记录器
//!
//! [`Harness`] owns everything a run mutates: the [`RunState`] counters, the
//! [`TapFormatter`] and the output writer. Test bodies receive it by `&mut` and
//! record assertions through [`Harness::record`] or [`Harness::check`], usually via
//! the `tap_assert!` family of macros.
//!
//! [`Harness`] 拥有一次运行中所有会被修改的内容：计数器、格式化器和输出写入器。
//! 测试函数通过 `&mut` 接收它，并通过 `record` 或 `check` 记录断言。

use std::io::{self, Stdout, Write};

use crate::core::config::HarnessConfig;
use crate::core::models::{AssertionResult, RunState};
use crate::error::AssertionFailed;
use crate::reporting::tap::TapFormatter;

/// A single test run writing a TAP stream to `W`.
///
/// Not meant to be shared between threads: the counters and the stream are
/// mutated in place by whoever holds the `&mut`.
pub struct Harness<W: Write = Stdout> {
    pub(crate) state: RunState,
    pub(crate) formatter: TapFormatter,
    pub(crate) out: W,
}

impl Harness<Stdout> {
    /// A harness writing to standard output.
    pub fn stdout(config: HarnessConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl Default for Harness<Stdout> {
    fn default() -> Self {
        Self::stdout(HarnessConfig::default().with_env())
    }
}

impl<W: Write> Harness<W> {
    /// A harness writing to an arbitrary stream, e.g. a `Vec<u8>` in tests.
    pub fn with_writer(config: HarnessConfig, out: W) -> Self {
        Self {
            state: RunState::new(),
            formatter: TapFormatter::new(config),
            out,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn config(&self) -> &HarnessConfig {
        self.formatter.config()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the harness and hands back the output stream.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Records one assertion and returns `passed` unchanged.
    ///
    /// The counters are updated first; then the `ok` line or the `not ok` block is
    /// written unless assertion output is silenced. This never fails: a write error is
    /// logged and dropped.
    ///
    /// 记录一个断言并原样返回 `passed`。先更新计数器，然后写入输出行。此操作永远不会失败。
    ///
    /// # Arguments / 参数
    /// * `file`, `line` - Location of the assertion / 断言所在位置
    /// * `message` - Human-readable description / 可读描述
    /// * `expression_text` - Source text of the checked condition / 被检查条件的源代码文本
    /// * `passed` - Result of the condition / 条件的结果
    pub fn record(
        &mut self,
        file: &str,
        line: u32,
        message: &str,
        expression_text: &str,
        passed: bool,
    ) -> bool {
        let index = self.state.count(passed);
        let result = AssertionResult {
            message,
            expression_text,
            file,
            line,
            passed,
        };

        let Self {
            state,
            formatter,
            out,
        } = self;
        let written =
            formatter.write_assertion(out, index, &result, state.current_test_name());
        log_write_error(written, "assertion");

        passed
    }

    /// Like [`record`](Self::record), but a failure comes back as an `Err` so that a
    /// `Result`-returning test body can stop with `?`.
    pub fn check(
        &mut self,
        file: &str,
        line: u32,
        message: &str,
        expression_text: &str,
        passed: bool,
    ) -> Result<(), AssertionFailed> {
        if self.record(file, line, message, expression_text, passed) {
            Ok(())
        } else {
            Err(AssertionFailed {
                index: self.state.assertion_count(),
                message: message.to_string(),
                file: file.to_string(),
                line,
            })
        }
    }
}

pub(crate) fn log_write_error(written: io::Result<()>, what: &str) {
    if let Err(e) = written {
        tracing::warn!(error = %e, "failed to write {} output", what);
    }
}
