//! # Report Generator / 报告生成器
//!
//! Emits the final plan and count lines of a run and turns the counters into a
//! process exit code. The summary can also be exported as JSON for tooling that
//! prefers not to parse TAP.
//!
//! 输出一次运行的最终计划行和计数行，并将计数转换为进程退出码。
//! 摘要也可以导出为 JSON。

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::harness::{Harness, log_write_error};
use crate::core::models::Summary;
use crate::error::Result;

impl<W: Write> Harness<W> {
    /// Snapshot of the counters so far.
    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    /// Writes the summary (unless silenced), flushes the stream and returns
    /// `0` if no assertion failed, `2` otherwise.
    ///
    /// Calling it twice writes the summary twice; the counters are never reset.
    ///
    /// 写入摘要（除非被静默），刷新输出流，若没有断言失败则返回 `0`，否则返回 `2`。
    pub fn report(&mut self) -> i32 {
        let summary = self.state.summary();

        let written = self.formatter.write_summary(&mut self.out, &summary);
        log_write_error(written, "report");
        log_write_error(self.out.flush(), "report");

        tracing::debug!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run reported"
        );
        summary.exit_code()
    }
}

/// Writes `summary` to `path` as pretty-printed JSON.
pub fn write_summary_json(summary: &Summary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
