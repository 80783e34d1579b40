//! # TAP Protocol Formatter / TAP 协议格式化器
//!
//! Produces the exact lines of the output stream. The shapes are fixed:
//!
//! ```text
//! # test_add
//! ok 1 - 2 + 2 = 4
//! not ok 2 - add(3, 3)
//!   On src/demo.rs:12, in test test_add()
//!     (7) == (add(3, 3))
//! 1..2
//! # tests 2
//! # pass  1
//! # fail  1
//! ```
//!
//! Markers are wrapped in bold green / bold red escape sequences unless color is disabled.
//!
//! 生成输出流的精确文本行。除非禁用颜色，否则标记会以粗体绿色/粗体红色转义序列包裹。

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::core::config::HarnessConfig;
use crate::core::models::{AssertionResult, Summary, UNKNOWN_TEST_NAME};

const PASS_MARKER: &str = "ok";
const FAIL_MARKER: &str = "not ok";

/// Serializes access to `colored`'s process-wide override.
static COLOR_OVERRIDE: Mutex<()> = Mutex::new(());

/// Writes protocol lines according to a [`HarnessConfig`].
#[derive(Debug, Clone)]
pub struct TapFormatter {
    config: HarnessConfig,
    pass_marker: String,
    fail_marker: String,
}

impl TapFormatter {
    pub fn new(config: HarnessConfig) -> Self {
        let (pass_marker, fail_marker) = if config.use_color() {
            colored_markers()
        } else {
            (PASS_MARKER.to_string(), FAIL_MARKER.to_string())
        };
        Self {
            config,
            pass_marker,
            fail_marker,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The `ok` marker, colored when enabled.
    pub fn pass_marker(&self) -> &str {
        &self.pass_marker
    }

    /// The `not ok` marker, colored when enabled.
    pub fn fail_marker(&self) -> &str {
        &self.fail_marker
    }

    /// `# <name>`. Written regardless of the silence flags.
    pub fn write_suite_start<W: Write>(&self, out: &mut W, name: &str) -> io::Result<()> {
        writeln!(out, "# {}", name)
    }

    /// Writes the line (or the failure block) for one assertion.
    ///
    /// `test_name` is the test the assertion is attributed to; `None` prints a placeholder.
    /// Nothing is written when assertion output is silenced.
    ///
    /// 写入单个断言的输出行（或失败块）。断言输出被静默时不写入任何内容。
    pub fn write_assertion<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        result: &AssertionResult<'_>,
        test_name: Option<&str>,
    ) -> io::Result<()> {
        if self.config.silence_assertions {
            return Ok(());
        }

        if result.passed {
            return writeln!(out, "{} {} - {}", self.pass_marker(), index, result.message);
        }

        writeln!(out, "{} {} - {}", self.fail_marker(), index, result.message)?;
        writeln!(
            out,
            "  On {}:{}, in test {}()",
            result.file,
            result.line,
            test_name.unwrap_or(UNKNOWN_TEST_NAME)
        )?;
        writeln!(out, "    {}", result.expression_text)
    }

    /// Writes the plan line and the three count lines, unless the report is silenced.
    pub fn write_summary<W: Write>(&self, out: &mut W, summary: &Summary) -> io::Result<()> {
        if self.config.silence_report {
            return Ok(());
        }

        writeln!(out, "1..{}", summary.total)?;
        writeln!(out, "# tests {}", summary.total)?;
        writeln!(out, "# pass  {}", summary.passed)?;
        writeln!(out, "# fail  {}", summary.failed)
    }
}

/// Renders both markers in bold color whether or not the stream is a terminal.
///
/// The override in `colored` is process-wide, so it is only forced while the markers
/// are rendered and put back afterwards. Other `colored` output keeps its own detection.
fn colored_markers() -> (String, String) {
    let _guard = COLOR_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = colored::control::SHOULD_COLORIZE.should_colorize();

    colored::control::set_override(true);
    let markers = (
        PASS_MARKER.green().bold().to_string(),
        FAIL_MARKER.red().bold().to_string(),
    );
    colored::control::set_override(previous);

    markers
}
