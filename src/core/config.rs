//! # Configuration Module / 配置模块
//!
//! The three output flags of the harness and the `Tap.toml` file they can be loaded from.
//! Cargo features provide the build-time defaults, the file and the environment
//! refine them, and the CLI has the last word.
//!
//! 测试框架的三个输出开关，以及可加载它们的 `Tap.toml` 文件。
//! Cargo features 提供编译期默认值，配置文件和环境变量对其进行调整，CLI 拥有最终决定权。

use serde::{Deserialize, Serialize};
use std::ffi::OsString;

use crate::error::Result;

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "Tap.toml";

/// Output flags handed to the protocol formatter.
/// Fixed for the lifetime of a harness once constructed.
///
/// 传给协议格式化器的输出开关。构造后在测试框架的生命周期内保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Emit markers without ANSI escape sequences / 输出不带 ANSI 转义序列的标记
    pub disable_color: bool,
    /// Suppress per-assertion lines; counters still update / 不输出单个断言行，计数仍更新
    pub silence_assertions: bool,
    /// Suppress the final summary; the exit code is unaffected / 不输出最终摘要，退出码不受影响
    pub silence_report: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

impl HarnessConfig {
    /// Flags as selected by the `disable-color`, `silence-assertions` and
    /// `silence-report` Cargo features.
    pub const fn from_build() -> Self {
        Self {
            disable_color: cfg!(feature = "disable-color"),
            silence_assertions: cfg!(feature = "silence-assertions"),
            silence_report: cfg!(feature = "silence-report"),
        }
    }

    /// Everything on: colored markers, every assertion line, the summary.
    pub const fn verbose() -> Self {
        Self {
            disable_color: false,
            silence_assertions: false,
            silence_report: false,
        }
    }

    /// Verbose output without escape sequences, for piping into TAP consumers.
    pub const fn plain() -> Self {
        Self {
            disable_color: true,
            ..Self::verbose()
        }
    }

    /// Applies the `NO_COLOR` environment variable.
    pub fn with_env(self) -> Self {
        self.with_no_color(std::env::var_os("NO_COLOR"))
    }

    /// Any non-empty `NO_COLOR` value disables color; an empty or absent one changes nothing.
    pub fn with_no_color(mut self, value: Option<OsString>) -> Self {
        if value.is_some_and(|v| !v.is_empty()) {
            self.disable_color = true;
        }
        self
    }

    pub fn use_color(&self) -> bool {
        !self.disable_color
    }
}

/// Contents of a `Tap.toml` file.
/// Missing keys fall back to the build-time defaults.
///
/// `Tap.toml` 文件的内容。缺失的键回退到编译期默认值。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TapConfig {
    /// The language for the CLI messages (e.g., "en", "zh-CN").
    /// Protocol lines are never translated.
    ///
    /// CLI 消息使用的语言（例如 "en", "zh-CN"）。协议行永远不会被翻译。
    pub language: String,
    pub disable_color: bool,
    pub silence_assertions: bool,
    pub silence_report: bool,
}

impl Default for TapConfig {
    fn default() -> Self {
        let build = HarnessConfig::from_build();
        Self {
            language: default_language(),
            disable_color: build.disable_color,
            silence_assertions: build.silence_assertions,
            silence_report: build.silence_report,
        }
    }
}

impl TapConfig {
    /// Parses the TOML text of a configuration file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TapConfig = toml::from_str(content)?;
        tracing::debug!(?config, "parsed harness configuration");
        Ok(config)
    }

    /// Renders the configuration as TOML, as written by `init`.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The output flags this file selects.
    pub fn harness(&self) -> HarnessConfig {
        HarnessConfig {
            disable_color: self.disable_color,
            silence_assertions: self.silence_assertions,
            silence_report: self.silence_report,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}
