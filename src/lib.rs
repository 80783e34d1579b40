//! # TAP Harness Library / TAP 测试框架库
//!
//! A minimal in-process test harness: register named test functions, run them,
//! record each assertion, and finish with a TAP summary and a process exit code.
//!
//! 一个极简的进程内测试框架：注册具名测试函数并运行，记录每个断言，
//! 最后输出 TAP 摘要并给出进程退出码。
//!
//! ```no_run
//! use tap_harness::{Harness, tap_assert, tap_assert_eq, tap_run};
//!
//! fn test_sheep(h: &mut Harness) {
//!     tap_assert!(h, "Sheep are cool", true);
//!     tap_assert_eq!(h, 4, 2 + 2);
//! }
//!
//! fn main() {
//!     let mut h = Harness::default();
//!     tap_run!(h, test_sheep);
//!     std::process::exit(h.report());
//! }
//! ```
//!
//! ## Modules / 模块
//!
//! - `core` - Run state, configuration, assertion recording and test execution
//! - `reporting` - TAP line formatting and the final summary
//! - `infra` - File system, logging and i18n services for the CLI
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 运行状态、配置、断言记录和测试执行
//! - `reporting` - TAP 行格式化和最终摘要
//! - `infra` - 为 CLI 提供的文件系统、日志和国际化服务
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod error;
pub mod infra;
mod macros;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config::{HarnessConfig, TapConfig};
pub use crate::core::execution::{TestOutcome, TestSuite};
pub use crate::core::harness::Harness;
pub use crate::core::models::{FAILURE_EXIT_CODE, RunState, Summary};
pub use crate::error::{AssertionFailed, HarnessError};

/// Selects the language of the CLI messages.
///
/// An explicit `preferred` language wins; otherwise the system locale is used. Either
/// is matched in full first (e.g., "zh-CN"), then by its language code (e.g., "en"
/// from "en-US"), falling back to "en".
///
/// 选择 CLI 消息的语言。显式指定的语言优先，否则使用系统区域设置。
pub fn init_locale(preferred: Option<&str>) -> String {
    let locale = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
