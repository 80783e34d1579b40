//! # Reporting Module / 报告模块
//!
//! This module turns harness events into output: the TAP protocol lines written
//! while tests run, and the final summary with its exit code.
//!
//! 此模块将测试框架事件转换为输出：测试运行期间写入的 TAP 协议行，
//! 以及最终摘要及其退出码。

pub mod summary;
pub mod tap;

// Re-export common reporting items
pub use summary::write_summary_json;
pub use tap::TapFormatter;
