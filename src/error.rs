//! # Error Types / 错误类型
//!
//! Errors raised outside the assertion path: configuration loading and summary export.
//! A failed assertion is not an error of the harness; it is recorded as data.
//! `AssertionFailed` only exists so that `Result`-returning test bodies can short-circuit with `?`.
//!
//! 断言路径之外的错误：配置加载和摘要导出。
//! 断言失败不是测试框架本身的错误，而是被记录为数据。

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Harness errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The summary could not be serialized.
    #[error("summary serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The `Err` side of [`Harness::check`](crate::Harness::check).
///
/// Carries enough to identify the failing assertion in logs; the protocol line
/// itself has already been written by the time this value exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("assertion {index} failed: {message} ({file}:{line})")]
pub struct AssertionFailed {
    /// 1-based index of the assertion within the run.
    pub index: usize,
    pub message: String,
    pub file: String,
    pub line: u32,
}
