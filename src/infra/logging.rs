//! # Logging Setup / 日志初始化
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the TAP stream.
//!
//! 诊断信息通过 `tracing` 输出到 stderr；stdout 只承载 TAP 输出流。

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV_VAR: &str = "TAP_HARNESS_LOG";

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
