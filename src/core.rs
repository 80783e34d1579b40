//! # Core Module / 核心模块
//!
//! This module contains the core of the harness: the run state, the output
//! configuration, assertion recording and test execution.
//!
//! 此模块包含测试框架的核心：运行状态、输出配置、断言记录和测试执行。

pub mod config;
pub mod execution;
pub mod harness;
pub mod models;

// Re-exports
pub use config::HarnessConfig;
pub use execution::{TestOutcome, TestSuite};
pub use harness::Harness;
pub use models::{RunState, Summary};
