//! Subcommands of the `tap-harness` binary.

pub mod demo;
pub mod init;
