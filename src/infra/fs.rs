//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file operations of the CLI: locating, reading and
//! writing `Tap.toml`, and writing the JSON summary.
//!
//! 此模块提供 CLI 的文件操作：定位、读取和写入 `Tap.toml`，以及写入 JSON 摘要。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::TapConfig;
use crate::infra::t;

/// Expands a leading `~` and environment variables in a user-supplied path.
///
/// # Arguments
/// * `path` - Path as typed on the command line
///
/// # Returns
/// The expanded path, or the input unchanged if it references an unknown variable
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            tracing::debug!(error = %e, path = %raw, "path expansion failed, using it verbatim");
            path.to_path_buf()
        }
    }
}

/// Reads and parses a configuration file.
///
/// # Returns
/// `Ok(None)` if the file does not exist, the parsed configuration otherwise
pub fn read_config(path: &Path) -> Result<Option<TapConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| {
        t!("config_read_failed_path", path = path.display()).to_string()
    })?;
    let config = TapConfig::from_toml_str(&content).with_context(|| {
        t!("config_parse_failed", path = path.display()).to_string()
    })?;
    Ok(Some(config))
}

/// Writes a configuration file, refusing to replace an existing one unless `force` is set.
pub fn write_config(path: &Path, config: &TapConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(t!("config_exists", path = path.display()).to_string());
    }

    let content = config
        .to_toml_string()
        .context("Failed to serialize configuration")?;
    fs::write(path, content).with_context(|| {
        t!("config_write_failed", path = path.display()).to_string()
    })?;
    Ok(())
}
