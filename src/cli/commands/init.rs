//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a `Tap.toml` holding the
//! output flags of the harness. The interactive wizard asks for each flag; the
//! non-interactive mode writes the build-time defaults.
//!
//! 此模块实现了 `init` 命令，用于写入包含测试框架输出开关的 `Tap.toml`。
//! 交互式向导会逐项询问，非交互模式则写入编译期默认值。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use std::borrow::Cow;
use std::path::Path;

use crate::core::config::TapConfig;
use crate::infra::{fs, t};

/// Languages offered by the wizard, matching the shipped locale files.
const LANGUAGES: [&str; 2] = ["en", "zh-CN"];

/// Executes the init command.
///
/// # Arguments
/// * `path` - Where to write the configuration
/// * `language` - Language of the prompts, and the default language stored in the file
/// * `non_interactive` - Write defaults without prompting
/// * `force` - Replace an existing file
pub fn execute(path: &Path, language: &str, non_interactive: bool, force: bool) -> Result<()> {
    let mut config = TapConfig {
        language: language.to_string(),
        ..TapConfig::default()
    };

    let mut force = force;
    if !non_interactive {
        let theme = ColorfulTheme::default();
        println!("\n{}", t!("init_wizard_welcome").cyan().bold());

        if path.exists() && !force {
            let overwrite = Confirm::with_theme(&theme)
                .with_prompt(t!("init_overwrite_prompt", path = path.display()))
                .default(false)
                .interact()
                .context(t!("init_user_confirmation_failed").to_string())?;
            if !overwrite {
                println!("{}", t!("init_aborted"));
                return Ok(());
            }
            force = true;
        }

        config = run_wizard(&theme, config)?;
    }

    fs::write_config(path, &config, force)?;

    println!("{}", t!("config_written", path = path.display()).green());
    Ok(())
}

/// Asks for the language and each of the three flags, starting from `config`.
fn run_wizard(theme: &ColorfulTheme, config: TapConfig) -> Result<TapConfig> {
    let default_language = LANGUAGES
        .iter()
        .position(|lang| *lang == config.language)
        .unwrap_or(0);
    let language = Select::with_theme(theme)
        .with_prompt(t!("init_prompt_language"))
        .items(&LANGUAGES)
        .default(default_language)
        .interact()
        .context(t!("init_user_confirmation_failed").to_string())?;

    let ask = |prompt: Cow<'_, str>, default: bool| -> Result<bool> {
        Confirm::with_theme(theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context(t!("init_user_confirmation_failed").to_string())
    };

    Ok(TapConfig {
        language: LANGUAGES[language].to_string(),
        disable_color: ask(t!("init_prompt_disable_color"), config.disable_color)?,
        silence_assertions: ask(
            t!("init_prompt_silence_assertions"),
            config.silence_assertions,
        )?,
        silence_report: ask(t!("init_prompt_silence_report"), config.silence_report)?,
    })
}
