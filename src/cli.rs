//! # Command-Line Interface / 命令行接口
//!
//! Builds the `tap-harness` command with localized help, resolves the harness
//! configuration from `Tap.toml`, the environment and the flags, and dispatches to
//! the subcommands.
//!
//! 构建带有本地化帮助信息的 `tap-harness` 命令，从 `Tap.toml`、环境变量和参数
//! 解析测试框架配置，并分派到各子命令。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::{CONFIG_FILE_NAME, HarnessConfig, TapConfig};
use crate::infra::{fs, t};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("tap-harness")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value(CONFIG_FILE_NAME)
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("demo")
                .about(t!("cmd_demo_about", locale = locale).to_string())
                .arg(
                    Arg::new("no-color")
                        .long("no-color")
                        .help(t!("arg_no_color", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("silence-assertions")
                        .long("silence-assertions")
                        .help(t!("arg_silence_assertions", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("silence-report")
                        .long("silence-report")
                        .help(t!("arg_silence_report", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("include-failing")
                        .long("include-failing")
                        .help(t!("arg_include_failing", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("summary-json")
                        .long("summary-json")
                        .help(t!("arg_summary_json", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help(t!("arg_path", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Resolves the output flags: file (or build defaults), then `NO_COLOR`, then flags.
///
/// 解析输出开关：先取配置文件（或编译期默认值），然后是 `NO_COLOR`，最后是命令行参数。
pub fn resolve_harness_config(file: Option<&TapConfig>, matches: &ArgMatches) -> HarnessConfig {
    let mut config = file
        .map(TapConfig::harness)
        .unwrap_or_else(HarnessConfig::from_build)
        .with_env();

    config.disable_color |= matches.get_flag("no-color");
    config.silence_assertions |= matches.get_flag("silence-assertions");
    config.silence_report |= matches.get_flag("silence-report");

    tracing::debug!(?config, "resolved harness configuration");
    config
}

/// Parses the command line and runs the selected subcommand.
///
/// # Returns
/// The process exit code: the harness exit code for `demo`, `0` for `init`
pub fn run() -> Result<i32> {
    // Pre-parse language and initialize i18n first.
    let explicit_language = pre_parse_language();
    let language = crate::init_locale(explicit_language.as_deref());

    let matches = build_cli(&language).get_matches();
    let Some((command, sub_matches)) = matches.subcommand() else {
        // `subcommand_required` makes clap exit with usage before this point.
        return Ok(0);
    };

    let config_path = sub_matches
        .get_one::<PathBuf>("config")
        .map(|path| fs::expand_path(path))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let file_config = match fs::read_config(&config_path) {
        Ok(config) => config,
        // A broken file must not stop `init` from replacing it.
        Err(e) if command == "init" => {
            tracing::warn!(error = %e, "ignoring unreadable configuration");
            None
        }
        Err(e) => return Err(e),
    };

    // A language from the config file applies unless one was given on the command line.
    let language = match (&explicit_language, &file_config) {
        (None, Some(file)) => crate::init_locale(Some(file.language.as_str())),
        _ => language,
    };

    match command {
        "demo" => {
            if file_config.is_some() {
                eprintln!("{}", t!("config_loaded", path = config_path.display()));
            }
            let config = resolve_harness_config(file_config.as_ref(), sub_matches);
            let include_failing = sub_matches.get_flag("include-failing");
            let summary_json = sub_matches
                .get_one::<PathBuf>("summary-json")
                .map(|path| fs::expand_path(path));

            commands::demo::execute(config, include_failing, summary_json.as_deref())
        }
        "init" => {
            if explicit_language.is_none() && file_config.is_none() {
                println!("{}", t!("system_language_detected", lang = &language));
            }
            let path = sub_matches
                .get_one::<PathBuf>("path")
                .map(|path| fs::expand_path(path))
                .unwrap_or(config_path);

            commands::init::execute(
                &path,
                &language,
                sub_matches.get_flag("non-interactive"),
                sub_matches.get_flag("force"),
            )?;
            Ok(0)
        }
        _ => Ok(0),
    }
}
