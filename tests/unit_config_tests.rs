//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module and the config file
//! helpers, testing `HarnessConfig` resolution and `TapConfig` (de)serialization.
//!
//! 此模块包含 `config.rs` 模块及配置文件辅助函数的单元测试，
//! 测试 `HarnessConfig` 的解析以及 `TapConfig` 的序列化/反序列化。

mod common;

use common::{create_invalid_toml, harness_with, output_of, write_tap_toml};
use std::ffi::OsString;
use tap_harness::infra::fs::{read_config, write_config};
use tap_harness::{Harness, HarnessConfig, TapConfig};
use tempfile::tempdir;

#[cfg(test)]
mod harness_config_tests {
    use super::*;

    /// A harness built from the build defaults, after one passing and one failing assertion
    /// and a report.
    fn build_default_output() -> (String, i32) {
        let mut h = harness_with(HarnessConfig::from_build());
        h.execute("test_build", |h: &mut Harness<Vec<u8>>| {
            h.record("f.rs", 1, "passes", "true", true);
            h.record("f.rs", 2, "fails", "false", false);
        });
        let code = h.report();
        (output_of(&h), code)
    }

    #[cfg(not(any(
        feature = "disable-color",
        feature = "silence-assertions",
        feature = "silence-report"
    )))]
    #[test]
    fn test_default_build_enables_everything() {
        assert_eq!(HarnessConfig::from_build(), HarnessConfig::verbose());
        assert_eq!(HarnessConfig::default(), HarnessConfig::verbose());

        let (out, code) = build_default_output();
        assert_eq!(code, 2);
        assert!(out.contains("\x1b[1;32mok\x1b[0m 1 - passes"));
        assert!(out.ends_with("1..2\n# tests 2\n# pass  1\n# fail  1\n"));
    }

    #[cfg(feature = "disable-color")]
    #[test]
    fn test_disable_color_build() {
        let (out, code) = build_default_output();
        assert_eq!(code, 2);
        assert!(!out.contains('\x1b'));
    }

    #[cfg(feature = "silence-assertions")]
    #[test]
    fn test_silence_assertions_build() {
        let (out, code) = build_default_output();
        assert_eq!(code, 2);
        assert!(out.starts_with("# test_build\n"));
        assert!(!out.contains("ok "));
        assert!(!out.contains("On f.rs"));
    }

    #[cfg(feature = "silence-report")]
    #[test]
    fn test_silence_report_build() {
        let (out, code) = build_default_output();
        assert_eq!(code, 2);
        assert!(!out.contains("1.."));
        assert!(!out.contains("# tests"));
    }

    #[test]
    fn test_plain_and_verbose() {
        assert!(HarnessConfig::verbose().use_color());
        assert!(!HarnessConfig::plain().use_color());
        assert!(!HarnessConfig::plain().silence_assertions);
        assert!(!HarnessConfig::plain().silence_report);
    }

    #[test]
    fn test_no_color_variable() {
        let base = HarnessConfig::verbose();
        assert!(!base.with_no_color(Some(OsString::from("1"))).use_color());
        assert!(base.with_no_color(Some(OsString::new())).use_color());
        assert!(base.with_no_color(None).use_color());
    }

    #[test]
    fn test_no_color_never_enables_color() {
        let base = HarnessConfig::plain();
        assert!(!base.with_no_color(None).use_color());
    }
}

#[cfg(test)]
mod tap_config_tests {
    use super::*;

    #[test]
    fn test_deserialization_full() {
        let toml_str = r#"
            language = "zh-CN"
            disable-color = true
            silence-assertions = true
            silence-report = false
        "#;

        let config = TapConfig::from_toml_str(toml_str).unwrap();

        assert_eq!(config.language, "zh-CN");
        assert_eq!(
            config.harness(),
            HarnessConfig {
                disable_color: true,
                silence_assertions: true,
                silence_report: false,
            }
        );
    }

    #[test]
    fn test_deserialization_empty_uses_defaults() {
        let config = TapConfig::from_toml_str("").unwrap();
        assert_eq!(config, TapConfig::default());
        assert_eq!(config.language, "en");
        assert_eq!(config.harness(), HarnessConfig::from_build());
    }

    #[test]
    fn test_deserialization_partial() {
        let config = TapConfig::from_toml_str("silence-report = true").unwrap();
        assert!(config.silence_report);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_deserialization_wrong_type() {
        let result = TapConfig::from_toml_str("disable-color = \"yes\"");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_serialization_uses_kebab_case() {
        let config = TapConfig {
            language: "en".to_string(),
            disable_color: true,
            silence_assertions: false,
            silence_report: true,
        };

        let toml_str = config.to_toml_string().unwrap();

        assert!(toml_str.contains("language = \"en\""));
        assert!(toml_str.contains("disable-color = true"));
        assert!(toml_str.contains("silence-assertions = false"));
        assert!(toml_str.contains("silence-report = true"));
        assert_eq!(TapConfig::from_toml_str(&toml_str).unwrap(), config);
    }
}

#[cfg(test)]
mod config_file_tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_config(&dir.path().join("Tap.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_existing_file() {
        let dir = tempdir().unwrap();
        let path = write_tap_toml(&dir, "disable-color = true\n");
        let config = read_config(&path).unwrap().unwrap();
        assert!(config.disable_color);
    }

    #[test]
    fn test_read_invalid_file() {
        let dir = tempdir().unwrap();
        let path = create_invalid_toml(&dir);
        let err = read_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid.toml"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Tap.toml");
        let config = TapConfig {
            silence_assertions: true,
            ..TapConfig::default()
        };

        write_config(&path, &config, false).unwrap();

        assert_eq!(read_config(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_write_refuses_existing_without_force() {
        let dir = tempdir().unwrap();
        let path = write_tap_toml(&dir, "language = \"en\"\n");

        assert!(write_config(&path, &TapConfig::default(), false).is_err());
        assert!(write_config(&path, &TapConfig::default(), true).is_ok());
    }
}
