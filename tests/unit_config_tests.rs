//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for loading `SuiteConfig` from TOML files.
//!
//! 测试从 TOML 文件加载 `SuiteConfig`。

mod common;

use common::write_config;
use tempfile::TempDir;
use testset::core::config::{SuiteConfig, load_suite_config, parse_suite_config};

#[test]
fn test_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
language = "zh-CN"
color = false
verbose = true
strict_filter = true
log_filter = "testset=debug"
"#,
    );

    let config = load_suite_config(&path).unwrap();
    assert_eq!(config.language.as_deref(), Some("zh-CN"));
    assert_eq!(config.color, Some(false));
    assert!(config.verbose);
    assert!(config.strict_filter);
    assert_eq!(config.log_filter, "testset=debug");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_suite_config("verbose = true").unwrap();
    assert!(config.verbose);
    assert_eq!(config.language, None);
    assert_eq!(config.color, None);
    assert!(!config.strict_filter);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_missing_file_names_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let err = load_suite_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "language = [");
    let err = load_suite_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_config_serializes_back() {
    let config = SuiteConfig {
        language: Some("en".to_string()),
        strict_filter: true,
        ..SuiteConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(parse_suite_config(&text).unwrap(), config);
}
