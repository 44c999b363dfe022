//! # Suite Configuration Module / 套件配置模块
//!
//! Loads the optional `TestSuite.toml` (or the file named by `TESTSET_CONFIG`)
//! that sets the report language, colour, verbosity, strict filtering and the
//! debug log filter.
//!
//! 加载可选的 `TestSuite.toml`（或 `TESTSET_CONFIG` 指定的文件），
//! 用于设置报告语言、颜色、详细输出、严格过滤和调试日志过滤器。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "TESTSET_CONFIG";
/// The configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "TestSuite.toml";

/// Settings of a test suite run, loaded from a TOML file.
/// Every field is optional in the file.
///
/// 测试套件运行的设置，从 TOML 文件加载。文件中的每个字段都是可选的。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// The language for the report (e.g., "en", "zh-CN").
    /// If not specified, the system locale is used, falling back to "en".
    ///
    /// 报告的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则使用系统区域设置，回退到 "en"。
    #[serde(default)]
    pub language: Option<String>,

    /// Forces coloured output on or off. Unset leaves the decision to `colored`.
    /// 强制开启或关闭彩色输出。
    #[serde(default)]
    pub color: Option<bool>,

    /// If `true`, a line is printed when each test case starts.
    /// 如果为 `true`，每个测试用例开始时都会打印一行。
    #[serde(default)]
    pub verbose: bool,

    /// If `true`, a requested test-set name that matches no registered set
    /// aborts the run instead of silently selecting nothing.
    ///
    /// 如果为 `true`，请求的测试集名称若不匹配任何已注册的测试集，则中止运行。
    #[serde(default)]
    pub strict_filter: bool,

    /// The `tracing` filter used when `RUST_LOG` is not set.
    /// 未设置 `RUST_LOG` 时使用的 `tracing` 过滤器。
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            language: None,
            color: None,
            verbose: false,
            strict_filter: false,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl SuiteConfig {
    /// Finds and loads the configuration for this process.
    ///
    /// The file named by `TESTSET_CONFIG` must exist. Otherwise
    /// `TestSuite.toml` in the working directory is used if present, and the
    /// defaults if not.
    pub fn discover() -> Result<Self> {
        match config_path_from_env() {
            Some(path) => load_suite_config(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    load_suite_config(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Reads and parses a suite configuration file.
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_suite_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_suite_config(content: &str) -> Result<SuiteConfig> {
    Ok(toml::from_str(content)?)
}
