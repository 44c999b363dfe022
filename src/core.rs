//! # Core Module / 核心模块
//!
//! This module contains the core of the harness: the test-set registry, the
//! command-line filter, the run state, the execution engine with its
//! containment boundaries, assertion processing and the suite driver.
//!
//! 此模块包含测试框架的核心：测试集注册表、命令行过滤器、运行状态、
//! 带隔离边界的执行引擎、断言处理和套件驱动。

pub mod assertion;
pub mod config;
pub mod execution;
pub mod filter;
pub mod models;
pub mod registry;
pub mod state;
pub mod suite;

// Re-exports
pub use config::SuiteConfig;
pub use execution::run_test_sets;
pub use state::RunSummary;
