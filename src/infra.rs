//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the harness:
//! debug-channel logging, panic payload handling, the debugger hook and
//! i18n support.
//!
//! 此模块为测试框架提供基础设施服务：
//! 调试日志、panic 负载处理、调试器钩子和国际化支持。

pub mod debugger;
pub mod logging;
pub mod panic;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
