//! # Testset Library / Testset 库
//!
//! A small unit test harness. Test code declares named **test sets** made of
//! **test cases**; the sets register themselves before `main`, the command
//! line selects which ones run, every case runs behind its own containment
//! boundary, and the run ends with a summary and an exit code for CI.
//!
//! 一个小型单元测试框架。测试代码声明由**测试用例**组成的命名**测试集**；
//! 测试集在 `main` 之前自行注册，命令行选择要运行的测试集，
//! 每个用例都在独立的隔离边界内运行，运行结束时输出摘要和供 CI 使用的退出码。
//!
//! ```no_run
//! use testset::{test_err, test_set, test_true};
//!
//! test_set!(Math, |set| {
//!     set.case("addition", |t| {
//!         test_true!(t, 2 + 2 == 4);
//!     });
//!     set.case("parsing", |t| {
//!         test_err!(t, "forty-two".parse::<u32>());
//!     });
//! });
//!
//! fn main() -> std::process::ExitCode {
//!     testset::cli::main()
//! }
//! ```
//!
//! ## Modules / 模块
//!
//! - `core` - Registry, filter, run state, execution engine and suite driver
//! - `infra` - Logging, panic handling, debugger hook and i18n
//! - `reporting` - Lifecycle notifications and console output
//! - `cli` - Process entry point
//!
//! - `core` - 注册表、过滤器、运行状态、执行引擎和套件驱动
//! - `infra` - 日志、panic 处理、调试器钩子和国际化
//! - `reporting` - 生命周期通知和控制台输出
//! - `cli` - 进程入口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

mod macros;

pub use crate::infra::t;

// Re-export commonly used items
pub use crate::core::assertion::Checks;
pub use crate::core::execution::{CaseResult, TestSet};
pub use crate::core::filter::RequestedCases;
pub use crate::core::models::{Exception, Location};
pub use crate::core::registry::{Registry, TestSetEntry, register_test_set};
pub use crate::core::suite::TestSuite;

#[doc(hidden)]
pub mod __private {
    pub use anyhow;
    pub use inventory;
}

/// Picks the report language.
///
/// It tries `requested` (or the system locale when `None`), then just its
/// language part (e.g., "en" from "en-US"), and finally falls back to "en".
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_owned)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
            .to_string()
    }
}

/// Resolves the report language and makes it the process default.
pub fn init(requested: Option<&str>) -> String {
    let lang = resolve_locale(requested);
    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
