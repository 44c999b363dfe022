//! # CLI Module / 命令行模块
//!
//! The process entry point of a test binary: configuration, logging, report
//! language, command line, run, exit code.
//!
//! 测试二进制文件的进程入口：配置、日志、报告语言、命令行、运行和退出码。

use anyhow::{Context, Result};
use colored::*;
use std::{env, ffi::OsString, process::ExitCode};

use crate::{
    core::{
        config::SuiteConfig,
        filter::parse_cmd_line,
        registry::Registry,
        state::{EXIT_FATAL, RunSummary},
        suite::TestSuite,
    },
    infra::{logging, panic},
    reporting::ConsoleReporter,
    t,
};

/// The process entry point of a test binary: runs every discovered test set
/// selected by the command line and turns the result into the exit code.
///
/// ```no_run
/// fn main() -> std::process::ExitCode {
///     testset::cli::main()
/// }
/// ```
pub fn main() -> ExitCode {
    exit_code(run(Registry::discover(), env::args_os()))
}

/// Like [`main`], for a registry built explicitly at startup.
pub fn main_with(registry: Registry) -> ExitCode {
    exit_code(run(registry, env::args_os()))
}

fn exit_code(result: Result<RunSummary>) -> ExitCode {
    match result {
        Ok(summary) => ExitCode::from(summary.exit_code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Loads the configuration, sets up logging and the report language, parses
/// `args` (program name first) and runs the suite.
///
/// Errors are framework-fatal: the configuration or the command line could
/// not be used, and no test ran. No summary block is printed in that case;
/// the error goes to stderr and the process exits with `EXIT_FATAL`.
pub fn run<I, T>(registry: Registry, args: I) -> Result<RunSummary>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // The configuration decides the language, so use the system one until
    // it is loaded.
    let system_locale = crate::resolve_locale(None);
    let config = SuiteConfig::discover()
        .with_context(|| t!("cli.config_failed", locale = &system_locale).to_string())?;

    logging::init_tracing(&config.log_filter);
    panic::install_quiet_hook();
    if let Some(color) = config.color {
        colored::control::set_override(color);
    }
    let locale = crate::init(config.language.as_deref());

    let requested = parse_cmd_line(args)
        .with_context(|| t!("cli.parse_failed", locale = &locale).to_string())?;
    tracing::debug!(requested = ?requested, sets = registry.len(), "starting test run");

    let reporter = ConsoleReporter::stdout(&locale).verbose(config.verbose);
    let suite = TestSuite::new(registry).with_config(config);
    Ok(suite.run(&requested, Box::new(reporter)))
}
