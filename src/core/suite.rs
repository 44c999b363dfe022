//! # Test Suite Driver Module / 测试套件驱动模块
//!
//! Runs a whole suite: checks the filter, runs the selected sets, contains
//! framework-fatal errors, and always finishes with a summary and an exit
//! code.
//!
//! 运行整个测试套件：检查过滤器、运行选中的测试集、处理框架级致命错误，
//! 并始终以摘要和退出码结束。

use std::fmt;
use std::time::Instant;

use anyhow::{Result, bail};

use crate::core::{
    config::SuiteConfig,
    execution::{RunContext, run_test_sets},
    filter::RequestedCases,
    models::{Caught, SetAborted},
    registry::Registry,
    state::RunSummary,
};
use crate::infra::debugger::{DebuggerHook, NoDebugger};
use crate::reporting::RunObserver;

/// Requested names that match no registered set, under strict filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedSets {
    pub names: Vec<String>,
}

impl fmt::Display for UnmatchedSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no registered test set matches: {}", self.names.join(", "))
    }
}

impl std::error::Error for UnmatchedSets {}

/// A registry together with the settings and collaborators needed to run it.
///
/// 注册表以及运行它所需的设置和协作者。
pub struct TestSuite {
    registry: Registry,
    config: SuiteConfig,
    debugger: Box<dyn DebuggerHook>,
}

impl TestSuite {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            config: SuiteConfig::default(),
            debugger: Box::new(NoDebugger),
        }
    }

    pub fn with_config(mut self, config: SuiteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_debugger(mut self, debugger: impl DebuggerHook + 'static) -> Self {
        self.debugger = Box::new(debugger);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Runs the sets selected by `requested` and reports to `observer`.
    ///
    /// Each call starts from fresh counters, so the same suite can be run
    /// repeatedly in one process.
    pub fn run(&self, requested: &RequestedCases, observer: Box<dyn RunObserver>) -> RunSummary {
        let started = Instant::now();
        let mut ctx = RunContext::new(observer);

        match self.execute(requested, &mut ctx) {
            Ok(()) => ctx.finalize(true),
            Err(err) => {
                tracing::error!("{err:#}");
                if self.debugger.is_debugger_attached() {
                    self.debugger.break_into_debugger();
                }
                if let Some(unmatched) = err.downcast_ref::<UnmatchedSets>() {
                    ctx.report_unmatched(&unmatched.names);
                } else {
                    let caught = match err.downcast_ref::<SetAborted>() {
                        Some(aborted) => aborted.caught.clone(),
                        None => Caught::from_error(&err),
                    };
                    ctx.report_fatal(&caught);
                }
                ctx.finalize(false);
            }
        }

        ctx.write_summary(started.elapsed())
    }

    fn execute(&self, requested: &RequestedCases, ctx: &mut RunContext) -> Result<()> {
        if self.config.strict_filter {
            let unmatched = requested.unmatched(&self.registry);
            if !unmatched.is_empty() {
                bail!(UnmatchedSets {
                    names: unmatched.into_iter().map(str::to_owned).collect(),
                });
            }
        }
        run_test_sets(&self.registry, requested, ctx)
    }
}
