//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs the registered test sets in name order and every test case
//! inside them. It owns the two containment boundaries of the harness:
//!
//! - the **test case** boundary catches everything a case body raises, reports
//!   it and moves on to the next case;
//! - the **test set** boundary only exists to turn a failure outside any case
//!   into a framework-fatal [`SetAborted`] error for the driver.
//!
//! 此模块按名称顺序运行已注册的测试集及其中的每个测试用例。
//! 测试用例边界捕获用例体抛出的所有失败并继续运行下一个用例；
//! 测试集边界将用例之外的失败转换为框架级致命错误。

use std::panic::{self, AssertUnwindSafe};

use anyhow::Result;

use crate::core::{
    assertion::Checks,
    filter::RequestedCases,
    models::{AssertionOutcome, Caught, Location, SetAborted},
    registry::Registry,
    state::{RunState, RunSummary},
};
use crate::reporting::RunObserver;

/// What a test body may return: nothing, or an `anyhow::Result` whose error
/// is the body's failure.
///
/// 测试体可以返回的类型：空值，或以错误表示失败的 `anyhow::Result`。
pub trait CaseResult {
    fn into_result(self) -> Result<()>;
}

impl CaseResult for () {
    fn into_result(self) -> Result<()> {
        Ok(())
    }
}

impl CaseResult for Result<()> {
    fn into_result(self) -> Result<()> {
        self
    }
}

/// The state of one run plus the observer that receives its notifications.
///
/// 一次运行的状态以及接收其通知的观察者。
pub struct RunContext {
    state: RunState,
    observer: Box<dyn RunObserver>,
}

impl RunContext {
    pub fn new(observer: Box<dyn RunObserver>) -> Self {
        Self {
            state: RunState::new(),
            observer,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn start_set(&mut self, name: &str) {
        tracing::debug!(set = name, "starting test set");
        self.state.start_set(name);
        self.observer.on_start_set(name);
    }

    pub fn end_set(&mut self) {
        if let Some(name) = self.state.current_set().map(str::to_owned) {
            self.observer.on_end_set(&name);
        }
        self.state.end_set();
    }

    pub fn start_case(&mut self, name: &str) {
        self.state.start_case(name);
        let set = self.state.current_set().unwrap_or_default().to_owned();
        self.observer.on_start_case(&set, name);
    }

    pub fn end_case(&mut self) {
        let set = self.state.current_set().unwrap_or_default().to_owned();
        if let Some(name) = self.state.current_case().map(str::to_owned) {
            self.observer.on_end_case(&set, &name);
        }
        self.state.end_case();
    }

    /// Records the outcome of one checked expression. Never fails.
    pub fn process_assert_result(&mut self, location: Location, expression: &str, passed: bool) {
        self.record_assertion(AssertionOutcome {
            location,
            expression: expression.to_string(),
            passed,
            caught: None,
        });
    }

    pub fn record_assertion(&mut self, outcome: AssertionOutcome) {
        self.state.record_assertion(outcome.passed);
        self.observer.on_assertion(&outcome);
    }

    /// Records a failure contained at the test case boundary.
    pub fn process_test_exception(&mut self, location: Location, caught: &Caught) {
        tracing::debug!(%location, "Unhandled Exception: {caught}");
        self.state.record_exception();
        self.observer.on_exception(location, caught);
    }

    /// Leaves the current set and case without the end notifications.
    pub(crate) fn abort(&mut self) {
        self.state.end_case();
        self.state.end_set();
    }

    pub(crate) fn report_fatal(&mut self, caught: &Caught) {
        self.observer.on_fatal(caught);
    }

    pub(crate) fn report_unmatched(&mut self, names: &[String]) {
        self.observer.on_unmatched_sets(names);
    }

    pub fn finalize(&mut self, successful: bool) {
        self.state.finalize(successful);
    }

    /// Emits the summary and returns it.
    pub fn write_summary(&mut self, duration: std::time::Duration) -> RunSummary {
        let summary = self.state.summary(duration);
        self.observer.on_summary(&summary);
        summary
    }
}

/// The handle a test set runner receives. Each call to [`TestSet::case`] runs
/// one isolated test case.
///
/// 测试集运行函数收到的句柄。每次调用 [`TestSet::case`] 运行一个隔离的测试用例。
pub struct TestSet<'a> {
    ctx: &'a mut RunContext,
}

impl<'a> TestSet<'a> {
    pub(crate) fn new(ctx: &'a mut RunContext) -> Self {
        Self { ctx }
    }

    /// The name of the set being run.
    pub fn name(&self) -> &str {
        self.ctx.state().current_set().unwrap_or_default()
    }

    /// Runs one test case.
    ///
    /// Whatever the body raises, a returned error or a panic, is reported as
    /// an unhandled exception at the location of this call and counted as a
    /// failed assertion. The next case runs regardless, and the end-of-case
    /// notification is always emitted.
    #[track_caller]
    pub fn case<R, F>(&mut self, name: &str, body: F)
    where
        R: CaseResult,
        F: FnOnce(&mut Checks<'_>) -> R,
    {
        let location = Location::caller();
        self.ctx.start_case(name);

        let result = {
            let mut checks = Checks::new(self.ctx);
            panic::catch_unwind(AssertUnwindSafe(|| body(&mut checks).into_result()))
        };

        let caught = match result {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(Caught::from_error(&err)),
            Err(payload) => Some(Caught::from_panic(payload.as_ref())),
        };
        if let Some(caught) = caught {
            self.ctx.process_test_exception(location, &caught);
        }

        self.ctx.end_case();
    }
}

/// Runs every registered set selected by `requested`, in name order.
///
/// A set whose runner fails outside of any test case aborts the run: the
/// error is returned as [`SetAborted`] and the remaining sets are skipped.
///
/// 按名称顺序运行 `requested` 选中的每个已注册测试集。
pub fn run_test_sets(
    registry: &Registry,
    requested: &RequestedCases,
    ctx: &mut RunContext,
) -> Result<()> {
    for (name, runner) in registry.iter() {
        if !requested.selects(name) {
            tracing::debug!(set = name, "skipped by filter");
            continue;
        }

        ctx.start_set(name);
        let result = panic::catch_unwind(AssertUnwindSafe(|| runner(&mut TestSet::new(ctx))));

        let caught = match result {
            Ok(Ok(())) => {
                ctx.end_set();
                continue;
            }
            Ok(Err(err)) => Caught::from_error(&err),
            Err(payload) => Caught::from_panic(payload.as_ref()),
        };

        ctx.abort();
        return Err(SetAborted {
            set: name.to_string(),
            caught,
        }
        .into());
    }
    Ok(())
}
