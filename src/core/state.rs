//! # Run State Module / 运行状态模块
//!
//! The counters and "currently active" markers of one test run, and the
//! mapping from the final tallies to a process exit code.
//!
//! Execution is strictly sequential: at most one test set and one test case
//! are active at a time, and a case is only active inside a set.
//!
//! 一次测试运行的计数器和“当前活动”标记，以及从最终统计到进程退出码的映射。
//! 执行严格按顺序进行：同一时间最多只有一个活动测试集和一个活动测试用例。

use std::time::Duration;

/// Every assertion passed, no exception was caught and the run completed.
pub const EXIT_SUCCESS: u8 = 0;
/// The run completed but some assertion failed or some exception was caught.
pub const EXIT_TEST_FAILURES: u8 = 1;
/// The harness itself failed: a set could not execute, the command line or the
/// configuration was rejected, or a strict filter matched nothing.
pub const EXIT_FATAL: u8 = 2;

/// Aggregate counters of a run.
/// 一次运行的汇总计数器。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub sets_run: usize,
    pub cases_started: usize,
    pub cases_failed: usize,
    pub assertions_passed: usize,
    pub assertions_failed: usize,
    pub exceptions_caught: usize,
}

/// Mutable state of a run. Created fresh for every run, so a suite can be run
/// several times in one process.
///
/// 运行的可变状态。每次运行都会重新创建。
#[derive(Debug, Default)]
pub struct RunState {
    current_set: Option<String>,
    current_case: Option<String>,
    counts: Counts,
    /// `assertions_failed` when the current case started.
    case_failures_at_start: usize,
    final_status: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_set(&self) -> Option<&str> {
        self.current_set.as_deref()
    }

    pub fn current_case(&self) -> Option<&str> {
        self.current_case.as_deref()
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn final_status(&self) -> bool {
        self.final_status
    }

    pub fn start_set(&mut self, name: &str) {
        debug_assert!(self.current_set.is_none(), "test sets cannot nest");
        self.current_set = Some(name.to_string());
        self.counts.sets_run += 1;
    }

    pub fn end_set(&mut self) {
        self.current_case = None;
        self.current_set = None;
    }

    pub fn start_case(&mut self, name: &str) {
        debug_assert!(self.current_set.is_some(), "a test case must run inside a test set");
        debug_assert!(self.current_case.is_none(), "test cases cannot nest");
        self.current_case = Some(name.to_string());
        self.counts.cases_started += 1;
        self.case_failures_at_start = self.counts.assertions_failed;
    }

    /// Ends the active case, if any. A case fails when its failed-assertion
    /// count grew while it ran.
    pub fn end_case(&mut self) {
        if self.current_case.take().is_some()
            && self.counts.assertions_failed > self.case_failures_at_start
        {
            self.counts.cases_failed += 1;
        }
    }

    pub fn record_assertion(&mut self, passed: bool) {
        if passed {
            self.counts.assertions_passed += 1;
        } else {
            self.counts.assertions_failed += 1;
        }
    }

    /// An exception caught at the case boundary counts as one failed
    /// assertion as well.
    pub fn record_exception(&mut self) {
        self.counts.exceptions_caught += 1;
        self.counts.assertions_failed += 1;
    }

    /// Records whether the run completed without a framework-fatal error.
    pub fn finalize(&mut self, successful: bool) {
        self.final_status = successful;
    }

    /// Maps the run to a process exit code.
    ///
    /// `EXIT_SUCCESS` only if the run completed and nothing failed;
    /// `EXIT_FATAL` if the run did not complete; `EXIT_TEST_FAILURES`
    /// otherwise.
    pub fn process_result(&self) -> u8 {
        if !self.final_status {
            EXIT_FATAL
        } else if self.counts.assertions_failed > 0 || self.counts.exceptions_caught > 0 {
            EXIT_TEST_FAILURES
        } else {
            EXIT_SUCCESS
        }
    }

    pub fn summary(&self, duration: Duration) -> RunSummary {
        RunSummary {
            counts: self.counts,
            final_status: self.final_status,
            duration,
            exit_code: self.process_result(),
        }
    }
}

/// The totals handed to the observer at the end of a run.
/// 运行结束时交给观察者的汇总信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub counts: Counts,
    pub final_status: bool,
    pub duration: Duration,
    pub exit_code: u8,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.exit_code == EXIT_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_run_exits_zero() {
        let mut state = RunState::new();
        state.start_set("Math");
        state.start_case("addition");
        state.record_assertion(true);
        state.end_case();
        state.end_set();
        state.finalize(true);

        assert_eq!(state.process_result(), EXIT_SUCCESS);
        assert_eq!(state.counts().cases_failed, 0);
    }

    #[test]
    fn test_exception_counts_as_failed_assertion() {
        let mut state = RunState::new();
        state.start_set("Math");
        state.start_case("division");
        state.record_exception();
        state.end_case();
        state.end_set();
        state.finalize(true);

        let counts = state.counts();
        assert_eq!(counts.exceptions_caught, 1);
        assert_eq!(counts.assertions_failed, 1);
        assert_eq!(counts.cases_failed, 1);
        assert_eq!(state.process_result(), EXIT_TEST_FAILURES);
    }

    #[test]
    fn test_unfinished_run_is_fatal_even_without_failures() {
        let mut state = RunState::new();
        state.finalize(false);
        assert_eq!(state.process_result(), EXIT_FATAL);
    }

    #[test]
    fn test_empty_run_is_clean() {
        let mut state = RunState::new();
        state.finalize(true);
        assert_eq!(state.process_result(), EXIT_SUCCESS);
        assert_eq!(state.counts(), Counts::default());
    }

    #[test]
    fn test_ending_twice_counts_a_failed_case_once() {
        let mut state = RunState::new();
        state.start_set("Math");
        state.start_case("division");
        state.record_assertion(false);
        state.end_case();
        state.end_case();
        state.end_set();

        assert_eq!(state.counts().cases_started, 1);
        assert_eq!(state.counts().cases_failed, 1);
    }
}
