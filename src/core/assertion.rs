//! # Assertion Processing Module / 断言处理模块
//!
//! Every check a test body makes is reduced to one recorded pass/fail result.
//! The checked expression is evaluated inside its own containment scope and
//! yields a tagged [`Outcome`], which is then judged against the expectation
//! ("is true", "is false", "throws").
//!
//! 测试体的每次检查都归结为一条通过/失败记录。被检查的表达式在独立的隔离范围内求值，
//! 产生带标签的 [`Outcome`]，然后根据期望进行判定。

use std::panic::{self, AssertUnwindSafe};

use crate::core::{
    execution::RunContext,
    models::{AssertionOutcome, Caught, Location, Outcome},
};

/// Evaluates a boolean expression and compares it with `expected`.
pub fn evaluate_bool<F>(expected: bool, expr: F) -> Outcome
where
    F: FnOnce() -> bool,
{
    match panic::catch_unwind(AssertUnwindSafe(expr)) {
        Ok(value) if value == expected => Outcome::Passed,
        Ok(_) => Outcome::FailedComparison,
        Err(payload) => Caught::from_panic(payload.as_ref()).into(),
    }
}

/// Evaluates an expression that is expected to panic.
pub fn evaluate_throws<F>(expr: F) -> Outcome
where
    F: FnOnce(),
{
    match panic::catch_unwind(AssertUnwindSafe(expr)) {
        Ok(()) => Outcome::FailedNoThrow,
        Err(payload) => Caught::from_panic(payload.as_ref()).into(),
    }
}

/// Evaluates an expression that is expected to fail, by returning an error
/// or by panicking.
pub fn evaluate_err<T, E, F>(expr: F) -> Outcome
where
    E: Into<anyhow::Error>,
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(expr)) {
        Ok(Ok(_)) => Outcome::FailedNoThrow,
        Ok(Err(err)) => {
            let err: anyhow::Error = err.into();
            Caught::from_error(&err).into()
        }
        Err(payload) => Caught::from_panic(payload.as_ref()).into(),
    }
}

/// The assertion API available inside a test case body. Usually driven
/// through [`crate::test_true!`] and friends, which fill in the location and
/// the expression text.
///
/// 测试用例体内可用的断言 API。
pub struct Checks<'a> {
    ctx: &'a mut RunContext,
}

impl<'a> Checks<'a> {
    pub(crate) fn new(ctx: &'a mut RunContext) -> Self {
        Self { ctx }
    }

    pub fn set_name(&self) -> &str {
        self.ctx.state().current_set().unwrap_or_default()
    }

    pub fn case_name(&self) -> &str {
        self.ctx.state().current_case().unwrap_or_default()
    }

    /// Records a pass/fail result as is.
    pub fn process_result(&mut self, location: Location, expression: &str, passed: bool) {
        self.ctx.process_assert_result(location, expression, passed);
    }

    pub fn check_true<F>(&mut self, location: Location, expression: &str, expr: F)
    where
        F: FnOnce() -> bool,
    {
        let outcome = evaluate_bool(true, expr);
        self.record_check(location, expression, outcome);
    }

    pub fn check_false<F>(&mut self, location: Location, expression: &str, expr: F)
    where
        F: FnOnce() -> bool,
    {
        let outcome = evaluate_bool(false, expr);
        self.record_check(location, expression, outcome);
    }

    /// Passes if evaluating `expr` panics, whatever the payload. The kind of
    /// failure is only logged.
    pub fn check_throws<F>(&mut self, location: Location, expression: &str, expr: F)
    where
        F: FnOnce(),
    {
        let outcome = evaluate_throws(expr);
        self.record_throws(location, expression, outcome);
    }

    /// Passes if `expr` returns an error or panics.
    pub fn check_err<T, E, F>(&mut self, location: Location, expression: &str, expr: F)
    where
        E: Into<anyhow::Error>,
        F: FnOnce() -> Result<T, E>,
    {
        let outcome = evaluate_err(expr);
        self.record_throws(location, expression, outcome);
    }

    /// Marks a passed assertion with a reason text.
    pub fn passed(&mut self, location: Location, reason: &str) {
        self.process_result(location, reason, true);
    }

    /// Marks a failed assertion with a reason text.
    pub fn failed(&mut self, location: Location, reason: &str) {
        self.process_result(location, reason, false);
    }

    fn record_check(&mut self, location: Location, expression: &str, outcome: Outcome) {
        let caught = outcome.caught();
        if let Some(caught) = &caught {
            tracing::debug!(%location, "Unhandled Exception: {caught}");
        }
        self.ctx.record_assertion(AssertionOutcome {
            location,
            expression: expression.to_string(),
            passed: outcome.satisfies_check(),
            caught,
        });
    }

    fn record_throws(&mut self, location: Location, expression: &str, outcome: Outcome) {
        match &outcome {
            Outcome::CaughtRecognized(message) => tracing::debug!(%location, "Thrown: {message}"),
            Outcome::CaughtUnknown => tracing::debug!(%location, "Unhandled Exception: UNKNOWN"),
            _ => {}
        }
        self.ctx.record_assertion(AssertionOutcome {
            location,
            expression: expression.to_string(),
            passed: outcome.satisfies_throws(),
            caught: outcome.caught(),
        });
    }
}
