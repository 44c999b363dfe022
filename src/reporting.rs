//! # Reporting Module / 报告模块
//!
//! This module defines the lifecycle notifications emitted during a run and
//! the console reporter that turns them into colourful, localized output.
//!
//! 此模块定义运行期间发出的生命周期通知，以及将其转换为彩色本地化输出的控制台报告器。

pub mod console;

use crate::core::models::{AssertionOutcome, Caught, Location};
use crate::core::state::RunSummary;

// Re-export common reporting types
pub use console::ConsoleReporter;

/// Receives the lifecycle notifications of a run, in order.
///
/// Every method has an empty default so observers only implement what they
/// care about.
///
/// 按顺序接收运行的生命周期通知。
pub trait RunObserver {
    fn on_start_set(&mut self, _name: &str) {}

    fn on_end_set(&mut self, _name: &str) {}

    fn on_start_case(&mut self, _set: &str, _name: &str) {}

    fn on_end_case(&mut self, _set: &str, _name: &str) {}

    /// Called for every assertion, passed or failed.
    fn on_assertion(&mut self, _outcome: &AssertionOutcome) {}

    /// A failure escaped a test case body and was contained.
    fn on_exception(&mut self, _location: Location, _caught: &Caught) {}

    /// A failure escaped a test set; the rest of the run is abandoned.
    fn on_fatal(&mut self, _caught: &Caught) {}

    /// Strict filtering found requested names with no registered set.
    fn on_unmatched_sets(&mut self, _names: &[String]) {}

    fn on_summary(&mut self, _summary: &RunSummary) {}
}

/// An observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RunObserver for NullObserver {}
