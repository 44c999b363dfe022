//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the lifecycle of a run to a writer (stdout by default):
//! set headers, one line per failed assertion and per caught exception, and
//! the trailing summary block, with colour and internationalization support.
//!
//! 此模块将运行的生命周期打印到输出（默认为 stdout）：测试集标题、
//! 每个失败断言和捕获异常各一行，以及末尾的摘要块，支持颜色和国际化。

use colored::*;
use std::io::{self, Write};

use crate::core::models::{AssertionOutcome, Caught, Location};
use crate::core::state::RunSummary;
use crate::infra::t;
use crate::reporting::RunObserver;

/// Prints a run to the console.
///
/// Write errors are ignored: a broken stdout must not change the outcome of
/// the run, which is carried by the exit code.
///
/// 将运行情况打印到控制台。
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    locale: String,
    verbose: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(locale: &str) -> Self {
        Self::new(io::stdout(), locale)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, locale: &str) -> Self {
        Self {
            out,
            locale: locale.to_string(),
            verbose: false,
        }
    }

    /// Also print a line when each test case starts.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{text}");
    }

    fn caught_message(&self, caught: &Caught) -> String {
        match caught.message() {
            Some(message) => message.to_string(),
            None => t!("report.unknown", locale = &self.locale).to_string(),
        }
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn on_start_set(&mut self, name: &str) {
        let header = t!("set.start", locale = &self.locale, name = name);
        self.line(header.bold());
    }

    fn on_end_set(&mut self, name: &str) {
        tracing::debug!("{}", t!("set.end", locale = &self.locale, name = name));
    }

    fn on_start_case(&mut self, _set: &str, name: &str) {
        if self.verbose {
            let text = t!("case.start", locale = &self.locale, name = name);
            self.line(text.dimmed());
        }
    }

    fn on_assertion(&mut self, outcome: &AssertionOutcome) {
        if outcome.passed {
            return;
        }
        let text = t!(
            "report.assert_failed",
            locale = &self.locale,
            location = outcome.location,
            expression = &outcome.expression
        );
        self.line(text.red());
    }

    fn on_exception(&mut self, location: Location, caught: &Caught) {
        let message = self.caught_message(caught);
        let text = t!(
            "report.unhandled_exception",
            locale = &self.locale,
            location = location,
            message = message
        );
        self.line(text.red());
    }

    fn on_fatal(&mut self, caught: &Caught) {
        let message = self.caught_message(caught);
        let text = t!("report.fatal_exception", locale = &self.locale, message = message);
        self.line(text.red().bold());
    }

    fn on_unmatched_sets(&mut self, names: &[String]) {
        let text = t!("cli.unmatched_sets", locale = &self.locale, names = names.join(", "));
        self.line(text.red().bold());
    }

    /// Output format:
    /// ```text
    /// --- Test Summary ---
    /// Test sets run:      1
    /// Test cases run:     4 (0 failed)
    /// Assertions passed:  6
    /// Assertions failed:  0
    /// Exceptions caught:  0
    /// Duration:           1.20ms
    /// TEST RUN PASSED
    /// ```
    fn on_summary(&mut self, summary: &RunSummary) {
        let locale = self.locale.clone();
        let counts = summary.counts;

        self.line("");
        self.line(t!("summary.banner", locale = &locale).bold());
        self.line(t!("summary.sets", locale = &locale, count = counts.sets_run));
        self.line(t!(
            "summary.cases",
            locale = &locale,
            count = counts.cases_started,
            failed = counts.cases_failed
        ));
        self.line(
            t!("summary.passed", locale = &locale, count = counts.assertions_passed).green(),
        );

        let failed = t!("summary.failed", locale = &locale, count = counts.assertions_failed);
        if counts.assertions_failed > 0 {
            self.line(failed.red());
        } else {
            self.line(failed);
        }

        let exceptions = t!("summary.exceptions", locale = &locale, count = counts.exceptions_caught);
        if counts.exceptions_caught > 0 {
            self.line(exceptions.red());
        } else {
            self.line(exceptions);
        }

        let duration = format!("{:.2?}", summary.duration);
        self.line(t!("summary.duration", locale = &locale, duration = duration));

        let verdict = if !summary.final_status {
            t!("summary.result_aborted", locale = &locale).red().bold()
        } else if summary.is_success() {
            t!("summary.result_passed", locale = &locale).green().bold()
        } else {
            t!("summary.result_failed", locale = &locale).red().bold()
        };
        self.line(verdict);
        let _ = self.out.flush();
    }
}
