//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures shared by the registry, the
//! executor and the reporters: source locations, the recognized error shape,
//! the classification of caught failures and the tagged outcome of a single
//! assertion.
//!
//! 此模块定义了注册表、执行器和报告器共享的核心数据结构：
//! 源码位置、可识别的错误类型、捕获失败的分类以及单个断言的结果。

use std::any::Any;
use std::fmt;

use crate::infra::panic::payload_message;

/// A position in the test source, captured with `file!()`/`line!()` or
/// `#[track_caller]`.
/// 测试源码中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the caller of a `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The recognized error shape of the harness.
///
/// Test code may return it as an error value or raise it with
/// `std::panic::panic_any`; either way the harness reports its message
/// instead of the generic `UNKNOWN` marker.
///
/// 测试框架可识别的错误类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    message: String,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Exception {}

/// Classification of a failure caught at a containment boundary.
/// 在隔离边界捕获的失败的分类。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caught {
    /// A failure from the recognized family, with its message.
    /// 可识别的失败，带有其消息。
    Recognized(String),
    /// A panic payload the harness cannot describe.
    /// 无法描述的 panic 负载。
    Unknown,
}

impl Caught {
    /// Classifies an error value returned by test code.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<Exception>() {
            Some(exception) => Caught::Recognized(exception.message().to_string()),
            None => Caught::Recognized(format!("{err:#}")),
        }
    }

    /// Classifies a payload captured by `catch_unwind`.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(exception) = payload.downcast_ref::<Exception>() {
            return Caught::Recognized(exception.message().to_string());
        }
        match payload_message(payload) {
            Some(message) => Caught::Recognized(message),
            None => Caught::Unknown,
        }
    }

    /// The message to report, `None` for unknown failures.
    pub fn message(&self) -> Option<&str> {
        match self {
            Caught::Recognized(message) => Some(message),
            Caught::Unknown => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Caught::Recognized(_))
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("UNKNOWN"))
    }
}

/// What a checked expression produced, before it is judged against an
/// expectation.
///
/// 被检查表达式的求值结果，在与期望比较之前。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The boolean matched the expectation.
    Passed,
    /// The boolean did not match the expectation.
    FailedComparison,
    /// A "throws" check completed without failing.
    FailedNoThrow,
    /// Evaluation failed with a recognized error.
    CaughtRecognized(String),
    /// Evaluation failed with an unrecognized panic payload.
    CaughtUnknown,
}

impl Outcome {
    /// Whether this outcome satisfies a boolean (true/false) check.
    pub fn satisfies_check(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Whether this outcome satisfies a "throws" check. Any failure does.
    pub fn satisfies_throws(&self) -> bool {
        matches!(self, Outcome::CaughtRecognized(_) | Outcome::CaughtUnknown)
    }

    /// The caught failure, if evaluation raised one.
    pub fn caught(&self) -> Option<Caught> {
        match self {
            Outcome::CaughtRecognized(message) => Some(Caught::Recognized(message.clone())),
            Outcome::CaughtUnknown => Some(Caught::Unknown),
            _ => None,
        }
    }
}

impl From<Caught> for Outcome {
    fn from(caught: Caught) -> Self {
        match caught {
            Caught::Recognized(message) => Outcome::CaughtRecognized(message),
            Caught::Unknown => Outcome::CaughtUnknown,
        }
    }
}

/// The recorded result of one assertion. Only lives long enough to update the
/// counters and notify the observer.
///
/// 一次断言的记录结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionOutcome {
    pub location: Location,
    pub expression: String,
    pub passed: bool,
    /// The failure raised while evaluating the expression, if any.
    pub caught: Option<Caught>,
}

/// A test set that could not be executed at all. This is framework-fatal and
/// aborts the remaining run.
///
/// 无法执行的测试集。这是框架级致命错误，会中止剩余的运行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAborted {
    pub set: String,
    pub caught: Caught,
}

impl fmt::Display for SetAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test set '{}' aborted: {}", self.set, self.caught)
    }
}

impl std::error::Error for SetAborted {}
