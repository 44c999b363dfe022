//! Authoring macros.
//!
//! They capture the source location and the literal text of the checked
//! expression, then call into [`crate::Checks`].

/// The location of the macro invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::Location::new(::core::file!(), ::core::line!())
    };
}

/// Defines a test set and registers it before `main`.
///
/// The set is named after the identifier. The body receives a
/// `&mut TestSet` and may evaluate to `()` or to an `anyhow::Result<()>`;
/// an error or a panic outside of any test case aborts the whole run.
///
/// ```no_run
/// testset::test_set!(Strings, |set| {
///     set.case("trim", |t| {
///         testset::test_true!(t, " a ".trim() == "a");
///     });
/// });
/// ```
#[macro_export]
macro_rules! test_set {
    ($name:ident, |$set:ident| $body:block) => {
        #[allow(non_snake_case)]
        fn $name($set: &mut $crate::TestSet<'_>) -> $crate::__private::anyhow::Result<()> {
            $crate::CaseResult::into_result($body)
        }

        $crate::__private::inventory::submit! {
            $crate::TestSetEntry::new(::core::stringify!($name), $name)
        }
    };
}

/// Checks that an expression is true.
#[macro_export]
macro_rules! test_true {
    ($checks:expr, $cond:expr $(,)?) => {
        $checks.check_true($crate::__location!(), ::core::stringify!($cond), || $cond)
    };
}

/// Checks that an expression is false.
#[macro_export]
macro_rules! test_false {
    ($checks:expr, $cond:expr $(,)?) => {
        $checks.check_false($crate::__location!(), ::core::stringify!($cond), || $cond)
    };
}

/// Checks that evaluating an expression panics. Its value is discarded.
#[macro_export]
macro_rules! test_throws {
    ($checks:expr, $expr:expr $(,)?) => {
        $checks.check_throws($crate::__location!(), ::core::stringify!($expr), || {
            let _ = &$expr;
        })
    };
}

/// Checks that a `Result`-valued expression is an error (or panics).
#[macro_export]
macro_rules! test_err {
    ($checks:expr, $expr:expr $(,)?) => {
        $checks.check_err($crate::__location!(), ::core::stringify!($expr), || $expr)
    };
}

/// Records a passed assertion with a reason.
#[macro_export]
macro_rules! test_passed {
    ($checks:expr, $reason:expr $(,)?) => {
        $checks.passed($crate::__location!(), $reason)
    };
}

/// Records a failed assertion with a reason.
#[macro_export]
macro_rules! test_failed {
    ($checks:expr, $reason:expr $(,)?) => {
        $checks.failed($crate::__location!(), $reason)
    };
}
