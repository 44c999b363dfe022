//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for failure classification and the outcome types.
//!
//! 测试失败分类和结果类型。

use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use testset::core::models::{Caught, Exception, Location, Outcome};

fn catch(f: impl FnOnce()) -> Caught {
    testset::infra::panic::install_quiet_hook();
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).unwrap_err();
    Caught::from_panic(payload.as_ref())
}

#[cfg(test)]
mod caught_tests {
    use super::*;

    #[test]
    fn test_exception_payload_is_recognized() {
        let caught = catch(|| panic::panic_any(Exception::new("bad index")));
        assert_eq!(caught, Caught::Recognized("bad index".to_string()));
    }

    #[test]
    fn test_message_payloads_are_recognized() {
        assert_eq!(catch(|| panic!("static")).message(), Some("static"));
        let value = 3;
        assert_eq!(catch(|| panic!("formatted {value}")).message(), Some("formatted 3"));
    }

    #[test]
    fn test_other_payloads_are_unknown() {
        let caught = catch(|| panic::panic_any(17_i32));
        assert_eq!(caught, Caught::Unknown);
        assert!(!caught.is_recognized());
        assert_eq!(caught.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_errors_are_recognized() {
        let err = anyhow::Error::new(Exception::new("refused"));
        assert_eq!(Caught::from_error(&err).message(), Some("refused"));

        let err = anyhow!("inner").context("outer");
        assert_eq!(Caught::from_error(&err).message(), Some("outer: inner"));
    }
}

#[cfg(test)]
mod outcome_tests {
    use super::*;

    #[test]
    fn test_only_passed_satisfies_a_check() {
        assert!(Outcome::Passed.satisfies_check());
        assert!(!Outcome::FailedComparison.satisfies_check());
        assert!(!Outcome::CaughtRecognized("x".into()).satisfies_check());
        assert!(!Outcome::CaughtUnknown.satisfies_check());
    }

    #[test]
    fn test_any_failure_satisfies_throws() {
        assert!(Outcome::CaughtRecognized("x".into()).satisfies_throws());
        assert!(Outcome::CaughtUnknown.satisfies_throws());
        assert!(!Outcome::FailedNoThrow.satisfies_throws());
        assert!(!Outcome::Passed.satisfies_throws());
    }

    #[test]
    fn test_outcome_from_caught() {
        let outcome = Outcome::from(Caught::Recognized("m".into()));
        assert_eq!(outcome.caught(), Some(Caught::Recognized("m".into())));
        assert_eq!(Outcome::from(Caught::Unknown).caught(), Some(Caught::Unknown));
        assert_eq!(Outcome::FailedComparison.caught(), None);
    }
}

#[test]
fn test_location_display() {
    let location = Location::new("src/math.rs", 42);
    assert_eq!(location.to_string(), "src/math.rs:42");

    let here = Location::caller();
    assert!(here.file.ends_with("unit_models_tests.rs"));
}
