//! # Registry Unit Tests / 注册表单元测试
//!
//! Tests for explicit registration, duplicate handling, iteration order and
//! discovery of sets declared with `test_set!`.
//!
//! 测试显式注册、重复处理、迭代顺序以及通过 `test_set!` 声明的测试集的发现。

mod common;

use common::{Event, run_all};
use testset::{Registry, TestSet, register_test_set, test_passed, test_set, test_true};

fn first(set: &mut TestSet<'_>) -> anyhow::Result<()> {
    set.case("first", |t| {
        test_passed!(t, "first runner");
    });
    Ok(())
}

fn second(set: &mut TestSet<'_>) -> anyhow::Result<()> {
    set.case("second", |t| {
        test_passed!(t, "second runner");
    });
    Ok(())
}

test_set!(DiscoveredByMacro, |set| {
    set.case("runs", |t| {
        let set = t.set_name().to_string();
        let case = t.case_name().to_string();
        test_true!(t, set == "DiscoveredByMacro");
        test_true!(t, case == "runs");
    });
});

test_set!(DiscoveredWithResult, |set| {
    set.case("runs", |t| {
        test_passed!(t, "ok");
    });
    anyhow::Ok(())
});

#[test]
fn test_empty_registry() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.get("Anything").is_none());
}

#[test]
fn test_names_are_iterated_lexicographically() {
    let mut registry = Registry::new();
    registry.register("beta", first);
    registry.register("Alpha", first);
    registry.register("alpha", first);

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["Alpha", "alpha", "beta"]);
}

#[test]
fn test_last_registration_wins() {
    let mut registry = Registry::new();
    assert!(registry.register("Dup", first).is_none());
    assert!(registry.register("Dup", second).is_some());
    assert_eq!(registry.len(), 1);

    let (_, events) = run_all(registry);
    assert!(events.contains(&Event::StartCase("Dup".into(), "second".into())));
    assert!(!events.contains(&Event::StartCase("Dup".into(), "first".into())));
}

#[test]
fn test_macro_sets_are_discovered() {
    let registry = Registry::discover();
    assert!(registry.contains("DiscoveredByMacro"));
    assert!(registry.contains("DiscoveredWithResult"));
}

#[test]
fn test_discovered_macro_set_runs() {
    let registry = Registry::discover();
    let mut only = Registry::new();
    only.register(
        "DiscoveredByMacro",
        registry.get("DiscoveredByMacro").expect("set was not discovered"),
    );

    let (summary, _) = run_all(only);
    assert_eq!(summary.counts.assertions_passed, 2);
    assert_eq!(summary.counts.assertions_failed, 0);
}

#[test]
fn test_process_wide_registration() {
    assert!(register_test_set("ExplicitlyRegistered", first));
    let registry = Registry::discover();
    assert!(registry.contains("ExplicitlyRegistered"));
}

#[test]
fn test_explicit_registration_overrides_macro_set() {
    register_test_set("DiscoveredWithResult", second);
    let registry = Registry::discover();

    let mut only = Registry::new();
    only.register("DiscoveredWithResult", registry.get("DiscoveredWithResult").unwrap());
    let (_, events) = run_all(only);
    assert!(events.contains(&Event::StartCase("DiscoveredWithResult".into(), "second".into())));
}
