//! # Test Set Registry Module / 测试集注册表模块
//!
//! Maps test-set names to their runner functions. Sets are registered in two
//! ways:
//!
//! - ahead of `main`, through [`crate::test_set!`], which submits a
//!   [`TestSetEntry`] to `inventory`;
//! - explicitly at startup, through [`register_test_set`] or
//!   [`Registry::register`].
//!
//! Iteration is lexicographic by name so that output is reproducible.
//! Registering a name twice keeps the last registration.
//!
//! 将测试集名称映射到其运行函数。迭代顺序按名称的字典序，以保证输出可复现。
//! 重复注册同名测试集时保留最后一次注册。

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::core::execution::TestSet;

/// The runner of a test set.
/// 测试集的运行函数。
pub type TestSetFn = fn(&mut TestSet<'_>) -> anyhow::Result<()>;

/// A `(name, runner)` pair, created once per test set.
/// 每个测试集创建一次的 `(名称, 运行函数)` 对。
#[derive(Clone, Copy)]
pub struct TestSetEntry {
    pub name: &'static str,
    pub runner: TestSetFn,
}

impl TestSetEntry {
    pub const fn new(name: &'static str, runner: TestSetFn) -> Self {
        Self { name, runner }
    }
}

impl fmt::Debug for TestSetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSetEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

inventory::collect!(TestSetEntry);

/// Registrations made through [`register_test_set`].
static EXPLICIT: Lazy<Mutex<Vec<TestSetEntry>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Registers a test set in the process-wide store.
///
/// Always returns `true` so the call can be used as an initializer. It does
/// not depend on any other part of the harness having been set up.
///
/// 在进程级存储中注册测试集。始终返回 `true`。
pub fn register_test_set(name: &'static str, runner: TestSetFn) -> bool {
    EXPLICIT
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push(TestSetEntry::new(name, runner));
    true
}

/// A name-ordered collection of test sets.
/// 按名称排序的测试集集合。
#[derive(Clone, Default)]
pub struct Registry {
    sets: BTreeMap<String, TestSetFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry of every set known to the process: the entries
    /// submitted by [`crate::test_set!`] first, then the ones passed to
    /// [`register_test_set`], so explicit registrations win on duplicates.
    pub fn discover() -> Self {
        let mut registry = Self::new();
        for entry in inventory::iter::<TestSetEntry> {
            registry.register(entry.name, entry.runner);
        }
        let explicit = EXPLICIT
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for entry in explicit.iter() {
            registry.register(entry.name, entry.runner);
        }
        registry
    }

    /// Inserts or replaces a test set. Returns the replaced runner, if any.
    pub fn register(&mut self, name: impl Into<String>, runner: TestSetFn) -> Option<TestSetFn> {
        let name = name.into();
        let previous = self.sets.insert(name.clone(), runner);
        if previous.is_some() {
            tracing::warn!(set = %name, "test set registered twice, keeping the last registration");
        }
        previous
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<TestSetFn> {
        self.sets.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The registered names in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// The registered sets in run order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TestSetFn)> {
        self.sets.iter().map(|(name, runner)| (name.as_str(), *runner))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sets.keys()).finish()
    }
}
