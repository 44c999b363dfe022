// Shared test helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;
use testset::core::models::{AssertionOutcome, Caught, Location};
use testset::core::state::RunSummary;
use testset::reporting::RunObserver;
use testset::{Registry, RequestedCases, TestSuite};

/// A lifecycle notification, as seen by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartSet(String),
    EndSet(String),
    StartCase(String, String),
    EndCase(String, String),
    Assertion(AssertionOutcome),
    Exception(Location, Caught),
    Fatal(Caught),
    Unmatched(Vec<String>),
    Summary(RunSummary),
}

/// Records every notification into a shared list.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl RunObserver for RecordingObserver {
    fn on_start_set(&mut self, name: &str) {
        self.push(Event::StartSet(name.to_string()));
    }

    fn on_end_set(&mut self, name: &str) {
        self.push(Event::EndSet(name.to_string()));
    }

    fn on_start_case(&mut self, set: &str, name: &str) {
        self.push(Event::StartCase(set.to_string(), name.to_string()));
    }

    fn on_end_case(&mut self, set: &str, name: &str) {
        self.push(Event::EndCase(set.to_string(), name.to_string()));
    }

    fn on_assertion(&mut self, outcome: &AssertionOutcome) {
        self.push(Event::Assertion(outcome.clone()));
    }

    fn on_exception(&mut self, location: Location, caught: &Caught) {
        self.push(Event::Exception(location, caught.clone()));
    }

    fn on_fatal(&mut self, caught: &Caught) {
        self.push(Event::Fatal(caught.clone()));
    }

    fn on_unmatched_sets(&mut self, names: &[String]) {
        self.push(Event::Unmatched(names.to_vec()));
    }

    fn on_summary(&mut self, summary: &RunSummary) {
        self.push(Event::Summary(*summary));
    }
}

/// An in-memory writer that can be inspected after being boxed away.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `suite` with a recording observer.
pub fn run_recorded(suite: &TestSuite, requested: &RequestedCases) -> (RunSummary, Vec<Event>) {
    let observer = RecordingObserver::default();
    let summary = suite.run(requested, Box::new(observer.clone()));
    (summary, observer.events())
}

/// Runs every set of `registry` with the default configuration.
pub fn run_all(registry: Registry) -> (RunSummary, Vec<Event>) {
    run_recorded(&TestSuite::new(registry), &RequestedCases::all())
}

pub fn started_sets(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::StartSet(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Writes a suite configuration file into `temp_dir`.
pub fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("TestSuite.toml");
    fs::write(&path, content).expect("Failed to write TestSuite.toml");
    path
}
