//! Test driver - registry, run loop, and reporting
//!
//! The driver holds every registered [`TestCase`] in registration order and
//! serves the three operations a harness needs: run everything, run a named
//! subset, list what is registered. Each test runs inside a recovery scope so
//! one test's assertion abort (or any other panic in its body) never stops
//! the rest of the run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::OnceLock;

use colored::Colorize;
use parking_lot::Mutex;

use crate::case::{AssertAbort, TestCase};

/// Process-wide holder of registered tests
///
/// Exactly one global instance exists per process ([`TestDriver::global`]);
/// local instances can be constructed freely, which is how the harness tests
/// itself. The registry is mutated during bootstrap and treated as read-only
/// while a run is in flight.
#[derive(Default)]
pub struct TestDriver {
    tests: Mutex<Vec<Arc<TestCase>>>,
}

impl TestDriver {
    /// Create an empty driver
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide driver, lazily constructed on first call
    pub fn global() -> &'static TestDriver {
        static DRIVER: OnceLock<TestDriver> = OnceLock::new();
        DRIVER.get_or_init(TestDriver::new)
    }

    /// Append a test to the registry
    ///
    /// Duplicate names are accepted with a warning; name lookup resolves to
    /// the first registrant.
    pub fn register_test(&self, case: Arc<TestCase>) {
        let mut tests = self.tests.lock();
        if tests.iter().any(|t| t.name() == case.name()) {
            println!(
                "{} test {} registered more than once; lookups resolve to the first",
                "[WARNING]".yellow(),
                case.name()
            );
        }
        tests.push(case);
    }

    /// Run every registered test in registration order
    ///
    /// Returns true iff none failed.
    pub fn run_all_tests(&self) -> bool {
        let selected = self.tests.lock().clone();
        self.run_selected(&selected)
    }

    /// Run the named subset
    ///
    /// Each requested name resolves first-match-wins against the registry;
    /// unresolved names get a warning and are skipped. The resolved subset
    /// runs in registry order, each test at most once. Returns true iff none
    /// of the resolved tests failed; an empty resolved set trivially passes.
    pub fn run_tests<S: AsRef<str>>(&self, names: &[S]) -> bool {
        let tests = self.tests.lock().clone();

        let mut indices: Vec<usize> = Vec::new();
        for name in names {
            let name = name.as_ref();
            match tests.iter().position(|t| t.name() == name) {
                Some(index) => {
                    if !indices.contains(&index) {
                        indices.push(index);
                    }
                }
                None => {
                    println!("{} test {} not found", "[WARNING]".yellow(), name);
                }
            }
        }
        indices.sort_unstable();

        let selected: Vec<Arc<TestCase>> =
            indices.into_iter().map(|i| Arc::clone(&tests[i])).collect();
        self.run_selected(&selected)
    }

    /// List every registered test name, comma-separated, registration order
    pub fn print_tests(&self) {
        let tests = self.tests.lock();
        let names: Vec<&str> = tests.iter().map(|t| t.name()).collect();
        println!("{}", names.join(", "));
    }

    /// Number of registered tests
    pub fn len(&self) -> usize {
        self.tests.lock().len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tests.lock().is_empty()
    }

    /// The shared run loop behind both run entry points
    fn run_selected(&self, selected: &[Arc<TestCase>]) -> bool {
        let manifest: Vec<&str> = selected.iter().map(|t| t.name()).collect();
        println!("Running tests: {}", manifest.join(", "));

        // The driver prints every diagnostic it wants shown; silence the
        // default hook so assertion unwinds don't spray panic output.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));

        let mut any_failed = false;
        for test in selected {
            println!("running {}", test.name());

            let mut ok = true;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| test.start_test()));
            if let Err(payload) = outcome {
                ok = false;
                if !payload.is::<AssertAbort>() {
                    // Unrelated fault in the test body; classify as a failure
                    // of this test and keep the run alive.
                    test.set_failed();
                    println!(
                        "{} {}: {}",
                        "[PANIC]".red(),
                        test.name(),
                        panic_message(payload.as_ref())
                    );
                }
            }
            if test.failed() {
                ok = false;
            }

            if !ok {
                any_failed = true;
                println!("{} {}", "[FAILED]".red().bold(), test.name());
            }
        }

        panic::set_hook(previous_hook);
        println!();

        if !any_failed {
            println!("{}", "[PASSED]".green().bold());
            true
        } else {
            println!("There were failures.");
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_driver_is_one_instance() {
        let first = TestDriver::global() as *const TestDriver;
        let second = TestDriver::global() as *const TestDriver;
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_driver_reports_empty() {
        let driver = TestDriver::new();
        assert!(driver.is_empty());
        assert_eq!(driver.len(), 0);
    }

    #[test]
    fn test_registration_is_ordered() {
        let driver = TestDriver::new();
        TestCase::new(&driver, "First", |_| {});
        TestCase::new(&driver, "Second", |_| {});
        TestCase::new(&driver, "Third", |_| {});
        assert_eq!(driver.len(), 3);
    }

    #[test]
    fn test_empty_run_trivially_passes() {
        let driver = TestDriver::new();
        assert!(driver.run_all_tests());
    }

    #[test]
    fn test_panic_message_extraction() {
        let boxed: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(boxed.as_ref()), "static message");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(boxed.as_ref()), "owned message");

        let boxed: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic payload");
    }
}
