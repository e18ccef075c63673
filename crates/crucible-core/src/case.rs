//! Test cases and assertion checks
//!
//! A [`TestCase`] is a name plus a run body. Construction registers the case
//! with the driver it was handed, so declaring a suite is nothing more than
//! calling [`TestCase::new`] (or the [`declare_test!`](crate::declare_test)
//! macro) once per test during bootstrap.
//!
//! Assertion checks are methods on the case so a failing check can record the
//! failure where the driver will see it. A failing check normally unwinds the
//! rest of the test body; a body that wants to keep going and report every
//! violation in one pass calls [`TestCase::set_forge_ahead`] first.

use std::panic::panic_any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::driver::TestDriver;
use crate::float;
use crate::timer::CpuTimer;

/// Unwind payload raised by a failing assertion when forge-ahead is off.
///
/// The driver downcasts caught panics against this type to tell an assertion
/// abort apart from an unrelated fault in the test body.
pub(crate) struct AssertAbort;

/// The run body of a declared test
pub type TestBody = Box<dyn Fn(&TestCase) + Send + Sync>;

/// One declared unit of test behavior
///
/// State transitions are one-way: constructed, registered, run, finished.
/// The failed flag starts false, is set by a failing check (or
/// [`set_failed`](Self::set_failed)), and is never cleared.
pub struct TestCase {
    name: String,
    forge_ahead: AtomicBool,
    failed: AtomicBool,
    timer: Mutex<CpuTimer>,
    body: TestBody,
}

impl TestCase {
    /// Construct a test case and register it with `driver`
    ///
    /// Registration is a side effect of construction and happens exactly
    /// once; the returned handle is the same one the driver holds.
    pub fn new(
        driver: &TestDriver,
        name: impl Into<String>,
        body: impl Fn(&TestCase) + Send + Sync + 'static,
    ) -> Arc<TestCase> {
        let case = Arc::new(TestCase {
            name: name.into(),
            forge_ahead: AtomicBool::new(false),
            failed: AtomicBool::new(false),
            timer: Mutex::new(CpuTimer::new()),
            body: Box::new(body),
        });
        driver.register_test(Arc::clone(&case));
        case
    }

    /// The immutable identity of this test
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any check has failed; false before the first run
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::Relaxed)
    }

    /// Start the elapsed-time capture, then invoke the run body once
    ///
    /// Assertion aborts are not caught here; the driver wraps this call in
    /// its per-test recovery scope.
    pub fn start_test(&self) {
        self.timer.lock().start();
        (self.body)(self);
    }

    /// Switch a failing check from abort-the-test to log-and-continue
    pub fn set_forge_ahead(&self, onoff: bool) {
        self.forge_ahead.store(onoff, Ordering::Relaxed);
    }

    /// Mark this test failed without going through an assertion check
    pub fn set_failed(&self) {
        self.failed.store(true, Ordering::Relaxed);
    }

    /// Milliseconds elapsed since `start_test` began
    ///
    /// Reads a stopped snapshot of the live timer; the capture keeps running.
    pub fn elapsed_ms(&self) -> f32 {
        let mut snapshot = self.timer.lock().clone();
        snapshot.stop();
        snapshot.elapsed_ms()
    }

    /// Check `|a - b| <= tol` in double precision
    pub fn assert_equal_f64(&self, a: f64, b: f64, tol: f64, file: &str, line: u32) {
        if (a - b).abs() <= tol {
            return;
        }
        println!(
            "[ASSERT] {}::assert_equal_f64({:.10}, {:.10}, {:.10}) at {} line {}",
            self.name, a, b, tol, file, line
        );
        self.fail_check();
    }

    /// Check `|a - b| <= tol` in single precision
    pub fn assert_equal_f32(&self, a: f32, b: f32, tol: f32, file: &str, line: u32) {
        if (a - b).abs() <= tol {
            return;
        }
        println!(
            "[ASSERT] {}::assert_equal_f32({:.10}, {:.10}, {:.10}) at {} line {}",
            self.name, a, b, tol, file, line
        );
        self.fail_check();
    }

    /// Check exact integer equality
    pub fn assert_equal_int(&self, a: i64, b: i64, file: &str, line: u32) {
        if a == b {
            return;
        }
        println!(
            "[ASSERT] {}::assert_equal_int({}, {}) at {} line {}",
            self.name, a, b, file, line
        );
        self.fail_check();
    }

    /// Check that a value is finite and not NaN
    pub fn assert_finite(&self, a: f64, file: &str, line: u32) {
        if float::check_float(a) {
            return;
        }
        println!(
            "[ASSERT] {}::assert_finite at {} line {}",
            self.name, file, line
        );
        self.fail_check();
    }

    /// Check that a condition holds
    pub fn assert_true(&self, a: bool, file: &str, line: u32) {
        if a {
            return;
        }
        println!(
            "[ASSERT] {}::assert_true at {} line {}",
            self.name, file, line
        );
        self.fail_check();
    }

    /// Record the failure and, unless forging ahead, unwind the test body
    fn fail_check(&self) {
        self.set_failed();
        if !self.forge_ahead.load(Ordering::Relaxed) {
            panic_any(AssertAbort);
        }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("failed", &self.failed())
            .finish()
    }
}
