//! Built-in demonstration suites
//!
//! Small numerical kernels and the tests declared against them. These are the
//! concrete collaborators the harness exists to exercise; every assertion
//! kind and forge-ahead mode shows up here at least once.
//!
//! Registration is an explicit bootstrap pass: the CLI calls [`bootstrap`]
//! before serving any run or list request.

pub mod reduce;
pub mod vector;

use crucible_core::TestDriver;
use std::sync::Once;

/// Register every built-in suite with the given driver
pub fn register_all(driver: &TestDriver) {
    vector::register(driver);
    reduce::register(driver);
}

/// Register the built-in suites with the process-wide driver, once
pub fn bootstrap() -> &'static TestDriver {
    static ONCE: Once = Once::new();
    let driver = TestDriver::global();
    ONCE.call_once(|| register_all(driver));
    driver
}
