//! Declaration and assertion macros
//!
//! The macros capture `file!()` and `line!()` at the call site so a failing
//! check can point back at the test body that raised it.

/// Declare and register a test case in one step
///
/// ```
/// use crucible_core::{declare_test, TestDriver};
///
/// let driver = TestDriver::new();
/// declare_test!(&driver, "AlwaysPasses", |t| {
///     crucible_core::assert_true!(t, 1 + 1 == 2);
/// });
/// assert!(driver.run_all_tests());
/// ```
#[macro_export]
macro_rules! declare_test {
    ($driver:expr, $name:expr, $body:expr) => {
        $crate::case::TestCase::new($driver, $name, $body)
    };
}

/// Check `|a - b| <= tol` in double precision
#[macro_export]
macro_rules! assert_equal_f64 {
    ($test:expr, $a:expr, $b:expr, $tol:expr) => {
        $test.assert_equal_f64($a, $b, $tol, file!(), line!())
    };
}

/// Check `|a - b| <= tol` in single precision
#[macro_export]
macro_rules! assert_equal_f32 {
    ($test:expr, $a:expr, $b:expr, $tol:expr) => {
        $test.assert_equal_f32($a, $b, $tol, file!(), line!())
    };
}

/// Check exact integer equality
#[macro_export]
macro_rules! assert_equal_int {
    ($test:expr, $a:expr, $b:expr) => {
        $test.assert_equal_int($a, $b, file!(), line!())
    };
}

/// Check that a value is finite and not NaN
#[macro_export]
macro_rules! assert_finite {
    ($test:expr, $a:expr) => {
        $test.assert_finite($a, file!(), line!())
    };
}

/// Check that a condition holds
#[macro_export]
macro_rules! assert_true {
    ($test:expr, $a:expr) => {
        $test.assert_true($a, file!(), line!())
    };
}
