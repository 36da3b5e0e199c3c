//! Test registration and execution.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::assertion::{Assertion, TestResult};

/// A named test body.
pub struct TestDef {
    name: String,
    test: Box<dyn Fn() -> TestResult>,
}

impl TestDef {
    /// Returns the test name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the test body once, without catching panics.
    ///
    /// # Errors
    ///
    /// Returns whatever assertion the body failed with.
    pub fn run(&self) -> TestResult {
        (self.test)()
    }
}

impl fmt::Debug for TestDef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TestDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Pairs `test` with `name`.
pub fn test_def<F>(name: impl Into<String>, test: F) -> TestDef
where
    F: Fn() -> TestResult + 'static,
{
    TestDef {
        name: name.into(),
        test: Box::new(test),
    }
}

/// Registers `test` under `name` in `suite` and returns the suite size.
pub fn def_test<F>(name: impl Into<String>, suite: &mut Vec<TestDef>, test: F) -> usize
where
    F: Fn() -> TestResult + 'static,
{
    suite.push(test_def(name, test));
    suite.len()
}

/// Runs `definition` and returns the number of failures, zero or one.
///
/// A failure is reported to `logger` as `"failure in <name>: <assertion>"`.
/// A panicking test counts as a failure with [`Assertion::Panicked`].
///
/// # Examples
///
/// ```rust
/// use pointfree::harness::{assert_equals, run_test, test_def};
///
/// let mut log = Vec::new();
/// let failing = test_def("failingAssertion", || assert_equals(0, 1, None));
///
/// assert_eq!(run_test(|line| log.push(line), &failing), 1);
/// assert_eq!(log, vec!["failure in failingAssertion: expected: 0, actual: 1"]);
/// ```
pub fn run_test<L>(mut logger: L, definition: &TestDef) -> usize
where
    L: FnMut(String),
{
    tracing::debug!(test = %definition.name, "running test");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| definition.run())).unwrap_or_else(
        |payload| {
            Err(Assertion::Panicked {
                message: panic_message(payload.as_ref()),
            })
        },
    );

    match outcome {
        Ok(()) => 0,
        Err(assertion) => {
            tracing::warn!(test = %definition.name, error = %assertion, "test failed");
            logger(format!("failure in {}: {assertion}", definition.name));
            1
        }
    }
}

/// Runs every test in `suite`, in order, and returns the total number of
/// failures.
pub fn run_suite<L>(mut logger: L, suite: &[TestDef]) -> usize
where
    L: FnMut(String),
{
    let failures: usize = suite
        .iter()
        .map(|definition| run_test(&mut logger, definition))
        .sum();

    tracing::info!(total = suite.len(), failures, "suite finished");
    failures
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("non-string panic payload"))
}
