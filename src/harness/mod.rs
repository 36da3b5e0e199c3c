//! A small assertion and test-runner harness.
//!
//! The combinators never depend on this module. It exists to register named
//! test bodies, run them, and report failures one line per failing test, in
//! the same shape whether the body failed an assertion or panicked.
//!
//! # Overview
//!
//! - [`Assertion`]: the failure taxonomy (unconditional, equality, panic)
//! - [`assert_equals`], [`fail`]: assertions returning [`TestResult`]
//! - [`test_def`], [`def_test`]: name and register test bodies
//! - [`run_test`], [`run_suite`]: execute and count failures
//!
//! Runs are traced with [`tracing`]: a `debug` event when a test starts, a
//! `warn` event per failure and an `info` summary per suite.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::harness::{assert_equals, def_test, run_suite};
//!
//! let mut suite = Vec::new();
//! def_test("addition", &mut suite, || assert_equals(4, 2 + 2, None));
//! def_test("subtraction", &mut suite, || assert_equals(1, 2 - 2, Some("off by one")));
//!
//! let mut log = Vec::new();
//! let failures = run_suite(|line| log.push(line), &suite);
//!
//! assert_eq!(failures, 1);
//! assert_eq!(log[0], "failure in subtraction: off by one\nexpected: 1, actual: 0");
//! ```

mod assertion;
mod runner;

pub use assertion::{Assertion, TestResult, assert_equals, fail};
pub use runner::{TestDef, def_test, run_suite, run_test, test_def};
