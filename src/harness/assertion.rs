//! Assertion failures.

use std::fmt::Debug;

/// A failed assertion.
///
/// # Examples
///
/// ```rust
/// use pointfree::harness::Assertion;
///
/// let failure = Assertion::Equality {
///     expected: String::from("omg"),
///     actual: String::from("wtf"),
///     message: Some(String::from("rofl")),
/// };
/// assert_eq!(failure.to_string(), "rofl\nexpected: omg, actual: wtf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Assertion {
    /// An explicit [`fail`].
    #[error("{message}")]
    Unconditional {
        /// Why the test failed.
        message: String,
    },

    /// Two values differed in [`assert_equals`].
    #[error("{}", describe_mismatch(.message.as_deref(), .expected, .actual))]
    Equality {
        /// The expected value, rendered with `Debug`.
        expected: String,
        /// The actual value, rendered with `Debug`.
        actual: String,
        /// Optional context supplied by the test.
        message: Option<String>,
    },

    /// The test panicked instead of returning.
    #[error("panicked: {message}")]
    Panicked {
        /// The panic payload, if it was a string.
        message: String,
    },
}

fn describe_mismatch(message: Option<&str>, expected: &str, actual: &str) -> String {
    match message {
        Some(message) => format!("{message}\nexpected: {expected}, actual: {actual}"),
        None => format!("expected: {expected}, actual: {actual}"),
    }
}

/// The outcome of a single test body.
pub type TestResult = Result<(), Assertion>;

/// Fails with [`Assertion::Equality`] unless `expected == actual`.
///
/// # Errors
///
/// Returns [`Assertion::Equality`] carrying both values and `message` when
/// they differ.
///
/// # Examples
///
/// ```rust
/// use pointfree::harness::assert_equals;
///
/// assert!(assert_equals(4, 2 + 2, None).is_ok());
///
/// let failure = assert_equals(1, 0, Some("omg wtf")).unwrap_err();
/// assert_eq!(failure.to_string(), "omg wtf\nexpected: 1, actual: 0");
/// ```
pub fn assert_equals<T>(expected: T, actual: T, message: Option<&str>) -> TestResult
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Assertion::Equality {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            message: message.map(str::to_owned),
        })
    }
}

/// Fails unconditionally with [`Assertion::Unconditional`].
///
/// # Errors
///
/// Always.
pub fn fail<T>(message: impl Into<String>) -> Result<T, Assertion> {
    Err(Assertion::Unconditional {
        message: message.into(),
    })
}
