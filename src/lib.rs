//! # pointfree
//!
//! Combinators for point-free programming: partial application,
//! composition, projection and iteration over sparse sequences.
//!
//! ## Overview
//!
//! Every combinator in this crate follows one calling convention: it is a
//! [`Callable`](callable::Callable), invoked with a receiver and a positional
//! argument list, and it returns a value or another callable. Combinators
//! that wrap other callables forward the receiver they were invoked with,
//! except [`method`](binding::method), which fixes it.
//!
//! - **Application**: [`apply`](application::apply), [`argv`](application::argv),
//!   [`itself`](application::itself), [`value`](application::value),
//!   [`not`](application::not)
//! - **Binding**: [`bind1st`](binding::bind1st), [`bind2nd`](binding::bind2nd),
//!   [`bind`](binding::bind), [`method`](binding::method), [`push`](binding::push)
//! - **Composition**: [`compose`](composition::compose), [`compose!`],
//!   [`collect`](composition::collect), [`spread`](composition::spread),
//!   [`negate`](composition::negate)
//! - **Projection**: [`select`](projection::select), [`project`](projection::project),
//!   [`try_project`](projection::try_project), [`first`](projection::first),
//!   [`second`](projection::second), [`third`](projection::third),
//!   [`last`](projection::last), [`member`](projection::member),
//!   [`size`](projection::size)
//! - **Sequences**: [`Sequence`](sequence::Sequence), [`for_`](sequence::for_),
//!   [`map`](sequence::map), [`for_shared`](sequence::for_shared),
//!   [`list`](sequence::list)
//! - **Control**: [`while_`](control::while_)
//!
//! ## Feature Flags
//!
//! - `harness` (default): assertion and test-runner helpers
//! - `serde`: `Serialize`/`Deserialize` for [`Sequence`](sequence::Sequence)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! fn pow(base: i64, exponent: u32) -> i64 { base.pow(exponent) }
//!
//! let squares = map(bind2nd(pow, 2), &Sequence::from(vec![0, 1, 2, 3]));
//! assert_eq!(squares.into_present(), vec![0, 1, 4, 9]);
//!
//! let is_nonzero = negate(bind2nd(|lhs: i64, rhs: i64| lhs == rhs, 0));
//! assert!(is_nonzero.invoke((5,)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator and the traits needed to invoke them.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::application::*;
    pub use crate::binding::*;
    pub use crate::callable::*;
    pub use crate::composition::*;
    pub use crate::control::*;
    pub use crate::projection::*;
    pub use crate::sequence::*;

    #[cfg(feature = "harness")]
    pub use crate::harness::*;
}

pub mod application;
pub mod binding;
pub mod callable;
pub mod composition;
pub mod control;
pub mod projection;
pub mod sequence;

#[cfg(feature = "harness")]
pub mod harness;
