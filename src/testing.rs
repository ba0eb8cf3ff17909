//! Testing utilities for code that produces outcomes.
//!
//! This module provides assertion macros for pattern-matching outcomes in
//! tests, and (behind the `proptest` feature) an `Arbitrary` implementation
//! so outcomes can be generated in property-based tests.
//!
//! # Examples
//!
//! ## Assertion macros
//!
//! ```rust
//! use outcome::{Outcome, assert_success, assert_error};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let bad = Outcome::<i32, _>::error("nope".to_string());
//! assert_error!(bad);
//! ```
//!
//! ## Verifying the payload
//!
//! ```rust
//! use outcome::{Outcome, assert_success};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok, |value| assert_eq!(value, 42));
//! ```

/// Assert that an outcome is the success variant.
///
/// The one-argument form only checks the variant. The two-argument form also
/// hands the success payload to a verification callback. Either form panics
/// with a message embedding the unexpected error payload if the outcome is an
/// `Error`.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, assert_success};
///
/// let o = Outcome::<_, String>::success(42);
/// assert_success!(o, |value| assert_eq!(value, 42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Error(error) => {
                panic!("Expected Success, got Error: {:?}", error);
            }
        }
    };
    ($outcome:expr, $verify:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => {
                $verify(value);
            }
            $crate::Outcome::Error(error) => {
                panic!("Expected Success, got Error: {:?}", error);
            }
        }
    };
}

/// Assert that an outcome is the error variant.
///
/// The one-argument form only checks the variant. The two-argument form also
/// hands the error payload to a verification callback. Either form panics
/// with a message embedding the unexpected success payload if the outcome is
/// a `Success`.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, assert_error};
///
/// let o = Outcome::<i32, _>::error("nope");
/// assert_error!(o, |error| assert_eq!(error, "nope"));
/// ```
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Error(_) => {}
            $crate::Outcome::Success(value) => {
                panic!("Expected Error, got Success: {:?}", value);
            }
        }
    };
    ($outcome:expr, $verify:expr) => {
        match $outcome {
            $crate::Outcome::Error(error) => {
                $verify(error);
            }
            $crate::Outcome::Success(value) => {
                panic!("Expected Error, got Success: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Outcome;

#[cfg(feature = "proptest")]
impl<S, E> Arbitrary for Outcome<S, E>
where
    S: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, e_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::error),
        ]
        .boxed()
    }
}
