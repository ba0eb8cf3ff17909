//! # Outcome
//!
//! A two-variant outcome type with mirrored sync and async combinators.
//!
//! ## Philosophy
//!
//! An [`Outcome<S, E>`](Outcome) holds either a success payload or an error
//! payload, exactly one at a time, enforced by the enum encoding rather than
//! a runtime check. Fallible boundaries construct outcomes; everything
//! downstream composes them through a small algebra (map, chain, fold,
//! fallback, swap) without inspecting the representation; a terminal stage
//! folds the pipeline back into a plain value.
//!
//! [`AsyncOutcome<S, E>`](AsyncOutcome) applies the same operations, with the
//! same names and semantics, to a computation that has not resolved yet, so
//! async pipelines read identically to sync ones.
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_quantity(raw: &str) -> Outcome<u32, String> {
//!     Outcome::from_result(raw.parse::<u32>().map_err(|e| e.to_string()))
//! }
//!
//! let total = parse_quantity("3")
//!     .and_then(|n| {
//!         Outcome::from_condition(n > 0, move || n * 25, || "empty order".to_string())
//!     })
//!     .success_or(0);
//!
//! assert_eq!(total, 75);
//! ```
//!
//! ## Async Mirror
//!
//! ```rust
//! use outcome::{AsyncOutcome, Outcome};
//!
//! # tokio_test::block_on(async {
//! let resolved = AsyncOutcome::<i32, String>::success(10)
//!     .map_success(|v| v + 1)
//!     .resolve()
//!     .await;
//! assert_eq!(resolved, Outcome::success(11));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod caught;
pub mod future;
pub mod outcome;
pub mod testing;

// Re-exports
pub use caught::CaughtPanic;
pub use future::AsyncOutcome;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::caught::CaughtPanic;
    pub use crate::future::AsyncOutcome;
    pub use crate::outcome::Outcome;
}
