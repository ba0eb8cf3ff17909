//! The captured-panic value handed to `try_catch` error mappers.
//!
//! [`Outcome::try_catch`](crate::Outcome::try_catch) and
//! [`AsyncOutcome::try_catch`](crate::AsyncOutcome::try_catch) are the only
//! places where a panic crosses into the typed-outcome world. When one of
//! those boundaries captures an unwind, it wraps the payload in a
//! [`CaughtPanic`] and passes it to the caller's error mapper, which decides
//! what domain error the fault becomes.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let outcome: Outcome<i32, String> = Outcome::try_catch(
//!     || panic!("index out of range"),
//!     |caught| caught.message().unwrap_or("unknown fault").to_string(),
//! );
//!
//! assert_eq!(outcome, Outcome::error("index out of range".to_string()));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// A panic payload captured at a `try_catch` boundary.
///
/// Owns the boxed unwind payload exactly as `std::panic::catch_unwind`
/// delivered it. Most panics carry a `&str` or `String` message, which
/// [`message`](CaughtPanic::message) extracts; payloads of any other type are
/// still available through [`payload`](CaughtPanic::payload) and
/// [`into_payload`](CaughtPanic::into_payload) for downcasting.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let outcome: Outcome<(), String> = Outcome::try_catch(
///     || std::panic::panic_any(404_i32),
///     |caught| match caught.payload().downcast_ref::<i32>() {
///         Some(code) => format!("code {}", code),
///         None => caught.to_string(),
///     },
/// );
///
/// assert_eq!(outcome, Outcome::error("code 404".to_string()));
/// ```
pub struct CaughtPanic {
    payload: Box<dyn Any + Send>,
}

impl CaughtPanic {
    /// Wrap an unwind payload. Called only from the `try_catch` boundaries.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let caught = CaughtPanic { payload };
        #[cfg(feature = "tracing")]
        tracing::warn!("captured panic at try_catch boundary: {}", caught);
        caught
    }

    /// The panic message, if the payload was a `&str` or `String`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::try_catch(
    ///     || panic!("boom"),
    ///     |caught| caught.message().unwrap_or("unknown").to_string(),
    /// );
    /// assert_eq!(outcome, Outcome::error("boom".to_string()));
    /// ```
    pub fn message(&self) -> Option<&str> {
        if let Some(msg) = self.payload.downcast_ref::<&'static str>() {
            Some(msg)
        } else if let Some(msg) = self.payload.downcast_ref::<String>() {
            Some(msg)
        } else {
            None
        }
    }

    /// Borrow the raw unwind payload for downcasting.
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Consume and return the raw unwind payload.
    ///
    /// Useful for re-raising via `std::panic::resume_unwind` when the caller
    /// decides the fault should not be converted after all.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

// Manual Debug implementation since the payload is an opaque Any
impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "panic: {}", msg),
            None => write!(f, "panic with non-string payload"),
        }
    }
}

impl StdError for CaughtPanic {}
