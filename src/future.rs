//! Async adapter for composing pending outcomes.
//!
//! This module provides [`AsyncOutcome`], a not-yet-resolved
//! [`Outcome`](crate::Outcome) that exposes the same combinators as the
//! synchronous type, with the same names and the same semantics. Each
//! operation awaits the operand and then applies the synchronous counterpart,
//! so a pipeline reads identically whether the boundary that produced it was
//! sync or async, and callers never unwrap a pending computation just to
//! apply the next stage.
//!
//! Chained stages run strictly in sequence on the caller's task: a stage's
//! work begins only after the previous stage has resolved, and a
//! short-circuited `and_then` never constructs its transform's future at all.
//!
//! # Examples
//!
//! ## Mirrored combinators
//!
//! ```rust
//! use outcome::{AsyncOutcome, Outcome};
//!
//! # tokio_test::block_on(async {
//! let resolved = AsyncOutcome::<i32, String>::success(10)
//!     .map_success(|v| v + 1)
//!     .resolve()
//!     .await;
//!
//! assert_eq!(resolved, Outcome::success(11));
//! # });
//! ```
//!
//! ## Lifting an async boundary
//!
//! ```rust
//! use outcome::{AsyncOutcome, Outcome};
//!
//! async fn fetch_plan(user: u32) -> Outcome<String, String> {
//!     if user == 0 {
//!         Outcome::error("unknown user".to_string())
//!     } else {
//!         Outcome::success("pro".to_string())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let plan = AsyncOutcome::new(fetch_plan(7))
//!     .map_success(|p| p.to_uppercase())
//!     .success_or_else(|| "FREE".to_string())
//!     .await;
//!
//! assert_eq!(plan, "PRO");
//! # });
//! ```

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::caught::CaughtPanic;
use crate::outcome::Outcome;

/// A single-resolution asynchronous computation yielding an [`Outcome`].
///
/// `AsyncOutcome<S, E>` wraps a boxed future and carries no state of its own;
/// its job is purely to sequence operations on the eventual value. Every
/// combinator consumes `self` and returns a new pending outcome, mirroring
/// the synchronous API one-for-one.
///
/// # Type Parameters
///
/// * `S` - The type of the success payload
/// * `E` - The type of the error payload
///
/// # Examples
///
/// ```rust
/// use outcome::{AsyncOutcome, Outcome};
///
/// # tokio_test::block_on(async {
/// let resolved = AsyncOutcome::<i32, String>::success(20)
///     .and_then(|v| AsyncOutcome::success(v + 1))
///     .map_success(|v| v * 2)
///     .resolve()
///     .await;
///
/// assert_eq!(resolved, Outcome::success(42));
/// # });
/// ```
pub struct AsyncOutcome<S, E> {
    future: BoxFuture<'static, Outcome<S, E>>,
}

// Manual Debug implementation since the boxed future is opaque
impl<S, E> std::fmt::Debug for AsyncOutcome<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncOutcome")
            .field("future", &"<future>")
            .finish()
    }
}

impl<S, E> AsyncOutcome<S, E>
where
    S: Send + 'static,
    E: Send + 'static,
{
    // ========== Constructors ==========

    /// Lift a future that resolves to an [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::new(async { Outcome::<_, String>::success(42) });
    /// assert_eq!(pending.resolve().await, Outcome::success(42));
    /// # });
    /// ```
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<S, E>> + Send + 'static,
    {
        AsyncOutcome {
            future: future.boxed(),
        }
    }

    /// Create an already-resolved success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<_, String>::success(42);
    /// assert_eq!(pending.resolve().await, Outcome::success(42));
    /// # });
    /// ```
    pub fn success(value: S) -> Self {
        AsyncOutcome::from_outcome(Outcome::Success(value))
    }

    /// Create an already-resolved error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<i32, _>::error("nope");
    /// assert_eq!(pending.resolve().await, Outcome::error("nope"));
    /// # });
    /// ```
    pub fn error(error: E) -> Self {
        AsyncOutcome::from_outcome(Outcome::Error(error))
    }

    /// Lift an already-computed [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = Outcome::<_, String>::success(42);
    /// assert_eq!(AsyncOutcome::from_outcome(outcome.clone()).resolve().await, outcome);
    /// # });
    /// ```
    pub fn from_outcome(outcome: Outcome<S, E>) -> Self {
        AsyncOutcome::new(async move { outcome })
    }

    /// Build a pending outcome by awaiting exactly one of two async thunks.
    ///
    /// Mirrors [`Outcome::from_condition`] over asynchronous branches: only
    /// the thunk matching `condition` is called and awaited; the other is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::from_condition(
    ///     false,
    ///     || async { 1 },
    ///     || async { "no" },
    /// );
    /// assert_eq!(pending.resolve().await, Outcome::error("no"));
    /// # });
    /// ```
    pub fn from_condition<FS, FE, FutS, FutE>(condition: bool, success: FS, error: FE) -> Self
    where
        FS: FnOnce() -> FutS + Send + 'static,
        FE: FnOnce() -> FutE + Send + 'static,
        FutS: Future<Output = S> + Send + 'static,
        FutE: Future<Output = E> + Send + 'static,
    {
        AsyncOutcome::new(async move {
            if condition {
                Outcome::Success(success().await)
            } else {
                Outcome::Error(error().await)
            }
        })
    }

    /// Run an async action, converting any panic it raises into a typed error.
    ///
    /// Two fault routes are covered by the same boundary: a panic raised while
    /// *calling* `action` (before its future exists), and a panic raised while
    /// *polling* the returned future. Both are captured as a [`CaughtPanic`]
    /// and converted through `on_error`; neither escapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending: AsyncOutcome<i32, String> = AsyncOutcome::try_catch(
    ///     || async { "10".parse::<i32>().unwrap() },
    ///     |caught| format!("parse failed: {}", caught),
    /// );
    /// assert_eq!(pending.resolve().await, Outcome::success(10));
    /// # });
    /// ```
    pub fn try_catch<F, Fut, H>(action: F, on_error: H) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = S> + Send + 'static,
        H: FnOnce(CaughtPanic) -> E + Send + 'static,
    {
        AsyncOutcome::new(async move {
            let future = match panic::catch_unwind(AssertUnwindSafe(action)) {
                Ok(future) => future,
                Err(payload) => {
                    return Outcome::Error(on_error(CaughtPanic::from_payload(payload)));
                }
            };
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Outcome::Success(value),
                Err(payload) => Outcome::Error(on_error(CaughtPanic::from_payload(payload))),
            }
        })
    }

    // ========== Transformations ==========

    /// Transform the eventual success payload, passing errors through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<i32, String>::success(10).map_success(|v| v + 1);
    /// assert_eq!(pending.resolve().await, Outcome::success(11));
    /// # });
    /// ```
    pub fn map_success<T, F>(self, transform: F) -> AsyncOutcome<T, E>
    where
        T: Send + 'static,
        F: FnOnce(S) -> T + Send + 'static,
    {
        AsyncOutcome::new(async move { self.future.await.map_success(transform) })
    }

    /// Transform the eventual error payload, passing successes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<i32, &str>::error("nope").map_error(|e| e.len());
    /// assert_eq!(pending.resolve().await, Outcome::error(4));
    /// # });
    /// ```
    pub fn map_error<F2, F>(self, transform: F) -> AsyncOutcome<S, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> F2 + Send + 'static,
    {
        AsyncOutcome::new(async move { self.future.await.map_error(transform) })
    }

    /// Chain an async fallible computation on the eventual success payload.
    ///
    /// If the operand resolves to a `Success`, the transform's pending outcome
    /// is awaited and returned. If it resolves to an `Error`, the chain
    /// short-circuits: the error is returned immediately and `transform` is
    /// never invoked, so its work is never started, not merely not awaited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<i32, String>::success(20)
    ///     .and_then(|v| AsyncOutcome::success(v + 2));
    /// assert_eq!(pending.resolve().await, Outcome::success(22));
    ///
    /// let pending = AsyncOutcome::<i32, String>::error("upstream".to_string())
    ///     .and_then(|v| AsyncOutcome::success(v + 2));
    /// assert_eq!(pending.resolve().await, Outcome::error("upstream".to_string()));
    /// # });
    /// ```
    pub fn and_then<T, F>(self, transform: F) -> AsyncOutcome<T, E>
    where
        T: Send + 'static,
        F: FnOnce(S) -> AsyncOutcome<T, E> + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Success(value) => transform(value).future.await,
                Outcome::Error(error) => Outcome::Error(error),
            }
        })
    }

    /// Swap the eventual variants, preserving the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<i32, String>::success(42).swap();
    /// assert_eq!(pending.resolve().await, Outcome::error(42));
    /// # });
    /// ```
    pub fn swap(self) -> AsyncOutcome<E, S> {
        AsyncOutcome::new(async move { self.future.await.swap() })
    }

    // ========== Consumption ==========

    /// Await resolution and dispatch to whichever callback matches.
    ///
    /// Mirrors [`Outcome::when`]: a missing matching callback yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::AsyncOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let result = AsyncOutcome::<i32, String>::success(21)
    ///     .when(Some(|v: i32| v * 2), None::<fn(String) -> i32>)
    ///     .await;
    /// assert_eq!(result, Some(42));
    /// # });
    /// ```
    pub async fn when<T, F, G>(self, on_success: Option<F>, on_error: Option<G>) -> Option<T>
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        self.future.await.when(on_success, on_error)
    }

    /// Await resolution and fold both variants into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::AsyncOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let text = AsyncOutcome::<i32, String>::success(42)
    ///     .fold(|v| v.to_string(), |e| e)
    ///     .await;
    /// assert_eq!(text, "42");
    /// # });
    /// ```
    pub async fn fold<T, F, G>(self, on_success: F, on_error: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        self.future.await.fold(on_success, on_error)
    }

    // ========== Fallbacks ==========

    /// Await resolution and return the success payload or an eager default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::AsyncOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let value = AsyncOutcome::<i32, String>::error("nope".to_string())
    ///     .success_or(0)
    ///     .await;
    /// assert_eq!(value, 0);
    /// # });
    /// ```
    pub async fn success_or(self, default: S) -> S {
        self.future.await.success_or(default)
    }

    /// Await resolution and return the success payload or a lazy fallback.
    ///
    /// `fallback` is only invoked when the operand resolves to an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::AsyncOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let value = AsyncOutcome::<i32, String>::success(42)
    ///     .success_or_else(|| 0)
    ///     .await;
    /// assert_eq!(value, 42);
    /// # });
    /// ```
    pub async fn success_or_else<F>(self, fallback: F) -> S
    where
        F: FnOnce() -> S,
    {
        self.future.await.success_or_else(fallback)
    }

    /// Await the underlying computation and return its [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let pending = AsyncOutcome::<_, String>::success(42);
    /// assert_eq!(pending.resolve().await, Outcome::success(42));
    /// # });
    /// ```
    pub async fn resolve(self) -> Outcome<S, E> {
        self.future.await
    }
}

impl<S, E> From<Outcome<S, E>> for AsyncOutcome<S, E>
where
    S: Send + 'static,
    E: Send + 'static,
{
    fn from(outcome: Outcome<S, E>) -> Self {
        AsyncOutcome::from_outcome(outcome)
    }
}
