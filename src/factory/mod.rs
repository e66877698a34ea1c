//! Free functions constructing [`Outcome`] values.
//!
//! Each function is a thin wrapper over [`Outcome::fail`] and
//! [`Outcome::succeed`], so they compose well as function arguments
//! (`iter.map(factory::succeed)`) and keep construction sites short.
//!
//! The `ensure` family covers every pairing of an eager or lazy success with an
//! eager or lazy failure: [`ensure`], [`ensure_lazy_failure`],
//! [`ensure_lazy_success`] and [`ensure_with`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::factory;
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<String, i32> =
//!     factory::catch(|| "12".parse::<i32>(), |e| e.to_string());
//! assert_eq!(parsed, Outcome::succeed(12));
//!
//! let checked = factory::ensure(3, |n: &i32| *n < 5, "below minimum");
//! assert_eq!(checked, Outcome::fail("below minimum"));
//! ```
use crate::outcome::Outcome;
use crate::types::OutcomeError;

/// Creates a failed outcome.
#[inline]
pub const fn fail<F, S>(failure: F) -> Outcome<F, S> {
    Outcome::Failed(failure)
}

/// Creates a failed outcome from a failure producer.
#[inline]
pub fn fail_with<F, S, C>(create_failure: C) -> Outcome<F, S>
where
    C: FnOnce() -> F,
{
    Outcome::Failed(create_failure())
}

/// Creates a successful outcome.
#[inline]
pub const fn succeed<F, S>(success: S) -> Outcome<F, S> {
    Outcome::Successful(success)
}

/// Creates a successful outcome from a success producer.
#[inline]
pub fn succeed_with<F, S, C>(create_success: C) -> Outcome<F, S>
where
    C: FnOnce() -> S,
{
    Outcome::Successful(create_success())
}

/// Creates a failed outcome, rejecting an absent failure payload.
///
/// # Errors
///
/// [`OutcomeError::MissingPayload`] naming the `failure` parameter when
/// `failure` is `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{factory, Outcome, OutcomeError};
///
/// let missing = factory::try_fail::<&str, i32>(None);
/// assert_eq!(missing, Err(OutcomeError::MissingPayload { parameter: "failure" }));
///
/// let present = factory::try_fail::<&str, i32>(Some("boom"));
/// assert_eq!(present, Ok(Outcome::fail("boom")));
/// ```
#[inline]
pub fn try_fail<F, S>(failure: Option<F>) -> Result<Outcome<F, S>, OutcomeError> {
    failure
        .map(Outcome::Failed)
        .ok_or(OutcomeError::MissingPayload { parameter: "failure" })
}

/// Creates a successful outcome, rejecting an absent success payload.
///
/// # Errors
///
/// [`OutcomeError::MissingPayload`] naming the `success` parameter when
/// `success` is `None`.
#[inline]
pub fn try_succeed<F, S>(success: Option<S>) -> Result<Outcome<F, S>, OutcomeError> {
    success
        .map(Outcome::Successful)
        .ok_or(OutcomeError::MissingPayload { parameter: "success" })
}

/// Runs a fallible producer, converting an error of the declared kind `X`
/// into a failure.
///
/// Panics raised by `create_success` are not intercepted.
#[inline]
pub fn catch<F, S, X, M, C>(create_success: M, create_failure: C) -> Outcome<F, S>
where
    M: FnOnce() -> Result<S, X>,
    C: FnOnce(X) -> F,
{
    match create_success() {
        Ok(success) => Outcome::Successful(success),
        Err(error) => Outcome::Failed(create_failure(error)),
    }
}

/// Runs a producer, converting a panic whose payload is of type `P` into a
/// failure. Any other panic keeps unwinding.
///
/// # Examples
///
/// ```
/// use outcome_rail::{factory, Outcome};
///
/// let peer = String::from("db-1");
/// let outcome: Outcome<String, i32> = factory::catch_panic::<String, _, _, _, _>(
///     || panic!("lost {}", peer),
///     |msg| msg,
/// );
/// assert_eq!(outcome, Outcome::fail("lost db-1".to_string()));
/// ```
#[cfg(feature = "std")]
pub fn catch_panic<P, F, S, M, C>(create_success: M, create_failure: C) -> Outcome<F, S>
where
    P: 'static,
    M: FnOnce() -> S,
    C: FnOnce(P) -> F,
{
    match crate::unwind::intercept::<P, _, _>(create_success) {
        Ok(success) => Outcome::Successful(success),
        Err(payload) => Outcome::Failed(create_failure(payload)),
    }
}

/// Wraps `success`, failing with `failure` when `is_failure` holds for it.
#[inline]
pub fn ensure<F, S, P>(success: S, is_failure: P, failure: F) -> Outcome<F, S>
where
    P: FnOnce(&S) -> bool,
{
    Outcome::Successful(success).ensure(is_failure, failure)
}

/// Wraps `success`, deriving the failure from it only when `is_failure` holds.
///
/// # Examples
///
/// ```
/// use outcome_rail::{factory, Outcome};
///
/// let checked: Outcome<String, u16> =
///     factory::ensure_lazy_failure(80, |port: &u16| *port < 1024, |port: &u16| format!("port {} is privileged", port));
/// assert_eq!(checked, Outcome::fail("port 80 is privileged".to_string()));
/// ```
#[inline]
pub fn ensure_lazy_failure<F, S, P, C>(success: S, is_failure: P, create_failure: C) -> Outcome<F, S>
where
    P: FnOnce(&S) -> bool,
    C: FnOnce(&S) -> F,
{
    Outcome::Successful(success).ensure_with(is_failure, create_failure)
}

/// Produces a success and checks it, failing with `failure` when `is_failure`
/// holds.
#[inline]
pub fn ensure_lazy_success<F, S, M, P>(create_success: M, is_failure: P, failure: F) -> Outcome<F, S>
where
    M: FnOnce() -> S,
    P: FnOnce(&S) -> bool,
{
    Outcome::Successful(create_success()).ensure(is_failure, failure)
}

/// Produces a success and checks it, deriving the failure only when
/// `is_failure` holds.
#[inline]
pub fn ensure_with<F, S, M, P, C>(create_success: M, is_failure: P, create_failure: C) -> Outcome<F, S>
where
    M: FnOnce() -> S,
    P: FnOnce(&S) -> bool,
    C: FnOnce(&S) -> F,
{
    Outcome::Successful(create_success()).ensure_with(is_failure, create_failure)
}
