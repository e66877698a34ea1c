//! Conversion helpers between [`Outcome`] and the standard `Result`.
//!
//! These adapters make it straightforward to adopt `Outcome` incrementally:
//! wrap a `Result` coming from existing code, compose with outcome
//! combinators, and hand a plain `Result` back to callers that expect one so
//! `?` keeps working.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{outcome_to_result, result_to_outcome, Outcome};
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert_eq!(outcome, Outcome::succeed(42));
//!
//! let result = outcome_to_result(Outcome::<&str, i32>::fail("boom"));
//! assert_eq!(result, Err("boom"));
//! ```
use crate::outcome::core::Outcome;

impl<F, S> Outcome<F, S> {
    /// Converts into a `Result`, mapping `Successful` to `Ok` and `Failed` to `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse(input: &str) -> Result<i32, String> {
    ///     let value = Outcome::from(input.parse::<i32>())
    ///         .map_failure(|e| e.to_string())
    ///         .into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(parse("21"), Ok(42));
    /// assert!(parse("x").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Failed(failure) => Err(failure),
            Self::Successful(success) => Ok(success),
        }
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(success) => Self::Successful(success),
            Err(failure) => Self::Failed(failure),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<F, S>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` into an [`Outcome`].
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Successful(value)` if result is `Ok`
/// * `Outcome::Failed(error)` if result is `Err`
#[inline]
pub fn result_to_outcome<F, S>(result: Result<S, F>) -> Outcome<F, S> {
    result.into()
}

/// Converts an [`Outcome`] into a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome is successful
/// * `Err(failure)` if the outcome is failed
#[inline]
pub fn outcome_to_result<F, S>(outcome: Outcome<F, S>) -> Result<S, F> {
    outcome.into_result()
}
