//! Extension trait bridging the standard `Result` into [`Outcome`] pipelines.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::Outcome;
//!
//! let port = "8080".parse::<u16>().catch_into(|e| e.to_string());
//! assert_eq!(port, Outcome::succeed(8080));
//! ```

use crate::outcome::Outcome;

/// Extension methods turning a `Result<S, E>` into an [`Outcome`].
pub trait ResultExt<S, E> {
    /// Converts into an outcome with the error as the failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    /// use outcome_rail::Outcome;
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// assert_eq!(result.into_outcome(), Outcome::fail("failed"));
    /// ```
    fn into_outcome(self) -> Outcome<E, S>;

    /// Converts into an outcome, mapping the error into the failure type `F`.
    ///
    /// `create_failure` is only called when the result is an `Err`.
    fn catch_into<F, C>(self, create_failure: C) -> Outcome<F, S>
    where
        C: FnOnce(E) -> F;
}

impl<S, E> ResultExt<S, E> for Result<S, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<E, S> {
        self.into()
    }

    #[inline]
    fn catch_into<F, C>(self, create_failure: C) -> Outcome<F, S>
    where
        C: FnOnce(E) -> F,
    {
        crate::factory::catch(|| self, create_failure)
    }
}
