use crate::types::OutcomeError;
use core::fmt::{Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a fallible operation: either a failure payload or a success
/// payload, never both.
///
/// `Outcome<F, S>` keeps the failure type first, matching the rest of the crate.
/// Only the active branch is stored, so equality, ordering and hashing are
/// derived from the state plus the active payload and never look at the other
/// branch.
///
/// # Type Parameters
///
/// * `F` - The failure payload type
/// * `S` - The success payload type
///
/// # Variants
///
/// * `Failed(F)` - The operation failed with a domain failure
/// * `Successful(S)` - The operation succeeded
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<&str, i32> = Outcome::succeed(41);
/// let next = parsed.map(|x| x + 1);
/// assert_eq!(next, Outcome::succeed(42));
///
/// let failed: Outcome<&str, i32> = Outcome::fail("boom");
/// assert_eq!(failed.map(|x| x + 1), Outcome::fail("boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<F, S> {
    Failed(F),
    Successful(S),
}

impl<F, S> Outcome<F, S> {
    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::fail("missing");
    /// assert!(outcome.is_failed());
    /// ```
    #[inline]
    pub const fn fail(failure: F) -> Self {
        Self::Failed(failure)
    }

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::succeed(42);
    /// assert!(outcome.is_successful());
    /// ```
    #[inline]
    pub const fn succeed(success: S) -> Self {
        Self::Successful(success)
    }

    /// Returns `true` if the outcome holds a failure.
    #[must_use]
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` if the outcome holds a success.
    #[must_use]
    #[inline]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful(_))
    }

    /// Returns the failure payload, or `None` when the outcome is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::fail("boom").failure(), Some(&"boom"));
    /// assert_eq!(Outcome::<&str, i32>::succeed(1).failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn failure(&self) -> Option<&F> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Successful(_) => None,
        }
    }

    /// Returns the success payload, or `None` when the outcome is failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::succeed(1).success(), Some(&1));
    /// assert_eq!(Outcome::<&str, i32>::fail("boom").success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn success(&self) -> Option<&S> {
        match self {
            Self::Failed(_) => None,
            Self::Successful(success) => Some(success),
        }
    }

    /// Consumes the outcome, returning the failure payload if there is one.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Successful(_) => None,
        }
    }

    /// Consumes the outcome, returning the success payload if there is one.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Failed(_) => None,
            Self::Successful(success) => Some(success),
        }
    }

    /// Returns the failure payload or [`OutcomeError::NotFailed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// let outcome = Outcome::<&str, i32>::succeed(3);
    /// assert_eq!(outcome.get_failure(), Err(OutcomeError::NotFailed));
    /// ```
    #[inline]
    pub const fn get_failure(&self) -> Result<&F, OutcomeError> {
        match self {
            Self::Failed(failure) => Ok(failure),
            Self::Successful(_) => Err(OutcomeError::NotFailed),
        }
    }

    /// Returns the success payload or [`OutcomeError::NotSuccessful`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// let outcome = Outcome::<&str, i32>::fail("boom");
    /// assert_eq!(outcome.get_success(), Err(OutcomeError::NotSuccessful));
    /// ```
    #[inline]
    pub const fn get_success(&self) -> Result<&S, OutcomeError> {
        match self {
            Self::Failed(_) => Err(OutcomeError::NotSuccessful),
            Self::Successful(success) => Ok(success),
        }
    }

    /// Consumes the outcome and returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::NotFailed`] if the outcome is successful.
    #[track_caller]
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Failed(failure) => failure,
            Self::Successful(_) => panic!("{}", OutcomeError::NotFailed),
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::NotSuccessful`] if the outcome is failed.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<&str, i32>::fail("boom").unwrap_success();
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Failed(_) => panic!("{}", OutcomeError::NotSuccessful),
            Self::Successful(success) => success,
        }
    }

    /// Borrows both payloads, producing an `Outcome<&F, &S>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&F, &S> {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => Outcome::Successful(success),
        }
    }

    /// Mutably borrows both payloads, producing an `Outcome<&mut F, &mut S>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut F, &mut S> {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => Outcome::Successful(success),
        }
    }

    /// Splits the outcome into `(is_failed, failure, success)`.
    ///
    /// Exactly one of the two payload slots is `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let (is_failed, failure, success) = Outcome::<&str, i32>::fail("boom").deconstruct();
    /// assert!(is_failed);
    /// assert_eq!(failure, Some("boom"));
    /// assert_eq!(success, None);
    /// ```
    #[must_use]
    #[inline]
    pub fn deconstruct(self) -> (bool, Option<F>, Option<S>) {
        match self {
            Self::Failed(failure) => (true, Some(failure), None),
            Self::Successful(success) => (false, None, Some(success)),
        }
    }
}

/// Renders the active payload.
///
/// The alternate form (`{:#}`) prefixes the payload with its state.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<&str, i32> = Outcome::fail("boom");
/// assert_eq!(failed.to_string(), "boom");
/// assert_eq!(format!("{:#}", failed), "failure: boom");
///
/// let succeeded: Outcome<&str, i32> = Outcome::succeed(42);
/// assert_eq!(format!("{:#}", succeeded), "success: 42");
/// ```
impl<F: Display, S: Display> Display for Outcome<F, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match (self, f.alternate()) {
            (Self::Failed(failure), false) => Display::fmt(failure, f),
            (Self::Successful(success), false) => Display::fmt(success, f),
            (Self::Failed(failure), true) => write!(f, "failure: {}", failure),
            (Self::Successful(success), true) => write!(f, "success: {}", success),
        }
    }
}
