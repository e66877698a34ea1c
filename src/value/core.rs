use crate::outcome::Outcome;
use crate::types::{OutcomeError, Unit};
use core::fmt::{Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plain-value outcome with an explicit uninitialized state.
///
/// Both payloads are restricted to `Copy` types, so a `ValueOutcome` is itself
/// `Copy` and never owns heap data. Unlike [`Outcome`], it has a third state:
/// the [`Default`] value is `Uninitialized`, which is neither failed nor
/// successful. Asking an uninitialized value for a payload is a contract
/// violation and reports [`OutcomeError::Uninitialized`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{OutcomeError, ValueOutcome};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Fault {
///     Overflow,
/// }
///
/// let empty = ValueOutcome::<Fault, u8>::default();
/// assert!(!empty.is_initialized());
/// assert_eq!(empty.deconstruct(), Err(OutcomeError::Uninitialized));
///
/// let failed = ValueOutcome::<Fault, u8>::fail(Fault::Overflow);
/// assert_eq!(failed.deconstruct(), Ok((true, Some(Fault::Overflow), None)));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ValueOutcome<F, S>
where
    F: Copy,
    S: Copy,
{
    Uninitialized,
    Failed(F),
    Successful(S),
}

impl<F: Copy, S: Copy> Default for ValueOutcome<F, S> {
    #[inline]
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl<F: Copy, S: Copy> ValueOutcome<F, S> {
    /// Creates a failed value outcome.
    #[inline]
    pub const fn fail(failure: F) -> Self {
        Self::Failed(failure)
    }

    /// Creates a successful value outcome.
    #[inline]
    pub const fn succeed(success: S) -> Self {
        Self::Successful(success)
    }

    /// Returns `true` unless this is the default, uninitialized value.
    #[must_use]
    #[inline]
    pub const fn is_initialized(&self) -> bool {
        !self.is_default()
    }

    /// Returns `true` for the default, uninitialized value.
    #[must_use]
    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    #[must_use]
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_failed_or_default(&self) -> bool {
        !self.is_successful()
    }

    #[must_use]
    #[inline]
    pub const fn is_successful_or_default(&self) -> bool {
        !self.is_failed()
    }

    /// Returns the failure payload, or `None` when not failed.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<F> {
        match *self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns the success payload, or `None` when not successful.
    #[must_use]
    #[inline]
    pub fn success(&self) -> Option<S> {
        match *self {
            Self::Successful(success) => Some(success),
            _ => None,
        }
    }

    /// Returns the failure payload.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::Uninitialized`] for the default value,
    /// [`OutcomeError::NotFailed`] for a successful one.
    #[inline]
    pub fn get_failure(&self) -> Result<F, OutcomeError> {
        match *self {
            Self::Uninitialized => Err(OutcomeError::Uninitialized),
            Self::Failed(failure) => Ok(failure),
            Self::Successful(_) => Err(OutcomeError::NotFailed),
        }
    }

    /// Returns the success payload.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::Uninitialized`] for the default value,
    /// [`OutcomeError::NotSuccessful`] for a failed one.
    #[inline]
    pub fn get_success(&self) -> Result<S, OutcomeError> {
        match *self {
            Self::Uninitialized => Err(OutcomeError::Uninitialized),
            Self::Failed(_) => Err(OutcomeError::NotSuccessful),
            Self::Successful(success) => Ok(success),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is uninitialized or successful.
    #[track_caller]
    #[inline]
    pub fn unwrap_failure(&self) -> F {
        match self.get_failure() {
            Ok(failure) => failure,
            Err(error) => panic!("{}", error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is uninitialized or failed.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::ValueOutcome;
    ///
    /// ValueOutcome::<u8, u8>::default().unwrap_success();
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap_success(&self) -> S {
        match self.get_success() {
            Ok(success) => success,
            Err(error) => panic!("{}", error),
        }
    }

    /// Splits the value into `(is_failed, failure, success)`.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::Uninitialized`] for the default value, which has no
    /// meaningful decomposition.
    #[inline]
    pub fn deconstruct(&self) -> Result<(bool, Option<F>, Option<S>), OutcomeError> {
        match *self {
            Self::Uninitialized => Err(OutcomeError::Uninitialized),
            Self::Failed(failure) => Ok((true, Some(failure), None)),
            Self::Successful(success) => Ok((false, None, Some(success))),
        }
    }

    /// Drops the success payload. An uninitialized value stays uninitialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Unit, ValueOutcome};
    ///
    /// let done = ValueOutcome::<u8, u32>::succeed(9).discard();
    /// assert_eq!(done, ValueOutcome::succeed(Unit));
    /// ```
    #[inline]
    pub fn discard(&self) -> ValueOutcome<F, Unit> {
        match *self {
            Self::Uninitialized => ValueOutcome::Uninitialized,
            Self::Failed(failure) => ValueOutcome::Failed(failure),
            Self::Successful(_) => ValueOutcome::Successful(Unit),
        }
    }
}

/// Renders the active payload, or nothing when uninitialized.
impl<F, S> Display for ValueOutcome<F, S>
where
    F: Copy + Display,
    S: Copy + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Uninitialized => Ok(()),
            Self::Failed(failure) => Display::fmt(failure, f),
            Self::Successful(success) => Display::fmt(success, f),
        }
    }
}

impl<F: Copy, S: Copy> From<Outcome<F, S>> for ValueOutcome<F, S> {
    #[inline]
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome {
            Outcome::Failed(failure) => Self::Failed(failure),
            Outcome::Successful(success) => Self::Successful(success),
        }
    }
}

/// Converts an initialized value into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError, ValueOutcome};
///
/// let value = ValueOutcome::<u8, u8>::succeed(1);
/// assert_eq!(Outcome::<u8, u8>::try_from(value), Ok(Outcome::succeed(1)));
///
/// let empty = ValueOutcome::<u8, u8>::default();
/// assert_eq!(Outcome::<u8, u8>::try_from(empty), Err(OutcomeError::Uninitialized));
/// ```
impl<F: Copy, S: Copy> TryFrom<ValueOutcome<F, S>> for Outcome<F, S> {
    type Error = OutcomeError;

    #[inline]
    fn try_from(value: ValueOutcome<F, S>) -> Result<Self, Self::Error> {
        match value {
            ValueOutcome::Uninitialized => Err(OutcomeError::Uninitialized),
            ValueOutcome::Failed(failure) => Ok(Outcome::Failed(failure)),
            ValueOutcome::Successful(success) => Ok(Outcome::Successful(success)),
        }
    }
}
