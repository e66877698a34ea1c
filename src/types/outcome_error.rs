use core::fmt::{Display, Formatter};

/// Contract violation raised when an outcome is used against its state.
///
/// This is never a domain failure: domain failures live inside
/// [`Outcome::Failed`](crate::Outcome::Failed). `OutcomeError` reports that the
/// caller asked for something the value cannot provide, such as the success
/// payload of a failed outcome or any payload of an uninitialized
/// [`ValueOutcome`](crate::ValueOutcome).
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError};
///
/// let outcome: Outcome<&str, i32> = Outcome::succeed(7);
/// assert_eq!(outcome.get_failure(), Err(OutcomeError::NotFailed));
/// assert_eq!(
///     OutcomeError::NotFailed.to_string(),
///     "outcome is not failed; no failure payload is available"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// The failure payload was requested from an outcome that is not failed.
    NotFailed,
    /// The success payload was requested from an outcome that is not successful.
    NotSuccessful,
    /// A payload was requested from an uninitialized value outcome.
    Uninitialized,
    /// A constructor received no payload for the named parameter.
    MissingPayload {
        /// Name of the parameter that was missing.
        parameter: &'static str,
    },
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFailed => f.write_str("outcome is not failed; no failure payload is available"),
            Self::NotSuccessful => {
                f.write_str("outcome is not successful; no success payload is available")
            },
            Self::Uninitialized => f.write_str("outcome is uninitialized"),
            Self::MissingPayload { parameter } => {
                write!(f, "value cannot be absent (parameter '{}')", parameter)
            },
        }
    }
}

impl core::error::Error for OutcomeError {}
