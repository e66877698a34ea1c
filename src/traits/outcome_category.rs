use crate::outcome::Outcome;
use crate::traits::WithFailure;
use crate::types::Unit;

/// Lifts plain values and failures into a failure-carrying container family.
///
/// The implementor is the "unit" member of the family (`Outcome<F, Unit>`,
/// `Result<(), F>`); the produced containers are picked through
/// `Functor<S>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OutcomeCategory;
/// use outcome_rail::{Outcome, Unit};
///
/// let ok: Outcome<&str, i32> = <Outcome<&str, Unit>>::lift(10);
/// assert_eq!(ok, Outcome::succeed(10));
///
/// let err: Result<i32, &str> = <Result<(), &str>>::handle_failure("boom");
/// assert_eq!(err, Err("boom"));
/// ```
pub trait OutcomeCategory<F> {
    type Functor<S>: WithFailure<F>;

    fn lift<S>(value: S) -> Self::Functor<S>;

    fn handle_failure<S>(failure: F) -> Self::Functor<S>;
}

impl<F> OutcomeCategory<F> for Outcome<F, Unit> {
    type Functor<S> = Outcome<F, S>;

    #[inline]
    fn lift<S>(value: S) -> Outcome<F, S> {
        Outcome::Successful(value)
    }

    #[inline]
    fn handle_failure<S>(failure: F) -> Outcome<F, S> {
        Outcome::Failed(failure)
    }
}

impl<F> OutcomeCategory<F> for Result<(), F> {
    type Functor<S> = Result<S, F>;

    #[inline]
    fn lift<S>(value: S) -> Result<S, F> {
        Ok(value)
    }

    #[inline]
    fn handle_failure<S>(failure: F) -> Result<S, F> {
        Err(failure)
    }
}
