use crate::outcome::Outcome;
use crate::traits::with_failure::WithFailure;

/// Recovery and bidirectional mapping over failure-carrying containers.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::FailureOps;
/// use outcome_rail::Outcome;
///
/// let recovered = Outcome::<&str, i32>::fail("missing").recover(|_| Outcome::succeed(0));
/// assert_eq!(recovered, Outcome::succeed(0));
///
/// let both = Err::<i32, &str>("bad").bimap(|x| x * 2, |e| e.to_uppercase());
/// assert_eq!(both, Outcome::fail("BAD".to_string()));
/// ```
pub trait FailureOps<F>: WithFailure<F> {
    /// Replaces a failure with the container built by `recovery`.
    fn recover<R>(self, recovery: R) -> Self
    where
        R: FnOnce(F) -> Self,
        Self: Sized;

    /// Maps whichever payload is active into a new [`Outcome`].
    fn bimap<G, B, SuccessF, FailureF>(
        self,
        success_f: SuccessF,
        failure_f: FailureF,
    ) -> Outcome<G, B>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        FailureF: FnOnce(F) -> G,
        Self: Sized;
}

impl<F, S> FailureOps<F> for Outcome<F, S> {
    #[inline]
    fn recover<R>(self, recovery: R) -> Self
    where
        R: FnOnce(F) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap<G, B, SuccessF, FailureF>(
        self,
        success_f: SuccessF,
        failure_f: FailureF,
    ) -> Outcome<G, B>
    where
        SuccessF: FnOnce(S) -> B,
        FailureF: FnOnce(F) -> G,
    {
        self.reduce(
            |failure| Outcome::Failed(failure_f(failure)),
            |success| Outcome::Successful(success_f(success)),
        )
    }
}

impl<F, S> FailureOps<F> for Result<S, F> {
    #[inline]
    fn recover<R>(self, recovery: R) -> Self
    where
        R: FnOnce(F) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap<G, B, SuccessF, FailureF>(
        self,
        success_f: SuccessF,
        failure_f: FailureF,
    ) -> Outcome<G, B>
    where
        SuccessF: FnOnce(S) -> B,
        FailureF: FnOnce(F) -> G,
    {
        self.to_outcome().bimap(success_f, failure_f)
    }
}
