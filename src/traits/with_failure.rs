use crate::outcome::Outcome;

/// Abstraction over containers that carry a remappable failure.
///
/// Implemented for [`Outcome<F, S>`] and for the standard `Result<S, F>`, so
/// generic code can remap failures without caring which of the two it holds.
///
/// # Type Parameters
///
/// * `F` - The current failure type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success payload type
/// * `FailureOutput<G>` - The container type after mapping the failure to `G`
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithFailure;
/// use outcome_rail::Outcome;
///
/// fn tag<C: WithFailure<u16>>(container: C) -> C::FailureOutput<String> {
///     container.fmap_failure(|code| format!("E{}", code))
/// }
///
/// assert_eq!(tag(Outcome::<u16, ()>::fail(7)), Outcome::fail("E7".to_string()));
/// assert_eq!(tag(Err::<(), u16>(7)), Err("E7".to_string()));
/// ```
pub trait WithFailure<F> {
    type Success;

    type FailureOutput<G>;

    /// Maps the failure value using `f`, leaving a success untouched.
    fn fmap_failure<M, G>(self, f: M) -> Self::FailureOutput<G>
    where
        M: FnOnce(F) -> G;

    /// Converts the container into an [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::WithFailure;
    /// use outcome_rail::Outcome;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert_eq!(result.to_outcome(), Outcome::succeed(42));
    /// ```
    fn to_outcome(self) -> Outcome<F, Self::Success>;
}

impl<F, S> WithFailure<F> for Outcome<F, S> {
    type Success = S;
    type FailureOutput<G> = Outcome<G, S>;

    #[inline]
    fn fmap_failure<M, G>(self, f: M) -> Self::FailureOutput<G>
    where
        M: FnOnce(F) -> G,
    {
        self.map_failure(f)
    }

    #[inline]
    fn to_outcome(self) -> Outcome<F, S> {
        self
    }
}

impl<F, S> WithFailure<F> for Result<S, F> {
    type Success = S;
    type FailureOutput<G> = Result<S, G>;

    #[inline]
    fn fmap_failure<M, G>(self, f: M) -> Self::FailureOutput<G>
    where
        M: FnOnce(F) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_outcome(self) -> Outcome<F, S> {
        self.into()
    }
}
