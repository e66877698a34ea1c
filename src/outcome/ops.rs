//! Railway combinators for [`Outcome`].
//!
//! Every combinator consumes the outcome and returns a new value. Callbacks are
//! only invoked when the outcome is in the state they belong to, so a failed
//! outcome short-circuits through any chain of success-path logic.
use crate::outcome::core::Outcome;
use crate::types::Unit;

impl<F, S> Outcome<F, S> {
    /// Transforms the success payload, propagating a failure unchanged.
    ///
    /// # Arguments
    ///
    /// * `create` - Function producing the new success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::succeed(21).map_success(|x| x * 2);
    /// assert_eq!(outcome, Outcome::succeed(42));
    /// ```
    #[inline]
    pub fn map_success<S2, C>(self, create: C) -> Outcome<F, S2>
    where
        C: FnOnce(S) -> S2,
    {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => Outcome::Successful(create(success)),
        }
    }

    /// Conventional name for [`map_success`](Outcome::map_success).
    #[inline]
    pub fn map<S2, C>(self, create: C) -> Outcome<F, S2>
    where
        C: FnOnce(S) -> S2,
    {
        self.map_success(create)
    }

    /// Transforms the failure payload, passing a success through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<u16, i32>::fail(404).map_failure(|code| format!("HTTP {}", code));
    /// assert_eq!(outcome, Outcome::fail("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F2, C>(self, create: C) -> Outcome<F2, S>
    where
        C: FnOnce(F) -> F2,
    {
        match self {
            Self::Failed(failure) => Outcome::Failed(create(failure)),
            Self::Successful(success) => Outcome::Successful(success),
        }
    }

    /// Chains a fallible step onto a successful outcome.
    ///
    /// A failed outcome is propagated without invoking `create`; a successful
    /// one hands its payload to `create` and returns whatever it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<&'static str, i32> {
    ///     if x % 2 == 0 {
    ///         Outcome::succeed(x / 2)
    ///     } else {
    ///         Outcome::fail("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::succeed(8).bind(half).bind(half), Outcome::succeed(2));
    /// assert_eq!(Outcome::succeed(6).bind(half).bind(half), Outcome::fail("odd"));
    /// ```
    #[inline]
    pub fn bind<S2, C>(self, create: C) -> Outcome<F, S2>
    where
        C: FnOnce(S) -> Outcome<F, S2>,
    {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => create(success),
        }
    }

    /// Turns a success into `failure` when `is_failure` holds for its payload.
    ///
    /// The predicate describes the failing condition: returning `true` rejects
    /// the success, returning `false` keeps it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let small = Outcome::<&str, i32>::succeed(5).ensure(|x| *x < 10, "too small");
    /// assert_eq!(small, Outcome::fail("too small"));
    ///
    /// let large = Outcome::<&str, i32>::succeed(50).ensure(|x| *x < 10, "too small");
    /// assert_eq!(large, Outcome::succeed(50));
    /// ```
    #[inline]
    pub fn ensure<P>(self, is_failure: P, failure: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        self.ensure_with(is_failure, |_| failure)
    }

    /// Like [`ensure`](Outcome::ensure), deriving the failure from the payload
    /// only when it is needed.
    #[inline]
    pub fn ensure_with<P, C>(self, is_failure: P, create_failure: C) -> Self
    where
        P: FnOnce(&S) -> bool,
        C: FnOnce(&S) -> F,
    {
        match self {
            Self::Successful(success) => {
                if is_failure(&success) {
                    Self::Failed(create_failure(&success))
                } else {
                    Self::Successful(success)
                }
            },
            failed => failed,
        }
    }

    /// Like [`ensure_with`](Outcome::ensure_with), threading an auxiliary value
    /// into both the predicate and the failure producer.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let limit = 10;
    /// let outcome = Outcome::<String, i32>::succeed(12).ensure_by(
    ///     limit,
    ///     |x, limit| x > limit,
    ///     |x, limit| format!("{} exceeds {}", x, limit),
    /// );
    /// assert_eq!(outcome, Outcome::fail("12 exceeds 10".to_string()));
    /// ```
    #[inline]
    pub fn ensure_by<A, P, C>(self, aux: A, is_failure: P, create_failure: C) -> Self
    where
        P: FnOnce(&S, &A) -> bool,
        C: FnOnce(&S, A) -> F,
    {
        match self {
            Self::Successful(success) => {
                if is_failure(&success, &aux) {
                    Self::Failed(create_failure(&success, aux))
                } else {
                    Self::Successful(success)
                }
            },
            failed => failed,
        }
    }

    /// Like [`ensure_by`](Outcome::ensure_by), computing the auxiliary value
    /// once from the success payload. A failed outcome never computes it.
    #[inline]
    pub fn ensure_by_with<A, X, P, C>(self, create_aux: X, is_failure: P, create_failure: C) -> Self
    where
        X: FnOnce(&S) -> A,
        P: FnOnce(&S, &A) -> bool,
        C: FnOnce(&S, A) -> F,
    {
        match self {
            Self::Failed(failure) => Self::Failed(failure),
            Self::Successful(success) => {
                let aux = create_aux(&success);
                Self::Successful(success).ensure_by(aux, is_failure, create_failure)
            },
        }
    }

    /// Runs a fallible side effect on the success payload, converting an error
    /// of the declared kind `X` into a failure.
    ///
    /// A failed outcome is returned without running `execute`. Panics raised by
    /// `execute` are not intercepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<String, &str>::succeed("abc")
    ///     .catch(|s| s.parse::<u8>().map(|_| ()), |e| e.to_string());
    /// assert!(outcome.is_failed());
    /// ```
    #[inline]
    pub fn catch<X, E, C>(self, execute: E, create_failure: C) -> Self
    where
        E: FnOnce(&S) -> Result<(), X>,
        C: FnOnce(X) -> F,
    {
        match self {
            Self::Failed(failure) => Self::Failed(failure),
            Self::Successful(success) => match execute(&success) {
                Ok(()) => Self::Successful(success),
                Err(error) => Self::Failed(create_failure(error)),
            },
        }
    }

    /// Replaces the success payload through a fallible mapping, converting an
    /// error of the declared kind `X` into a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<String, &str>::succeed("42")
    ///     .catch_map(|s| s.parse::<u8>(), |e| e.to_string());
    /// assert_eq!(outcome, Outcome::succeed(42));
    /// ```
    #[inline]
    pub fn catch_map<S2, X, M, C>(self, create_success: M, create_failure: C) -> Outcome<F, S2>
    where
        M: FnOnce(S) -> Result<S2, X>,
        C: FnOnce(X) -> F,
    {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => match create_success(success) {
                Ok(mapped) => Outcome::Successful(mapped),
                Err(error) => Outcome::Failed(create_failure(error)),
            },
        }
    }

    /// Invokes `execute` with the success payload, returning the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<&str, i32>::succeed(3).do_on_success(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(outcome, Outcome::succeed(3));
    /// ```
    #[inline]
    pub fn do_on_success<E>(self, execute: E) -> Self
    where
        E: FnOnce(&S),
    {
        if let Self::Successful(success) = &self {
            execute(success);
        }
        self
    }

    /// Invokes `execute` with the failure payload, returning the outcome unchanged.
    #[inline]
    pub fn do_on_failure<E>(self, execute: E) -> Self
    where
        E: FnOnce(&F),
    {
        if let Self::Failed(failure) = &self {
            execute(failure);
        }
        self
    }

    /// Invokes exactly one of the two actions depending on the state, then
    /// returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut failures = Vec::new();
    /// let mut successes = Vec::new();
    /// let _ = Outcome::<&str, i32>::fail("boom").match_with(
    ///     |f| failures.push(*f),
    ///     |s| successes.push(*s),
    /// );
    /// assert_eq!(failures, ["boom"]);
    /// assert!(successes.is_empty());
    /// ```
    #[inline]
    pub fn match_with<DF, DS>(self, do_on_failure: DF, do_on_success: DS) -> Self
    where
        DF: FnOnce(&F),
        DS: FnOnce(&S),
    {
        match &self {
            Self::Failed(failure) => do_on_failure(failure),
            Self::Successful(success) => do_on_success(success),
        }
        self
    }

    /// Collapses the outcome into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let describe = |o: Outcome<&str, i32>| o.reduce(|f| f.len() as i32, |s| s * 10);
    /// assert_eq!(describe(Outcome::fail("boom")), 4);
    /// assert_eq!(describe(Outcome::succeed(4)), 40);
    /// ```
    #[inline]
    pub fn reduce<R, RF, RS>(self, reduce_failure: RF, reduce_success: RS) -> R
    where
        RF: FnOnce(F) -> R,
        RS: FnOnce(S) -> R,
    {
        match self {
            Self::Failed(failure) => reduce_failure(failure),
            Self::Successful(success) => reduce_success(success),
        }
    }

    /// Replaces the success payload with `value`, keeping a failure as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::succeed(1).reset("fresh");
    /// assert_eq!(outcome, Outcome::succeed("fresh"));
    /// ```
    #[inline]
    pub fn reset<S2>(self, value: S2) -> Outcome<F, S2> {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(_) => Outcome::Successful(value),
        }
    }

    /// Replaces a successful outcome with `outcome`, keeping a failure as is.
    #[inline]
    pub fn reset_to<S2>(self, outcome: Outcome<F, S2>) -> Outcome<F, S2> {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(_) => outcome,
        }
    }

    /// Drops the success payload, keeping only the success/failure status.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Unit};
    ///
    /// let outcome = Outcome::<&str, String>::succeed("payload".to_string()).discard();
    /// assert_eq!(outcome, Outcome::succeed(Unit));
    /// ```
    #[inline]
    pub fn discard(self) -> Outcome<F, Unit> {
        self.reset(Unit)
    }

    /// Returns the outcome if successful, otherwise the fallback built from
    /// the failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::fail("cache miss").or_else(|_| Outcome::succeed(7));
    /// assert_eq!(outcome, Outcome::succeed(7));
    /// ```
    #[inline]
    pub fn or_else<C>(self, create: C) -> Self
    where
        C: FnOnce(F) -> Self,
    {
        match self {
            Self::Failed(failure) => create(failure),
            Self::Successful(success) => Self::Successful(success),
        }
    }
}

#[cfg(feature = "std")]
impl<F, S> Outcome<F, S> {
    /// Runs `execute` on the success payload and converts a panic whose payload
    /// is of type `P` into a failure.
    ///
    /// A panic with any other payload type is resumed, so it keeps unwinding
    /// past this call. A failed outcome never runs `execute`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<String, i32>::succeed(0).catch_panic::<&'static str, _, _>(
    ///     |x| if *x == 0 { panic!("zero") },
    ///     |msg| msg.to_string(),
    /// );
    /// assert_eq!(outcome, Outcome::fail("zero".to_string()));
    /// ```
    pub fn catch_panic<P, E, C>(self, execute: E, create_failure: C) -> Self
    where
        P: 'static,
        E: FnOnce(&S),
        C: FnOnce(P) -> F,
    {
        match self {
            Self::Failed(failure) => Self::Failed(failure),
            Self::Successful(success) => {
                match crate::unwind::intercept::<P, _, _>(|| execute(&success)) {
                    Ok(()) => Self::Successful(success),
                    Err(payload) => Self::Failed(create_failure(payload)),
                }
            },
        }
    }

    /// Maps the success payload and converts a panic whose payload is of type
    /// `P` into a failure. Other panics keep unwinding.
    pub fn catch_panic_map<P, S2, M, C>(self, create_success: M, create_failure: C) -> Outcome<F, S2>
    where
        P: 'static,
        M: FnOnce(S) -> S2,
        C: FnOnce(P) -> F,
    {
        match self {
            Self::Failed(failure) => Outcome::Failed(failure),
            Self::Successful(success) => {
                match crate::unwind::intercept::<P, _, _>(|| create_success(success)) {
                    Ok(mapped) => Outcome::Successful(mapped),
                    Err(payload) => Outcome::Failed(create_failure(payload)),
                }
            },
        }
    }
}
