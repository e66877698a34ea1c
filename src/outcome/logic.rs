//! Boolean-style composition of outcomes.
//!
//! An outcome is truthy when it is successful. `!outcome` asks "did it fail?",
//! and `current | fallback` keeps the first successful outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let primary: Outcome<&str, i32> = Outcome::fail("primary down");
//! let secondary: Outcome<&str, i32> = Outcome::succeed(7);
//!
//! assert!(!&primary);
//! assert_eq!(primary | secondary, Outcome::succeed(7));
//! ```
use crate::outcome::core::Outcome;
use core::ops::{BitOr, Not};

impl<F, S> Outcome<F, S> {
    /// Returns `true` if the outcome is successful.
    #[must_use]
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        self.is_successful()
    }
}

impl<F, S> Not for Outcome<F, S> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_failed()
    }
}

impl<F, S> Not for &Outcome<F, S> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_failed()
    }
}

/// Keeps `self` when it is successful, otherwise yields `fallback`.
///
/// The fallback is evaluated eagerly by the caller; use
/// [`Outcome::or_else`] to build it lazily from the failure.
impl<F, S> BitOr for Outcome<F, S> {
    type Output = Self;

    #[inline]
    fn bitor(self, fallback: Self) -> Self {
        match self {
            Self::Successful(success) => Self::Successful(success),
            Self::Failed(_) => fallback,
        }
    }
}
