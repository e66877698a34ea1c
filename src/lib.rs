//! A success/failure [`Outcome`] type with railway-style combinators.
//!
//! `Outcome<F, S>` holds either a failure payload or a success payload, never
//! both. Combinators such as [`map`](Outcome::map), [`bind`](Outcome::bind) and
//! [`ensure`](Outcome::ensure) build pipelines that short-circuit on the first
//! failure, while contract violations (asking a successful outcome for its
//! failure, reading an uninitialized [`ValueOutcome`]) are reported separately
//! through [`OutcomeError`].
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<&str, i32>::succeed(41)
//!     .map(|x| x + 1)
//!     .ensure(|x| *x % 2 != 0, "odd")
//!     .bind(|x| if x > 100 { Outcome::fail("too big") } else { Outcome::succeed(x) });
//!
//! assert_eq!(outcome, Outcome::succeed(42));
//! ```
//!
//! ## Short-circuit
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut evaluated = false;
//! let outcome = Outcome::<&str, i32>::fail("boom").map(|x| {
//!     evaluated = true;
//!     x + 1
//! });
//!
//! assert_eq!(outcome, Outcome::fail("boom"));
//! assert!(!evaluated);
//! ```
//!
//! ## Value outcomes
//!
//! ```
//! use outcome_rail::{OutcomeError, ValueOutcome};
//!
//! let pending = ValueOutcome::<u8, u32>::default();
//! assert!(pending.is_default());
//! assert_eq!(pending.get_success(), Err(OutcomeError::Uninitialized));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Free constructor functions
pub mod factory;
/// The `Outcome` type, combinators and conversions
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits abstracting over `Outcome` and `Result`
pub mod traits;
/// `Unit` marker and `OutcomeError`
pub mod types;
/// The three-state `ValueOutcome` type
pub mod value;

/// Tracing hooks for outcome pipelines (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[cfg(feature = "std")]
mod unwind;

pub use outcome::{outcome_to_result, result_to_outcome, Outcome};
pub use traits::*;
pub use types::{OutcomeError, Unit};
pub use value::ValueOutcome;
