//! Supporting value types shared by [`Outcome`](crate::Outcome) and
//! [`ValueOutcome`](crate::ValueOutcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, OutcomeError, Unit};
//!
//! let done: Outcome<&str, Unit> = Outcome::succeed(42).discard();
//! assert_eq!(done, Outcome::succeed(Unit));
//!
//! let failed: Outcome<&str, i32> = Outcome::fail("boom");
//! assert_eq!(failed.get_success(), Err(OutcomeError::NotSuccessful));
//! ```
pub mod outcome_error;
pub mod unit;

pub use outcome_error::OutcomeError;
pub use unit::Unit;
