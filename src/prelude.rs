//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<String, u16> {
//!     raw.parse::<u16>()
//!         .catch_into(|e| e.to_string())
//!         .ensure(|port| *port < 1024, "privileged port".to_string())
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::succeed(8080));
//! assert_eq!(parse_port("80"), Outcome::fail("privileged port".to_string()));
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`ValueOutcome`], [`Unit`], [`OutcomeError`]
//! - **Traits**: [`ResultExt`], [`WithFailure`], [`FailureOps`]
//! - **Factory**: the [`factory`] module

pub use crate::factory;
pub use crate::outcome::Outcome;
pub use crate::traits::{FailureOps, ResultExt, WithFailure};
pub use crate::types::{OutcomeError, Unit};
pub use crate::value::ValueOutcome;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTracingExt;
