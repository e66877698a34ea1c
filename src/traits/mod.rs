//! Traits abstracting over [`Outcome`](crate::Outcome) and the standard `Result`.
//!
//! - [`WithFailure`]: remap the failure of either container
//! - [`FailureOps`]: recovery and bidirectional mapping
//! - [`OutcomeCategory`]: lift values and failures into a container family
//! - [`ResultExt`]: `.into_outcome()` / `.catch_into()` on `Result`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{FailureOps, OutcomeCategory, WithFailure};
//! use outcome_rail::{Outcome, Unit};
//!
//! let lifted: Outcome<String, i32> = <Outcome<String, Unit>>::lift(42);
//! assert_eq!(lifted.to_outcome(), Outcome::succeed(42));
//!
//! let mapped = Err::<i32, u16>(503).fmap_failure(|code| code.to_string());
//! assert_eq!(mapped, Err("503".to_string()));
//!
//! let recovered = Outcome::<&str, i32>::fail("down").recover(|_| Outcome::succeed(1));
//! assert_eq!(recovered, Outcome::succeed(1));
//! ```

pub mod failure_ops;
pub mod outcome_category;
pub mod result_ext;
pub mod with_failure;

pub use failure_ops::FailureOps;
pub use outcome_category::OutcomeCategory;
pub use result_ext::ResultExt;
pub use with_failure::WithFailure;
