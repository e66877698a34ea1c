//! [`ValueOutcome`], the three-state sibling of [`Outcome`](crate::Outcome) for
//! plain `Copy` payloads.
//!
//! Use it on hot paths where the outcome should stay a small stack value, or
//! where a "not yet computed" state has to be told apart from both success and
//! failure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ValueOutcome;
//!
//! let mut slots = [ValueOutcome::<u8, u32>::default(); 3];
//! slots[1] = ValueOutcome::succeed(10);
//! slots[2] = ValueOutcome::fail(4);
//!
//! assert_eq!(slots.iter().filter(|slot| slot.is_initialized()).count(), 2);
//! assert!(slots[0].is_failed_or_default());
//! ```
pub mod core;

pub use self::core::*;
