//! The [`Outcome`] type and its combinators.
//!
//! # Key Components
//!
//! - [`Outcome`] - Either a failure payload or a success payload
//! - Railway combinators (`map`, `bind`, `ensure`, `catch`, `reduce`, ...)
//! - Boolean-style operators (`!outcome`, `current | fallback`)
//! - Iterator adapters and `Result` conversions
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let total = Outcome::<String, &str>::succeed("20")
//!     .catch_map(|s| s.parse::<i32>(), |e| e.to_string())
//!     .ensure(|n| *n < 0, "negative".to_string())
//!     .map(|n| n + 1)
//!     .reduce(|_| 0, |n| n);
//!
//! assert_eq!(total, 21);
//! ```
pub mod convert;
pub mod core;
pub mod iter;
pub mod logic;
pub mod ops;

pub use self::convert::*;
pub use self::core::*;
pub use self::iter::*;
