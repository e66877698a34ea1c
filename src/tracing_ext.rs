//! Tracing integration for outcome-rail.
//!
//! This module adds pass-through logging hooks on top of
//! [`Outcome::do_on_failure`] and [`Outcome::do_on_success`], so a pipeline can
//! report what happened without changing the value that flows through it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use tracing::Span;

use crate::outcome::Outcome;

/// Extension trait emitting `tracing` events from an [`Outcome`] pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::OutcomeTracingExt;
///
/// fn load(id: u64) -> Outcome<LoadError, Record> {
///     fetch(id)
///         .trace_failure("fetch failed")
///         .bind(validate)
///         .trace_success("record ready")
/// }
/// ```
pub trait OutcomeTracingExt<F, S>: Sized {
    /// Emits a `WARN` event carrying the failure when the outcome is failed.
    fn trace_failure(self, message: &str) -> Self;

    /// Emits a `DEBUG` event carrying the success when the outcome is successful.
    fn trace_success(self, message: &str) -> Self;

    /// Emits the failure event inside `span` instead of the current span.
    fn trace_failure_in(self, span: &Span, message: &str) -> Self;
}

impl<F: Debug, S: Debug> OutcomeTracingExt<F, S> for Outcome<F, S> {
    fn trace_failure(self, message: &str) -> Self {
        self.do_on_failure(|failure| tracing::warn!(failure = ?failure, "{}", message))
    }

    fn trace_success(self, message: &str) -> Self {
        self.do_on_success(|success| tracing::debug!(success = ?success, "{}", message))
    }

    fn trace_failure_in(self, span: &Span, message: &str) -> Self {
        span.in_scope(|| self.trace_failure(message))
    }
}
