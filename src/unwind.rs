//! Typed panic interception used by the `catch_panic` family.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Runs `execute`, returning the panic payload if it is of type `P`.
///
/// Any other panic is resumed with its original payload.
pub(crate) fn intercept<P, T, E>(execute: E) -> Result<T, P>
where
    P: 'static,
    E: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(execute)).or_else(downcast)
}

fn downcast<P: 'static, T>(payload: Box<dyn Any + Send>) -> Result<T, P> {
    match payload.downcast::<P>() {
        Ok(matched) => Err(*matched),
        Err(other) => panic::resume_unwind(other),
    }
}
