use core::fmt::{Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero-information marker used as the success payload when only the
/// success/failure status of an operation matters.
///
/// `Unit` behaves like `()` but also implements [`Display`] (rendering the
/// empty string), so outcomes produced by [`Outcome::discard`] can still be
/// formatted.
///
/// [`Outcome::discard`]: crate::Outcome::discard
///
/// # Examples
///
/// ```
/// use outcome_rail::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// assert_eq!(Unit.to_string(), "");
/// assert_eq!(Unit::from(()), Unit);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Display for Unit {
    #[inline]
    fn fmt(&self, _f: &mut Formatter<'_>) -> core::fmt::Result {
        Ok(())
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
