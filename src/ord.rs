//! Small `Ord`-providing newtypes, needed because `f64` does not implement
//! `Ord` (`NaN` has no total order) but the priority-ordered frontiers need
//! one. Evaluators are documented to never return `NaN`; `total_cmp` gives a
//! total order over the IEEE-754 bit pattern regardless, so a stray `NaN`
//! degrades ordering quality rather than panicking.

use std::cmp::Ordering;

/// Newtype wrapper for `f64` that implements [`Ord`] via
/// [`f64::total_cmp`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct OrdF64(pub f64);

impl Eq for OrdF64 {}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for OrdF64 {
    fn from(value: f64) -> Self {
        OrdF64(value)
    }
}

impl From<OrdF64> for f64 {
    fn from(OrdF64(value): OrdF64) -> Self {
        value
    }
}
