//! Parameter range validation with silent defaulting.
//!
//! Out-of-range input is not an error. A setter stores either the value it
//! was given or the parameter's fixed default, and reports which of the two
//! happened through [`Validated`].

use std::fmt;
use std::ops::RangeInclusive;

/// Outcome of validating a single parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validated<T> {
    /// The input was within range and is stored verbatim.
    Accepted(T),
    /// The input was out of range; the default is stored instead.
    Defaulted(T),
}

impl<T: Copy> Validated<T> {
    /// Returns the value that ends up stored.
    #[inline]
    pub fn value(&self) -> T {
        match *self {
            Self::Accepted(v) | Self::Defaulted(v) => v,
        }
    }

    /// Returns true if the input was replaced by the default.
    #[inline]
    pub fn was_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }

    /// Maps the stored value, keeping the accepted/defaulted tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Self::Accepted(v) => Validated::Accepted(f(v)),
            Self::Defaulted(v) => Validated::Defaulted(f(v)),
        }
    }
}

/// Inclusive accepted range and fallback default for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRange<T> {
    /// Parameter name used in log events.
    pub name: &'static str,
    /// Values stored verbatim.
    pub accepted: RangeInclusive<T>,
    /// Value stored when input falls outside `accepted`.
    pub default: T,
}

impl<T> ParamRange<T>
where
    T: PartialOrd + Copy + fmt::Debug,
{
    /// Creates a range descriptor.
    pub const fn new(name: &'static str, accepted: RangeInclusive<T>, default: T) -> Self {
        Self {
            name,
            accepted,
            default,
        }
    }

    /// Checks whether a value lies in the accepted range.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        // NaN compares false on both bounds and is rejected here.
        self.accepted.contains(&value)
    }

    /// Validates `value` against this range.
    pub fn validate(&self, value: T) -> Validated<T> {
        validate(value, &self.accepted, self.default)
    }
}

/// Returns `Accepted(value)` if `value` is inside `range`, otherwise
/// `Defaulted(default)`.
pub fn validate<T>(value: T, range: &RangeInclusive<T>, default: T) -> Validated<T>
where
    T: PartialOrd + Copy,
{
    if range.contains(&value) {
        Validated::Accepted(value)
    } else {
        Validated::Defaulted(default)
    }
}
