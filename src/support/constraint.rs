//! Numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] wraps a value of type `T` that is known to satisfy
//! the constraint `C`. Model parameters use it to reject invalid
//! configuration up front instead of on every call.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1`
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant enforced at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that satisfies the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_steam::support::constraint::{Constrained, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let efficiency = Constrained::<Ratio, UnitInterval>::new(Ratio::new::<percent>(85.0));
/// assert!(efficiency.is_ok());
///
/// let efficiency = Constrained::<Ratio, UnitInterval>::new(Ratio::new::<percent>(120.0));
/// assert!(efficiency.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
