use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the closed range `MIN ≤ x ≤ MAX`.
///
/// The bounds are given as `i32` const parameters and converted into `T`
/// for comparison, so any `T: PartialOrd + From<i32>` can be bounded
/// (`i32`, `i64`, `f64`, ...).
///
/// You can construct a bounded value using either the generic
/// [`Constrained::new`] method or the convenient [`Bounded::new`]
/// associated function.
///
/// # Examples
///
/// ```
/// use unit_scaling::support::constraint::{Bounded, Constrained};
///
/// // Generic constructor:
/// let x = Constrained::<i64, Bounded<-10, 10>>::new(-10).unwrap();
/// assert_eq!(x.into_inner(), -10);
///
/// // Associated constructor:
/// let y = Bounded::<0, 5>::new(2.5).unwrap();
/// assert_eq!(y.as_ref(), &2.5);
///
/// // Error cases:
/// assert!(Bounded::<-10, 10>::new(11).is_err());
/// assert!(Bounded::<-10, 10>::new(-11).is_err());
/// assert!(Bounded::<0, 5>::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bounded<const MIN: i32, const MAX: i32>;

impl<const MIN: i32, const MAX: i32> Bounded<MIN, MAX> {
    /// Constructs a [`Constrained<T, Bounded<MIN, MAX>>`] if `MIN ≤ value ≤ MAX`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than `MIN`.
    /// - [`ConstraintError::AboveMaximum`] if greater than `MAX`.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + From<i32>>(
        value: T,
    ) -> Result<Constrained<T, Bounded<MIN, MAX>>, ConstraintError> {
        Constrained::<T, Bounded<MIN, MAX>>::new(value)
    }
}

impl<T, const MIN: i32, const MAX: i32> Constraint<T> for Bounded<MIN, MAX>
where
    T: PartialOrd + From<i32>,
{
    fn check(value: &T) -> Result<(), ConstraintError> {
        const {
            assert!(MIN <= MAX, "bounded range requires MIN <= MAX");
        };

        match (
            value.partial_cmp(&T::from(MIN)),
            value.partial_cmp(&T::from(MAX)),
        ) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
