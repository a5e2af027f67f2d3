//! Coefficient rings and fields for polynomial arithmetic

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring usable as polynomial coefficients.
pub trait Coefficient:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Quotient `self / rhs` if it exists in the ring.
    ///
    /// Returns `None` for a zero divisor and, in rings that are not fields,
    /// whenever the division leaves a remainder.
    fn div_exact(self, rhs: Self) -> Option<Self>;
}

/// A coefficient ring in which every non-zero element is invertible.
pub trait Field: Coefficient {
    /// Multiplicative inverse, `None` for zero.
    fn inv(self) -> Option<Self>;
}

/// A field with finitely many elements that can be enumerated.
pub trait FiniteField: Field {
    /// Number of elements in the field.
    const ORDER: u32;

    /// The `i`-th element, for `i` in `0..ORDER`.
    fn nth(i: u32) -> Self;
}

impl Coefficient for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    /// `None` also when the quotient overflows (`i64::MIN / -1`).
    fn div_exact(self, rhs: Self) -> Option<Self> {
        match self.checked_rem(rhs) {
            Some(0) => self.checked_div(rhs),
            _ => None,
        }
    }
}

impl Coefficient for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn div_exact(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 {
            None
        } else {
            Some(self / rhs)
        }
    }
}

impl Field for f64 {
    fn inv(self) -> Option<Self> {
        if self == 0.0 {
            None
        } else {
            Some(1.0 / self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_integers_when_dividing_exactly_then_returns_quotient() {
        assert_eq!(6_i64.div_exact(3), Some(2));
        assert_eq!((-4_i64).div_exact(2), Some(-2));
    }

    #[test]
    fn given_integers_when_division_leaves_remainder_then_none() {
        assert_eq!(1_i64.div_exact(2), None);
        assert_eq!(5_i64.div_exact(0), None);
    }

    #[test]
    fn given_overflowing_quotient_when_dividing_exactly_then_none() {
        assert_eq!(i64::MIN.div_exact(-1), None);
        assert_eq!(i64::MIN.div_exact(1), Some(i64::MIN));
    }

    #[test]
    fn given_float_zero_when_inverting_then_none() {
        assert_eq!(0.0_f64.inv(), None);
        assert_eq!(4.0_f64.inv(), Some(0.25));
    }
}
