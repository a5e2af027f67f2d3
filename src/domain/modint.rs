//! Integers modulo a prime `P`
//!
//! `P` must be prime: inverses are computed with Fermat's little theorem.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::domain::coefficient::{Coefficient, Field, FiniteField};

/// Residue class modulo the prime `P`, always kept in `0..P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const P: u32> {
    value: u32,
}

impl<const P: u32> ModInt<P> {
    pub const MODULUS: u32 = P;

    pub fn new(v: i64) -> Self {
        Self {
            value: v.rem_euclid(P as i64) as u32,
        }
    }

    pub fn value(self) -> u32 {
        self.value
    }

    /// Square-and-multiply exponentiation.
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::new(1);
        while exp > 0 {
            if exp & 1 == 1 {
                result *= base;
            }
            base *= base;
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inv(self) -> Option<Self> {
        if self.value == 0 {
            None
        } else {
            Some(self.pow(u64::from(P) - 2))
        }
    }
}

impl<const P: u32> From<i64> for ModInt<P> {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl<const P: u32> From<i32> for ModInt<P> {
    fn from(v: i32) -> Self {
        Self::new(i64::from(v))
    }
}

impl<const P: u32> AddAssign for ModInt<P> {
    fn add_assign(&mut self, rhs: Self) {
        let sum = u64::from(self.value) + u64::from(rhs.value);
        self.value = (sum % u64::from(P)) as u32;
    }
}

impl<const P: u32> SubAssign for ModInt<P> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            P - (rhs.value - self.value)
        };
    }
}

impl<const P: u32> MulAssign for ModInt<P> {
    fn mul_assign(&mut self, rhs: Self) {
        let product = u64::from(self.value) * u64::from(rhs.value);
        self.value = (product % u64::from(P)) as u32;
    }
}

impl<const P: u32> DivAssign for ModInt<P> {
    /// Panics when `rhs` is zero, like integer division.
    fn div_assign(&mut self, rhs: Self) {
        match rhs.inv() {
            Some(inverse) => *self *= inverse,
            None => panic!("attempt to divide by zero modulo {P}"),
        }
    }
}

impl<const P: u32> Add for ModInt<P> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const P: u32> Sub for ModInt<P> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const P: u32> Mul for ModInt<P> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<const P: u32> Div for ModInt<P> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl<const P: u32> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::default() - self
    }
}

impl<const P: u32> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const P: u32> Coefficient for ModInt<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn div_exact(self, rhs: Self) -> Option<Self> {
        rhs.inv().map(|inverse| self * inverse)
    }
}

impl<const P: u32> Field for ModInt<P> {
    fn inv(self) -> Option<Self> {
        ModInt::inv(self)
    }
}

impl<const P: u32> FiniteField for ModInt<P> {
    const ORDER: u32 = P;

    fn nth(i: u32) -> Self {
        Self::new(i64::from(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Z7 = ModInt<7>;

    #[test]
    fn given_out_of_range_values_when_constructing_then_reduces_into_range() {
        assert_eq!(Z7::new(3).value(), 3);
        assert_eq!(Z7::new(10).value(), 3);
        assert_eq!(Z7::new(-4).value(), 3);
        assert_eq!(Z7::new(-14).value(), 0);
    }

    #[test]
    fn given_residues_when_adding_then_wraps() {
        let mut a = Z7::new(3);
        assert_eq!((a + Z7::new(5)).value(), 1);
        a += Z7::new(5);
        assert_eq!(a.value(), 1);
    }

    #[test]
    fn given_residues_when_subtracting_then_wraps_below_zero() {
        let mut a = Z7::new(3);
        assert_eq!((a - Z7::new(5)).value(), 5);
        a -= Z7::new(5);
        assert_eq!(a.value(), 5);
    }

    #[test]
    fn given_residues_when_multiplying_then_reduces() {
        let mut a = Z7::new(3);
        assert_eq!((a * Z7::new(5)).value(), 1);
        a *= Z7::new(5);
        assert_eq!(a.value(), 1);
    }

    #[test]
    fn given_large_prime_when_multiplying_then_does_not_overflow() {
        type Big = ModInt<2_147_483_647>;
        let a = Big::new(2_147_483_646);
        assert_eq!((a * a).value(), 1);
    }

    #[test]
    fn given_base_when_raising_to_power_then_matches_repeated_multiplication() {
        let a = Z7::new(3);
        assert_eq!(a.pow(4).value(), 4);
        assert_eq!(a.pow(0).value(), 1);
        assert_eq!(a.pow(1).value(), 3);
    }

    #[test]
    fn given_nonzero_when_inverting_then_product_is_one() {
        let a = Z7::new(3);
        let inverse = a.inv().expect("3 is invertible mod 7");
        assert_eq!(inverse.value(), 5);
        assert_eq!((a * inverse).value(), 1);
    }

    #[test]
    fn given_zero_when_inverting_then_none() {
        assert_eq!(Z7::new(0).inv(), None);
    }

    #[test]
    fn given_residues_when_dividing_then_multiplies_by_inverse() {
        let mut a = Z7::new(3);
        assert_eq!((a / Z7::new(2)).value(), 5);
        a /= Z7::new(2);
        assert_eq!(a.value(), 5);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn given_zero_divisor_when_dividing_then_panics() {
        let _ = Z7::new(3) / Z7::new(0);
    }

    #[test]
    fn given_equivalent_residues_when_comparing_then_equal() {
        assert_eq!(Z7::new(3), Z7::new(10));
        assert_ne!(Z7::new(3), Z7::new(4));
    }

    #[test]
    fn given_residue_when_negating_then_sums_to_zero() {
        let a = Z7::new(3);
        assert_eq!((-a).value(), 4);
        assert_eq!(-Z7::new(0), Z7::new(0));
    }
}
