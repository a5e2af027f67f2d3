//! Dense univariate polynomials `sum a_i x^i`
//!
//! Every value is kept normalized: the coefficient vector never ends in a
//! zero, so the zero polynomial is the empty vector and has no degree.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::domain::coefficient::{Coefficient, Field};
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Coefficient> {
    coeffs: Vec<T>,
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Build from coefficients, constant term first.
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self::constant(T::one())
    }

    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// `c * x^degree`
    pub fn monomial(c: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = c;
        Self::new(coeffs)
    }

    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of `x^idx`; zero past the degree.
    pub fn coeff(&self, idx: usize) -> T {
        self.coeffs.get(idx).copied().unwrap_or_else(T::zero)
    }

    /// Coefficients, constant term first.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub fn leading(&self) -> Option<T> {
        self.coeffs.last().copied()
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| op(self.coeff(i), other.coeff(i)))
            .collect();
        Self::new(coeffs)
    }

    fn convolve(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut result = vec![T::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j] + a * b;
            }
        }
        Self::new(result)
    }

    /// Long division: returns `(q, r)` with `self = divisor * q + r` and
    /// `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Self) -> DomainResult<(Self, Self)> {
        let (divisor_degree, divisor_lead) = match (divisor.degree(), divisor.leading()) {
            (Some(degree), Some(lead)) => (degree, lead),
            _ => return Err(DomainError::DivisionByZero),
        };

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![T::zero(); remainder.len().saturating_sub(divisor_degree)];

        for shift in (0..quotient.len()).rev() {
            let lead = remainder[shift + divisor_degree];
            if lead.is_zero() {
                continue;
            }
            let factor = lead
                .div_exact(divisor_lead)
                .ok_or_else(|| DomainError::InexactDivision {
                    dividend: lead.to_string(),
                    divisor: divisor_lead.to_string(),
                })?;
            quotient[shift] = factor;
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + j] = remainder[shift + j] - factor * d;
            }
            // exact zero even when the coefficient type rounds
            remainder[shift + divisor_degree] = T::zero();
        }
        remainder.truncate(divisor_degree);

        Ok((Self::new(quotient), Self::new(remainder)))
    }

    pub fn quotient(&self, divisor: &Self) -> DomainResult<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn remainder(&self, divisor: &Self) -> DomainResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Square-and-multiply exponentiation; `p^0 = 1`.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Value at `x` by Horner's rule.
    pub fn evaluate(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }
}

impl<T: Field> Polynomial<T> {
    /// Scale so that the leading coefficient is one. Zero stays zero.
    pub fn monic(&self) -> Self {
        match self.leading().and_then(Field::inv) {
            Some(inverse) => self * &Self::constant(inverse),
            None => self.clone(),
        }
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, s, t)` with `a*s + b*t = g`, where `g` is a greatest
    /// common divisor of `a` and `b` (not necessarily monic).
    pub fn extended_gcd(a: &Self, b: &Self) -> DomainResult<(Self, Self, Self)> {
        let (mut r0, mut r1) = (a.clone(), b.clone());
        let (mut s0, mut s1) = (Self::one(), Self::zero());
        let (mut t0, mut t1) = (Self::zero(), Self::one());

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            let s = &s0 - &(&q * &s1);
            let t = &t0 - &(&q * &t1);
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }

        Ok((r0, s0, t0))
    }
}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<'a, T: Coefficient> Add<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a, T: Coefficient> Sub<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        self.convolve(rhs)
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Coefficient> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Coefficient> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Coefficient> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::new(self.coeffs.iter().map(|&c| -c).collect())
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

/// Human-readable form, highest power first: `3*x^2 + 2*x + 1`.
impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if power == 0 {
                write!(f, "{c}")?;
                continue;
            }
            if *c != T::one() {
                write!(f, "{c}*")?;
            }
            write!(f, "x")?;
            if power > 1 {
                write!(f, "^{power}")?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
