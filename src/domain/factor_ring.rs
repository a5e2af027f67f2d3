//! Elements of the factor ring `F[x]/(f(x))`

use std::fmt;

use crate::domain::coefficient::Field;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::polynomial::Polynomial;

/// A polynomial reduced modulo `modulus`.
///
/// Binary operations require both operands to share the same modulus.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRingElement<T: Field> {
    poly: Polynomial<T>,
    modulus: Polynomial<T>,
}

impl<T: Field> Default for FactorRingElement<T> {
    /// The only element of `F[x]/(1)`.
    fn default() -> Self {
        Self {
            poly: Polynomial::zero(),
            modulus: Polynomial::one(),
        }
    }
}

impl<T: Field> FactorRingElement<T> {
    pub fn new(poly: Polynomial<T>, modulus: Polynomial<T>) -> DomainResult<Self> {
        let poly = poly.remainder(&modulus)?;
        Ok(Self { poly, modulus })
    }

    /// The reduced representative, of degree below the modulus.
    pub fn poly(&self) -> &Polynomial<T> {
        &self.poly
    }

    pub fn modulus(&self) -> &Polynomial<T> {
        &self.modulus
    }

    fn same_ring(&self, other: &Self, operation: &'static str) -> DomainResult<()> {
        if self.modulus != other.modulus {
            return Err(DomainError::ModulusMismatch { operation });
        }
        Ok(())
    }

    fn reduce(&self, poly: Polynomial<T>) -> DomainResult<Self> {
        Self::new(poly, self.modulus.clone())
    }

    pub fn try_add(&self, other: &Self) -> DomainResult<Self> {
        self.same_ring(other, "addition")?;
        self.reduce(&self.poly + &other.poly)
    }

    pub fn try_sub(&self, other: &Self) -> DomainResult<Self> {
        self.same_ring(other, "subtraction")?;
        self.reduce(&self.poly - &other.poly)
    }

    pub fn try_mul(&self, other: &Self) -> DomainResult<Self> {
        self.same_ring(other, "multiplication")?;
        self.reduce(&self.poly * &other.poly)
    }

    /// Inverse via the extended Euclidean algorithm on `(poly, modulus)`.
    ///
    /// Exists only when the gcd is a non-zero constant.
    pub fn inverse(&self) -> DomainResult<Self> {
        let (g, s, _) = Polynomial::extended_gcd(&self.poly, &self.modulus)?;
        let scale = match (g.degree(), g.leading()) {
            (Some(0), Some(c)) => c.inv(),
            _ => None,
        };
        let scale = scale.ok_or_else(|| DomainError::NotInvertible {
            element: self.poly.to_string(),
        })?;
        self.reduce(&s * &Polynomial::constant(scale))
    }

    pub fn try_div(&self, other: &Self) -> DomainResult<Self> {
        self.same_ring(other, "division")?;
        self.try_mul(&other.inverse()?)
    }

    /// Square-and-multiply exponentiation; `a^0 = 1`.
    pub fn pow(&self, mut exp: u32) -> DomainResult<Self> {
        let mut result = self.reduce(Polynomial::one())?;
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }
}

impl<T: Field> fmt::Display for FactorRingElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly)
    }
}
