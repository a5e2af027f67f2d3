//! Polynomial and factor-ring calculations over Z_P

use tracing::{debug, instrument};

use crate::application::parser::{coefficient_count, parse_polynomial, MAX_DEGREE};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    candidate_count, is_irreducible, FactorRingElement, ModInt, Polynomial,
};

/// Primes the calculator is instantiated for.
pub const SUPPORTED_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Run `$body` with `$P` bound to the runtime prime `$p` as a const.
///
/// Evaluates to `Err(ApplicationError::UnsupportedModulus(_).into())` for
/// primes outside [`SUPPORTED_PRIMES`].
#[macro_export]
macro_rules! with_prime {
    ($p:expr, $P:ident => $body:expr) => {
        $crate::with_prime!(@arms $p, $P, $body;
            2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 53 59 61 67 71 73 79 83 89 97)
    };
    (@arms $p:expr, $P:ident, $body:expr; $($prime:literal)+) => {
        match $p {
            $(
                $prime => {
                    const $P: u32 = $prime;
                    $body
                }
            )+
            other => Err($crate::application::ApplicationError::UnsupportedModulus(other).into()),
        }
    };
}

/// Operation on plain polynomials; operands are unparsed user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyOperation {
    Add(String, String),
    Sub(String, String),
    Mul(String, String),
    DivRem(String, String),
    Pow(String, u32),
    Eval(String, i64),
    Gcd(String, String),
    Irreducible(String),
}

/// Operation in `F[x]/(f)`; operands are unparsed user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingOperation {
    Add(String, String),
    Sub(String, String),
    Mul(String, String),
    Div(String, String),
    Inverse(String),
    Pow(String, u32),
}

/// One labelled line of calculator output, e.g. `A + B = x + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub expression: String,
    pub result: String,
}

impl Calculation {
    fn new(expression: impl Into<String>, result: impl ToString) -> Self {
        Self {
            expression: expression.into(),
            result: result.to_string(),
        }
    }
}

type Zp<const P: u32> = ModInt<P>;

/// Calculator over the prime field `Z_P`.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorService<const P: u32> {
    irreducibility_limit: u64,
}

impl<const P: u32> CalculatorService<P> {
    /// `irreducibility_limit` caps the number of trial divisors an
    /// irreducibility check may try.
    pub fn new(irreducibility_limit: u64) -> Self {
        Self {
            irreducibility_limit,
        }
    }

    pub fn parse(&self, input: &str) -> ApplicationResult<Polynomial<Zp<P>>> {
        parse_polynomial(input)
    }

    /// Irreducibility of `f` over `Z_P`, refusing searches above the limit.
    pub fn check_irreducible(&self, f: &Polynomial<Zp<P>>) -> ApplicationResult<bool> {
        let degree = f.degree().unwrap_or(0);
        let candidates = candidate_count(degree, P);
        if candidates > self.irreducibility_limit {
            return Err(ApplicationError::SearchTooLarge {
                candidates,
                limit: self.irreducibility_limit,
            });
        }
        Ok(is_irreducible(f))
    }

    /// Parse and accept `input` as a factor-ring modulus.
    ///
    /// The modulus must be irreducible so that `Z_P[x]/(f)` is a field.
    #[instrument(level = "debug", skip(self))]
    pub fn modulus(&self, input: &str) -> ApplicationResult<Polynomial<Zp<P>>> {
        let f = self.parse(input)?;
        if f.is_zero() {
            return Err(crate::domain::DomainError::DivisionByZero.into());
        }
        if !self.check_irreducible(&f)? {
            return Err(ApplicationError::ReducibleModulus {
                poly: f.to_string(),
                prime: P,
            });
        }
        debug!(modulus = %f, "accepted factor ring modulus");
        Ok(f)
    }

    /// Parse a ring element with at most `deg f` coefficients.
    pub fn element(
        &self,
        modulus: &Polynomial<Zp<P>>,
        input: &str,
    ) -> ApplicationResult<FactorRingElement<Zp<P>>> {
        let max = modulus.degree().unwrap_or(0);
        let poly = self.parse(input)?;
        let given = coefficient_count(input).unwrap_or_else(|| poly.coeffs().len());
        if given > max {
            return Err(ApplicationError::ElementTooLarge { given, max });
        }
        Ok(FactorRingElement::new(poly, modulus.clone())?)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run_poly(&self, op: &PolyOperation) -> ApplicationResult<Vec<Calculation>> {
        let out = match op {
            PolyOperation::Add(a, b) => {
                let (a, b) = (self.parse(a)?, self.parse(b)?);
                vec![Calculation::new("A + B", &a + &b)]
            }
            PolyOperation::Sub(a, b) => {
                let (a, b) = (self.parse(a)?, self.parse(b)?);
                vec![Calculation::new("A - B", &a - &b)]
            }
            PolyOperation::Mul(a, b) => {
                let (a, b) = (self.parse(a)?, self.parse(b)?);
                vec![Calculation::new("A * B", &a * &b)]
            }
            PolyOperation::DivRem(a, b) => {
                let (a, b) = (self.parse(a)?, self.parse(b)?);
                let (q, r) = a.div_rem(&b)?;
                vec![
                    Calculation::new("A / B", q),
                    Calculation::new("A % B", r),
                ]
            }
            PolyOperation::Pow(a, n) => {
                let a = self.parse(a)?;
                check_power_degree(&a, *n)?;
                vec![Calculation::new(format!("A^{n}"), a.pow(*n))]
            }
            PolyOperation::Eval(a, x) => {
                let a = self.parse(a)?;
                let x = Zp::<P>::new(*x);
                vec![Calculation::new(format!("A({x})"), a.evaluate(x))]
            }
            PolyOperation::Gcd(a, b) => {
                let (a, b) = (self.parse(a)?, self.parse(b)?);
                let (g, _, _) = Polynomial::extended_gcd(&a, &b)?;
                vec![Calculation::new("gcd(A, B)", g.monic())]
            }
            PolyOperation::Irreducible(a) => {
                let a = self.parse(a)?;
                let verdict = if self.check_irreducible(&a)? {
                    "irreducible"
                } else {
                    "reducible"
                };
                vec![Calculation::new(format!("{a} over Z{P}"), verdict)]
            }
        };
        Ok(out)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run_ring(&self, modulus: &str, op: &RingOperation) -> ApplicationResult<Vec<Calculation>> {
        let f = self.modulus(modulus)?;
        let element = |input: &str| self.element(&f, input);

        let out = match op {
            RingOperation::Add(a, b) => {
                Calculation::new("A + B", element(a)?.try_add(&element(b)?)?)
            }
            RingOperation::Sub(a, b) => {
                Calculation::new("A - B", element(a)?.try_sub(&element(b)?)?)
            }
            RingOperation::Mul(a, b) => {
                Calculation::new("A * B", element(a)?.try_mul(&element(b)?)?)
            }
            RingOperation::Div(a, b) => {
                Calculation::new("A / B", element(a)?.try_div(&element(b)?)?)
            }
            RingOperation::Inverse(a) => Calculation::new("A^-1", element(a)?.inverse()?),
            RingOperation::Pow(a, n) => Calculation::new(format!("A^{n}"), element(a)?.pow(*n)?),
        };
        Ok(vec![out])
    }
}

/// Refuse powers whose result would exceed [`MAX_DEGREE`].
fn check_power_degree<const P: u32>(a: &Polynomial<Zp<P>>, exp: u32) -> ApplicationResult<()> {
    let degree = a.degree().map_or(0, |d| d as u64);
    let total = degree.saturating_mul(u64::from(exp));
    if total > MAX_DEGREE as u64 {
        return Err(ApplicationError::DegreeTooLarge {
            degree: total,
            max: MAX_DEGREE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_supported_prime_when_dispatching_then_binds_const() {
        let result: ApplicationResult<u32> = with_prime!(7, P => Ok(P * 2));
        assert_eq!(result.unwrap(), 14);
    }

    #[test]
    fn given_composite_when_dispatching_then_unsupported_modulus() {
        let result: ApplicationResult<u32> = with_prime!(6, P => Ok(P));
        assert!(matches!(
            result,
            Err(ApplicationError::UnsupportedModulus(6))
        ));
    }

    #[test]
    fn given_supported_primes_when_listing_then_all_dispatch() {
        for p in SUPPORTED_PRIMES {
            let result: ApplicationResult<u32> = with_prime!(p, P => Ok(P));
            assert_eq!(result.unwrap(), p);
        }
    }
}
