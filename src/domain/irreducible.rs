//! Irreducibility over finite fields by exhaustive trial division

use tracing::trace;

use crate::domain::coefficient::FiniteField;
use crate::domain::polynomial::Polynomial;

/// Number of monic trial divisors tried for a polynomial of `degree` over a
/// field with `order` elements: `sum_{d=1}^{degree/2} order^d`.
///
/// Saturates at `u64::MAX`.
pub fn candidate_count(degree: usize, order: u32) -> u64 {
    let mut total: u64 = 0;
    let mut term: u64 = 1;
    for _ in 1..=degree / 2 {
        term = term.saturating_mul(u64::from(order));
        total = total.saturating_add(term);
    }
    total
}

/// Whether `f` cannot be written as a product of two polynomials of lower
/// degree.
///
/// Constants and the zero polynomial are not irreducible; every linear
/// polynomial is. Otherwise any factorization has a monic factor of degree at
/// most `deg f / 2`, and all of those are tried.
pub fn is_irreducible<F: FiniteField>(f: &Polynomial<F>) -> bool {
    let degree = match f.degree() {
        None | Some(0) => return false,
        Some(1) => return true,
        Some(degree) => degree,
    };

    for d in 1..=degree / 2 {
        if MonicCandidates::<F>::new(d).any(|candidate| divides(&candidate, f)) {
            return false;
        }
    }
    true
}

fn divides<F: FiniteField>(candidate: &Polynomial<F>, f: &Polynomial<F>) -> bool {
    match f.remainder(candidate) {
        Ok(r) if r.is_zero() => {
            trace!(divisor = %candidate, "found factor");
            true
        }
        _ => false,
    }
}

/// All monic polynomials of a fixed degree, lower coefficients counting up
/// like an odometer.
struct MonicCandidates<F: FiniteField> {
    digits: Vec<u32>,
    done: bool,
    _field: std::marker::PhantomData<F>,
}

impl<F: FiniteField> MonicCandidates<F> {
    fn new(degree: usize) -> Self {
        Self {
            digits: vec![0; degree],
            done: false,
            _field: std::marker::PhantomData,
        }
    }
}

impl<F: FiniteField> Iterator for MonicCandidates<F> {
    type Item = Polynomial<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut coeffs: Vec<F> = self.digits.iter().map(|&i| F::nth(i)).collect();
        coeffs.push(F::one());

        self.done = true;
        for digit in self.digits.iter_mut() {
            *digit += 1;
            if *digit < F::ORDER {
                self.done = false;
                break;
            }
            *digit = 0;
        }

        Some(Polynomial::new(coeffs))
    }
}
