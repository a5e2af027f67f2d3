//! Factor ring Z5[x]/(x^2 + 2)

use polycalc::domain::{DomainError, FactorRingElement, ModInt, Polynomial};

type Z5 = ModInt<5>;
type Element = FactorRingElement<Z5>;

fn z5(coeffs: &[i64]) -> Polynomial<Z5> {
    Polynomial::new(coeffs.iter().map(|&c| Z5::new(c)).collect())
}

/// x^2 + 2, irreducible over Z5
fn modulus() -> Polynomial<Z5> {
    z5(&[2, 0, 1])
}

fn element(coeffs: &[i64]) -> Element {
    FactorRingElement::new(z5(coeffs), modulus()).unwrap()
}

#[test]
fn given_reduced_polynomial_when_constructing_then_kept_as_is() {
    let e = element(&[3, 4]);
    assert_eq!(e.poly(), &z5(&[3, 4]));
    assert_eq!(e.modulus(), &modulus());
}

#[test]
fn given_polynomial_of_modulus_degree_when_constructing_then_reduced() {
    // x^2 + 1 = -1 (mod x^2 + 2)
    let e = element(&[1, 0, 1]);
    assert_eq!(e.poly(), &z5(&[4]));
}

#[test]
fn given_zero_modulus_when_constructing_then_division_by_zero() {
    let result = FactorRingElement::new(z5(&[1]), Polynomial::zero());
    assert_eq!(result, Err(DomainError::DivisionByZero));
}

#[test]
fn given_additive_inverses_when_adding_then_zero() {
    let sum = element(&[3, 4]).try_add(&element(&[2, 1])).unwrap();
    assert!(sum.poly().is_zero());
}

#[test]
fn given_elements_when_subtracting_then_difference() {
    let diff = element(&[3, 4]).try_sub(&element(&[2, 1])).unwrap();
    assert_eq!(diff.poly(), &z5(&[1, 3]));
}

#[test]
fn given_elements_when_multiplying_then_product_reduced() {
    // (3 + 4x)(2 + x) = 6 + 11x + 4x^2 = 3 + x
    let product = element(&[3, 4]).try_mul(&element(&[2, 1])).unwrap();
    assert_eq!(product.poly(), &z5(&[3, 1]));
}

#[test]
fn given_element_when_inverting_then_product_is_one() {
    let a = element(&[3, 4]);
    let inverse = a.inverse().unwrap();

    assert_eq!(inverse.poly(), &z5(&[3, 1]));
    assert_eq!(a.try_mul(&inverse).unwrap().poly(), &z5(&[1]));
}

#[test]
fn given_zero_element_when_inverting_then_not_invertible() {
    let result = element(&[]).inverse();
    assert!(matches!(result, Err(DomainError::NotInvertible { .. })));
}

#[test]
fn given_reducible_modulus_when_inverting_factor_then_not_invertible() {
    // x^2 + 1 = (x + 2)(x + 3) over Z5
    let a = FactorRingElement::new(z5(&[2, 1]), z5(&[1, 0, 1])).unwrap();
    assert!(matches!(
        a.inverse(),
        Err(DomainError::NotInvertible { .. })
    ));
}

#[test]
fn given_elements_when_dividing_then_multiplies_by_inverse() {
    // (2 + x)^-1 = 2 + 4x, (3 + 4x)(2 + 4x) = 4
    let quotient = element(&[3, 4]).try_div(&element(&[2, 1])).unwrap();
    assert_eq!(quotient.poly(), &z5(&[4]));
}

#[test]
fn given_zero_divisor_when_dividing_then_not_invertible() {
    let result = element(&[3, 4]).try_div(&element(&[]));
    assert!(matches!(result, Err(DomainError::NotInvertible { .. })));
}

#[test]
fn given_element_when_raising_to_power_then_repeated_product() {
    let a = element(&[3, 4]);
    assert_eq!(a.pow(0).unwrap().poly(), &z5(&[1]));
    assert_eq!(a.pow(1).unwrap(), a);
    assert_eq!(a.pow(2).unwrap().poly(), &z5(&[2, 4]));
    assert_eq!(a.pow(3).unwrap(), a.try_mul(&a).unwrap().try_mul(&a).unwrap());
}

#[test]
fn given_nonzero_element_when_raising_to_group_order_then_one() {
    // the multiplicative group of GF(25) has order 24
    let a = element(&[1, 2]);
    assert_eq!(a.pow(24).unwrap().poly(), &z5(&[1]));
}

#[test]
fn given_different_moduli_when_combining_then_modulus_mismatch() {
    let a = element(&[1, 1]);
    let b = FactorRingElement::new(z5(&[1, 1]), z5(&[3, 0, 1])).unwrap();

    assert_eq!(
        a.try_add(&b),
        Err(DomainError::ModulusMismatch {
            operation: "addition"
        })
    );
    assert_eq!(
        a.try_sub(&b),
        Err(DomainError::ModulusMismatch {
            operation: "subtraction"
        })
    );
    assert_eq!(
        a.try_mul(&b),
        Err(DomainError::ModulusMismatch {
            operation: "multiplication"
        })
    );
    assert_eq!(
        a.try_div(&b),
        Err(DomainError::ModulusMismatch {
            operation: "division"
        })
    );
}

#[test]
fn given_element_when_displaying_then_shows_representative() {
    assert_eq!(element(&[3, 4]).to_string(), "4*x + 3");
}
