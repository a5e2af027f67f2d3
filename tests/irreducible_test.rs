//! Irreducibility by trial division over small prime fields

use polycalc::domain::{candidate_count, is_irreducible, ModInt, Polynomial};
use rstest::rstest;

fn poly<const P: u32>(coeffs: &[i64]) -> Polynomial<ModInt<P>> {
    Polynomial::new(coeffs.iter().map(|&c| ModInt::new(c)).collect())
}

#[rstest]
#[case(&[2, 0, 1], true)] // x^2 + 2
#[case(&[3, 0, 1], true)] // x^2 + 3
#[case(&[1, 0, 1], false)] // x^2 + 1 = (x + 2)(x + 3)
#[case(&[0, 0, 1], false)] // x^2
#[case(&[1, 1], true)] // linear
#[case(&[2], false)] // constant
#[case(&[], false)] // zero
#[case(&[2, 0, 2], false)] // 2(x + 2)(x + 3)
#[case(&[4, 0, 2], true)] // 2(x^2 + 2)
fn given_polynomial_over_z5_when_checking_then_classified(
    #[case] coeffs: &[i64],
    #[case] expected: bool,
) {
    assert_eq!(is_irreducible(&poly::<5>(coeffs)), expected);
}

#[rstest]
#[case(&[1, 1, 1], true)] // x^2 + x + 1
#[case(&[1, 1, 0, 1], true)] // x^3 + x + 1
#[case(&[1, 0, 1, 1], true)] // x^3 + x^2 + 1
#[case(&[1, 0, 1, 0, 1], false)] // (x^2 + x + 1)^2
#[case(&[1, 1, 0, 0, 1], true)] // x^4 + x + 1
#[case(&[1, 0, 1], false)] // (x + 1)^2
fn given_polynomial_over_z2_when_checking_then_classified(
    #[case] coeffs: &[i64],
    #[case] expected: bool,
) {
    assert_eq!(is_irreducible(&poly::<2>(coeffs)), expected);
}

#[test]
fn given_x_squared_plus_one_when_checking_over_z3_then_irreducible() {
    assert!(is_irreducible(&poly::<3>(&[1, 0, 1])));
}

#[test]
fn given_product_of_quadratics_when_checking_over_z3_then_reducible() {
    // no linear factor, but (x^2 + 1)(x^2 + x + 2)
    let f = &poly::<3>(&[1, 0, 1]) * &poly::<3>(&[2, 1, 1]);
    assert!(is_irreducible(&poly::<3>(&[2, 1, 1])));
    assert!(!is_irreducible(&f));
}

#[rstest]
#[case(1, 5, 0)]
#[case(2, 5, 5)]
#[case(4, 5, 30)]
#[case(5, 2, 6)]
#[case(200, 97, u64::MAX)]
fn given_degree_and_order_when_counting_candidates_then_geometric_sum(
    #[case] degree: usize,
    #[case] order: u32,
    #[case] expected: u64,
) {
    assert_eq!(candidate_count(degree, order), expected);
}
