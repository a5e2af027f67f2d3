//! Polynomial input parsing

use polycalc::application::{
    coefficient_count, parse_coefficients, parse_expression, parse_polynomial, ApplicationError,
};
use polycalc::domain::{ModInt, Polynomial};
use rstest::rstest;

type Z5 = ModInt<5>;

fn z5(coeffs: &[i64]) -> Polynomial<Z5> {
    Polynomial::new(coeffs.iter().map(|&c| Z5::new(c)).collect())
}

#[rstest]
#[case("2 0 1", &[2, 0, 1])]
#[case("2,0,1", &[2, 0, 1])]
#[case(" 2, 0 ,  1 ", &[2, 0, 1])]
#[case("-1 6", &[4, 1])]
#[case("1 2 0 0", &[1, 2])]
#[case("0", &[])]
fn given_coefficient_list_when_parsing_then_constant_term_first(
    #[case] input: &str,
    #[case] expected: &[i64],
) {
    assert_eq!(parse_coefficients::<Z5>(input).unwrap(), z5(expected));
}

#[rstest]
#[case("x^2 + 2", &[2, 0, 1])]
#[case("3*x^2 - x + 4", &[4, -1, 3])]
#[case("2x", &[0, 2])]
#[case("X^3", &[0, 0, 0, 1])]
#[case("-x + 1", &[1, -1])]
#[case("x + x", &[0, 2])]
#[case("7", &[2])]
fn given_expression_when_parsing_then_terms_summed(
    #[case] input: &str,
    #[case] expected: &[i64],
) {
    assert_eq!(parse_expression::<Z5>(input).unwrap(), z5(expected));
}

#[test]
fn given_input_with_x_when_parsing_then_reads_expression() {
    assert_eq!(parse_polynomial::<Z5>("x + 1").unwrap(), z5(&[1, 1]));
    assert_eq!(parse_polynomial::<Z5>("1 1").unwrap(), z5(&[1, 1]));
}

#[rstest]
#[case("")]
#[case("1 a 2")]
#[case("1.5")]
fn given_bad_coefficient_list_when_parsing_then_parse_error(#[case] input: &str) {
    assert!(matches!(
        parse_coefficients::<Z5>(input),
        Err(ApplicationError::Parse { .. })
    ));
}

#[rstest]
#[case("x^")]
#[case("x +")]
#[case("2**x")]
#[case("x^2 + y")]
#[case("x^99999")]
fn given_bad_expression_when_parsing_then_parse_error(#[case] input: &str) {
    assert!(matches!(
        parse_expression::<Z5>(input),
        Err(ApplicationError::Parse { .. })
    ));
}

#[test]
fn given_inputs_when_counting_coefficients_then_trailing_zeros_count() {
    assert_eq!(coefficient_count("1 2 0"), Some(3));
    assert_eq!(coefficient_count("1,2"), Some(2));
    assert_eq!(coefficient_count("x + 1"), None);
}
