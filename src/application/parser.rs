//! Polynomial input parsing
//!
//! Two notations are accepted:
//! - coefficient lists, constant term first: `2 0 1` or `2, 0, 1`
//! - expressions in `x`: `x^2 + 2`, `3*x^2 - x + 4`, `2x`
//!
//! Input containing `x` is read as an expression.

use regex::Regex;
use tracing::trace;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Coefficient, Polynomial};

/// Highest exponent accepted in an expression.
pub const MAX_DEGREE: usize = 4096;

/// Parse either notation into a polynomial over `T`.
pub fn parse_polynomial<T>(input: &str) -> ApplicationResult<Polynomial<T>>
where
    T: Coefficient + From<i64>,
{
    if input.contains(['x', 'X']) {
        parse_expression(input)
    } else {
        parse_coefficients(input)
    }
}

/// Number of coefficients typed in a coefficient list, `None` for expressions.
///
/// Trailing zeros count: `1 2 0` has three coefficients.
pub fn coefficient_count(input: &str) -> Option<usize> {
    if input.contains(['x', 'X']) {
        return None;
    }
    Some(split_list(input).count())
}

fn split_list(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

fn parse_error(input: &str, message: impl Into<String>) -> ApplicationError {
    ApplicationError::Parse {
        input: input.to_string(),
        message: message.into(),
    }
}

/// Parse a coefficient list, constant term first.
pub fn parse_coefficients<T>(input: &str) -> ApplicationResult<Polynomial<T>>
where
    T: Coefficient + From<i64>,
{
    let coeffs = split_list(input)
        .map(|token| {
            token
                .parse::<i64>()
                .map(T::from)
                .map_err(|_| parse_error(input, format!("'{token}' is not an integer")))
        })
        .collect::<ApplicationResult<Vec<T>>>()?;

    if coeffs.is_empty() {
        return Err(parse_error(input, "no coefficients given"));
    }
    Ok(Polynomial::new(coeffs))
}

/// Parse a sum of terms `c*x^n`; repeated powers are added together.
pub fn parse_expression<T>(input: &str) -> ApplicationResult<Polynomial<T>>
where
    T: Coefficient + From<i64>,
{
    let term_re = Regex::new(r"^(?:(\d+)\*?)?[xX](?:\^(\d+))?$|^(\d+)$").map_err(|e| {
        ApplicationError::OperationFailed {
            context: "compile term pattern".to_string(),
            source: Box::new(e),
        }
    })?;

    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(parse_error(input, "empty expression"));
    }

    let mut result = Polynomial::zero();
    for (negative, term) in signed_terms(&compact) {
        if term.is_empty() {
            return Err(parse_error(input, "missing term around sign"));
        }
        let caps = term_re
            .captures(term)
            .ok_or_else(|| parse_error(input, format!("unrecognized term '{term}'")))?;

        let number = |idx: usize| -> ApplicationResult<Option<u64>> {
            caps.get(idx)
                .map(|m| {
                    m.as_str()
                        .parse::<u64>()
                        .map_err(|_| parse_error(input, format!("number out of range in '{term}'")))
                })
                .transpose()
        };

        let (coefficient, power) = match number(3)? {
            Some(constant) => (constant, 0),
            None => (number(1)?.unwrap_or(1), number(2)?.unwrap_or(1)),
        };
        let power = usize::try_from(power)
            .ok()
            .filter(|&p| p <= MAX_DEGREE)
            .ok_or_else(|| {
                parse_error(input, format!("exponent in '{term}' exceeds {MAX_DEGREE}"))
            })?;
        let coefficient = i64::try_from(coefficient)
            .map_err(|_| parse_error(input, format!("number out of range in '{term}'")))?;
        let coefficient = if negative { -coefficient } else { coefficient };

        trace!(term, coefficient, power, "parsed term");
        result += &Polynomial::monomial(T::from(coefficient), power);
    }
    Ok(result)
}

/// Split at top-level `+`/`-`, keeping each term's sign.
fn signed_terms(compact: &str) -> Vec<(bool, &str)> {
    let mut terms = Vec::new();
    let mut negative = false;
    let mut start = 0;
    for (i, c) in compact.char_indices() {
        if c == '+' || c == '-' {
            if i > 0 {
                terms.push((negative, &compact[start..i]));
            } else if compact.len() == 1 {
                terms.push((negative, ""));
            }
            negative = c == '-';
            start = i + 1;
        }
    }
    terms.push((negative, &compact[start..]));
    terms
}
