use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Checks whether `literal` is a plain decimal number.
///
/// Accepted: an optional leading `+` or `-`, then digits with at most one
/// decimal point (`.` or `,`) anywhere among them, and at least one digit.
/// Exponents, `inf`, `NaN` and embedded whitespace are rejected.
///
/// ## Example
/// ```
/// use mate::util::num::is_decimal_literal;
///
/// assert!(is_decimal_literal("-4.5"));
/// assert!(is_decimal_literal(".5"));
/// assert!(is_decimal_literal("5,"));
/// assert!(!is_decimal_literal("."));
/// assert!(!is_decimal_literal("1.2.3"));
/// assert!(!is_decimal_literal("inf"));
/// assert!(!is_decimal_literal("1e5"));
/// ```
#[must_use]
pub fn is_decimal_literal(literal: &str) -> bool {
    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);

    let mut digits = 0usize;
    let mut points = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' => points += 1,
            _ => return false,
        }
    }

    digits > 0 && points <= 1
}

/// Converts a number literal to `f64`.
///
/// A `,` decimal point is read as `.`. Literals too large for `f64` become
/// infinite, exactly as the standard float parser does.
///
/// ## Errors
/// Returns `EvalError::NumberParseFailure` if `literal` is not a plain decimal
/// number (see [`is_decimal_literal`]).
///
/// ## Example
/// ```
/// use mate::{error::EvalError, util::num::literal_to_f64};
///
/// assert_eq!(literal_to_f64("-4,5"), Ok(-4.5));
/// assert_eq!(literal_to_f64("12."), Ok(12.0));
/// assert_eq!(literal_to_f64("NaN"),
///            Err(EvalError::NumberParseFailure { literal: "NaN".to_string() }));
/// ```
pub fn literal_to_f64(literal: &str) -> EvalResult<f64> {
    let failure = || EvalError::NumberParseFailure { literal: literal.to_string() };

    if !is_decimal_literal(literal) {
        return Err(failure());
    }

    literal.replace(',', ".").parse::<f64>().map_err(|_| failure())
}
