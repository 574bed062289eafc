use log::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::token::{Operator, Token},
    util::num::literal_to_f64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the first failure encountered.
pub type EvalResult<T> = Result<T, EvalError>;

/// Folds a token sequence into a single number.
///
/// The sequence is read as `operand operator operand operator ...`, where an
/// operand is a `Number` or a `SubExpression` (evaluated recursively). The
/// running total starts at `0` and the first operand is added to it, then
/// every following operand is combined with the total using the operator in
/// front of it.
///
/// There is no operator precedence: `2 + 3 * 4` folds as `((0 + 2) + 3) * 4`
/// and yields `20`. Only parentheses group. A sequence made of a single
/// `SubExpression` evaluates exactly like its contents. Division by zero
/// follows IEEE-754 and yields an infinity or `NaN`.
///
/// # Errors
/// Evaluation stops at the first problem found:
/// - `EmptyExpression` if `tokens` (or any group inside it) is empty.
/// - `IllegalToken` if an operand position holds an `Illegal` token.
/// - `MissingOperand` if an operand position is absent or holds an operator.
/// - `MissingOperator` if two operands are not separated by an operator,
///   either because they follow each other directly or because an `Illegal`
///   token sits between them.
/// - `NumberParseFailure` if a `Number` literal is not a decimal number.
///
/// Errors from nested groups are returned unchanged.
///
/// # Example
/// ```
/// use mate::{evaluate, tokenize};
///
/// assert_eq!(evaluate(&tokenize("2 + 4.5 - 5")), Ok(1.5));
/// assert_eq!(evaluate(&tokenize("2 + 3 * 4")), Ok(20.0));
/// assert_eq!(evaluate(&tokenize("2 + (3 * 4)")), Ok(14.0));
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    if let [Token::SubExpression(inner)] = tokens {
        return evaluate(inner);
    }
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut total = 0.0;
    let mut op = Operator::Plus;
    let mut index = 0;

    loop {
        let value = match tokens.get(index) {
            Some(token) => operand(token, index)?,
            None => return Err(EvalError::MissingOperand { index }),
        };

        trace!("{total} {op} {value}");
        total = op.apply(total, value);
        index += 1;

        match tokens.get(index) {
            None => break,
            Some(Token::Operator(next)) => {
                op = *next;
                index += 1;
            },
            Some(token @ (Token::Number(_) | Token::SubExpression(_))) => {
                return Err(EvalError::MissingOperator { left:  value,
                                                        right: operand(token, index)?, });
            },
            Some(Token::Illegal(_)) => {
                let right = tokens.get(index + 1)
                                  .ok_or(EvalError::MissingOperand { index: index + 1 })?;
                return Err(EvalError::MissingOperator { left:  value,
                                                        right: operand(right, index + 1)?, });
            },
        }
    }

    debug!("evaluated {} tokens to {total}", tokens.len());
    Ok(total)
}

/// Resolves the token in operand position `index` to its value.
fn operand(token: &Token, index: usize) -> EvalResult<f64> {
    match token {
        Token::Number(literal) => literal_to_f64(literal),
        Token::SubExpression(children) => evaluate(children),
        Token::Illegal(literal) => Err(EvalError::IllegalToken { index,
                                                                 literal: literal.clone() }),
        Token::Operator(_) => Err(EvalError::MissingOperand { index }),
    }
}
