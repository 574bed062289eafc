//! # mate
//!
//! mate evaluates arithmetic expressions written as text: numbers, the four
//! operators `+ - * /`, and parentheses for grouping.
//!
//! Evaluation runs in two stages. The tokenizer turns text into a tree of
//! tokens in which every parenthesised group becomes a single sub-expression
//! token. The evaluator then folds that tree into one `f64`, strictly left to
//! right. There is no operator precedence: `2 + 3 * 4` is `20`, and
//! `2 + (3 * 4)` is `14`.
//!
//! ```
//! use mate::compute;
//!
//! assert_eq!(compute("(4 * 5 - 5) * 2 + (24 / 2)"), Ok(42.0));
//! assert_eq!(compute("(4 * 5 - 5) * 2 + 24 / 2"), Ok(27.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Error types for evaluation.
///
/// This module defines every failure the evaluator can report. Tokenizing
/// never fails, so all errors surface here, each carrying enough context
/// (token index, offending literal, operand values) to explain what went
/// wrong.
pub mod error;
/// The tokenizer, the token model and the evaluator.
///
/// # Responsibilities
/// - Scans raw text into tokens and nests parenthesised groups.
/// - Folds a token tree into a number, rejecting malformed sequences.
pub mod interpreter;
/// Number literal validation and conversion.
pub mod util;

pub use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::{nesting, tokenize},
        token::{Operator, Token},
    },
};

/// Tokenizes and evaluates an expression in one call.
///
/// # Errors
/// Returns the first error the evaluator reports; see [`evaluate`].
///
/// # Examples
/// ```
/// use mate::{EvalError, compute};
///
/// assert_eq!(compute("2 + -4.5 - 5"), Ok(-7.5));
/// assert_eq!(compute("(24 / 4) + 2 - (-2 * -5)"), Ok(-2.0));
///
/// let err = compute("2 2").unwrap_err();
/// assert_eq!(err, EvalError::MissingOperator { left: 2.0, right: 2.0 });
/// ```
pub fn compute(input: &str) -> EvalResult<f64> {
    let tokens = tokenize(input);
    let result = evaluate(&tokens);
    debug!("{input:?} => {result:?}");
    result
}

/// Checks that the parentheses in `input` nest no deeper than `limit`.
///
/// Tokenizing, evaluating and dropping a token tree all walk it
/// recursively, so input from untrusted sources should pass through here
/// first. The check scans the text only.
///
/// # Errors
/// Returns `NestingTooDeep` when the input nests deeper than `limit`.
///
/// # Example
/// ```
/// use mate::{EvalError, check_nesting};
///
/// assert_eq!(check_nesting("((1))", 2), Ok(()));
/// assert_eq!(check_nesting("((1))", 1),
///            Err(EvalError::NestingTooDeep { depth: 2, limit: 1 }));
/// ```
pub fn check_nesting(input: &str, limit: usize) -> EvalResult<()> {
    let depth = nesting(input);
    if depth > limit {
        return Err(EvalError::NestingTooDeep { depth, limit });
    }
    Ok(())
}

/// Like [`compute`], but refuses input nested deeper than `limit` before
/// building any tokens.
///
/// # Example
/// ```
/// use mate::compute_with_limit;
///
/// assert_eq!(compute_with_limit("((1 + 2) * 3)", 2), Ok(9.0));
/// assert!(compute_with_limit("((1 + 2) * 3)", 1).is_err());
/// ```
pub fn compute_with_limit(input: &str, limit: usize) -> EvalResult<f64> {
    check_nesting(input, limit)?;
    compute(input)
}

/// Tokenizes and evaluates an expression, reporting failure as `0` plus the
/// error.
///
/// The number is only meaningful when the error is `None`.
///
/// # Example
/// ```
/// use mate::compute_or_zero;
///
/// assert_eq!(compute_or_zero("6 * 7"), (42.0, None));
///
/// let (value, error) = compute_or_zero("&!@");
/// assert_eq!(value, 0.0);
/// assert!(error.is_some());
/// ```
#[must_use]
pub fn compute_or_zero(input: &str) -> (f64, Option<EvalError>) {
    match compute(input) {
        Ok(value) => (value, None),
        Err(e) => (0.0, Some(e)),
    }
}
