/// The evaluator module folds token trees into numbers.
///
/// The evaluator walks a token sequence left to right, resolving operands
/// (recursing into parenthesised groups) and combining them with the
/// operator in front of each. It is the only place where invalid input is
/// rejected.
///
/// # Responsibilities
/// - Reduces a token sequence to a single `f64`.
/// - Reports illegal tokens, missing operators and missing operands.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads raw text and produces tokens for numbers, operators and
/// illegal characters, nesting every parenthesised run into a single
/// sub-expression token. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Scans characters (not bytes) into lexemes, skipping whitespace.
/// - Attaches a leading sign to a number where no left operand precedes it.
/// - Groups parentheses into sub-expressions without ever failing.
pub mod lexer;
/// The token module defines what the lexer produces.
///
/// # Responsibilities
/// - Defines the `Token` and `Operator` enums.
/// - Maps operator glyphs to operators and back.
/// - Measures nesting depth and renders token trees for display.
pub mod token;
