/// Evaluation errors.
///
/// Defines every way folding a token sequence into a number can fail:
/// illegal characters in operand position, operands with no operator between
/// them, missing operands, empty groups, and number literals that cannot be
/// converted.
pub mod eval_error;

pub use eval_error::EvalError;
