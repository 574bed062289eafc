/// Core folding logic.
///
/// Contains the left-to-right fold over a token sequence, operand resolution
/// and error propagation out of nested groups.
pub mod core;

/// Scalar arithmetic.
///
/// Applies an operator to two `f64` values.
pub mod scalar;
