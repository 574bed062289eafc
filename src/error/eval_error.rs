#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a token sequence.
pub enum EvalError {
    /// An operand position held an unrecognised character.
    ///
    /// The token kind is always `ILLEGAL`, so only the position and the text
    /// are recorded.
    IllegalToken {
        /// Position of the token within its own (possibly nested) sequence.
        index:   usize,
        /// The offending text.
        literal: String,
    },
    /// Two operands appeared next to each other with no operator between
    /// them.
    MissingOperator {
        /// Value of the operand on the left.
        left:  f64,
        /// Value of the operand on the right.
        right: f64,
    },
    /// An operand was expected but the sequence ended or held an operator.
    MissingOperand {
        /// Position where the operand was expected.
        index: usize,
    },
    /// A `Number` token carried a literal that is not a decimal number.
    NumberParseFailure {
        /// The literal that could not be converted.
        literal: String,
    },
    /// There was nothing to evaluate, as in `()` or blank input.
    EmptyExpression,
    /// The parentheses nest deeper than the caller allows.
    NestingTooDeep {
        /// How deeply the input nests.
        depth: usize,
        /// The deepest nesting allowed.
        limit: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalToken { index, literal } => {
                write!(f, "Illegal token '{literal}' at index {index} of the parsed tokens.")
            },
            Self::MissingOperator { left, right } => {
                write!(f, "Missing operation between {left} and {right}.")
            },
            Self::MissingOperand { index } => {
                write!(f, "Expected a number or a group at index {index}.")
            },
            Self::NumberParseFailure { literal } => {
                write!(f, "Could not read '{literal}' as a number.")
            },
            Self::EmptyExpression => write!(f, "Nothing to evaluate."),
            Self::NestingTooDeep { depth, limit } => {
                write!(f, "Parentheses nest {depth} deep, the limit is {limit}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
