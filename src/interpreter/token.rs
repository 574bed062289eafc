use std::fmt;

/// A binary arithmetic operator.
///
/// Every operator glyph accepted in source text maps onto one of these four
/// kinds. Synonyms (`•`, `×` for multiplication and `:`, `÷` for division)
/// collapse onto the same kind, so consumers never look at raw glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`, `•` or `×`
    Times,
    /// `/`, `:` or `÷`
    Divide,
}

impl Operator {
    /// Looks up the operator denoted by a single glyph.
    ///
    /// # Returns
    /// - `Some(Operator)` if `glyph` is a recognised operator glyph.
    /// - `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use mate::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::from_glyph('•'), Some(Operator::Times));
    /// assert_eq!(Operator::from_glyph(':'), Some(Operator::Divide));
    /// assert_eq!(Operator::from_glyph('%'), None);
    /// ```
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' | '•' | '×' => Some(Self::Times),
            '/' | ':' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the canonical glyph used when printing this operator.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Times => '*',
            Self::Divide => '/',
        }
    }

    /// Upper-case name shown in token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A classified fragment of an arithmetic expression.
///
/// Tokens form a tree: a `SubExpression` exclusively owns the tokens found
/// between a matching pair of parentheses. There are no back references, and
/// tokens are never mutated after the tokenizer produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A decimal literal such as `42`, `-4.5` or `.5`.
    ///
    /// The literal keeps its sign and always uses `.` as the decimal point.
    Number(String),
    /// One of the four arithmetic operators.
    Operator(Operator),
    /// A parenthesised group and the tokens it contains.
    SubExpression(Vec<Token>),
    /// A character that is not part of the expression language.
    Illegal(String),
}

impl Token {
    /// Builds a `Number` token from a literal.
    pub fn number(literal: impl Into<String>) -> Self {
        Self::Number(literal.into())
    }

    /// Builds an `Illegal` token from the offending text.
    pub fn illegal(literal: impl Into<String>) -> Self {
        Self::Illegal(literal.into())
    }

    /// Returns `true` for tokens that may stand in an operand position.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::SubExpression(_))
    }

    /// Upper-case kind name shown in token listings and error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Operator(op) => op.name(),
            Self::SubExpression(_) => "SUB-EXPRESSION",
            Self::Illegal(_) => "ILLEGAL",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) | Self::Illegal(literal) => {
                write!(f, "{}({literal})", self.kind())
            },
            Self::Operator(_) => write!(f, "{}", self.kind()),
            Self::SubExpression(children) => write!(f, "{}[{}]", self.kind(), children.len()),
        }
    }
}

/// Returns the deepest `SubExpression` nesting found in `tokens`.
///
/// A flat sequence has depth `0`; `(1)` has depth `1`; `((1))` has depth `2`.
/// The walk uses an explicit stack, so it is safe to call on arbitrarily deep
/// input before deciding whether to evaluate it.
///
/// # Example
/// ```
/// use mate::{interpreter::token::depth, tokenize};
///
/// assert_eq!(depth(&tokenize("1 + 2")), 0);
/// assert_eq!(depth(&tokenize("(1 + (2 * 3)) - (4)")), 2);
/// ```
#[must_use]
pub fn depth(tokens: &[Token]) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&[Token], usize)> = vec![(tokens, 0)];

    while let Some((sequence, level)) = pending.pop() {
        deepest = deepest.max(level);
        for token in sequence {
            if let Token::SubExpression(children) = token {
                pending.push((children.as_slice(), level + 1));
            }
        }
    }

    deepest
}

/// Renders a token sequence as an indented listing, one token per line.
///
/// Children of a `SubExpression` are indented by two spaces per nesting
/// level.
///
/// # Example
/// ```
/// use mate::{interpreter::token::render_tree, tokenize};
///
/// let listing = render_tree(&tokenize("(24 / 2) + 1"));
/// assert_eq!(listing,
///            "SUB-EXPRESSION\n  NUMBER(24)\n  DIVIDE\n  NUMBER(2)\nPLUS\nNUMBER(1)\n");
/// ```
#[must_use]
pub fn render_tree(tokens: &[Token]) -> String {
    fn walk(tokens: &[Token], level: usize, out: &mut String) {
        for token in tokens {
            out.push_str(&"  ".repeat(level));
            match token {
                Token::SubExpression(children) => {
                    out.push_str(token.kind());
                    out.push('\n');
                    walk(children, level + 1, out);
                },
                _ => {
                    out.push_str(&token.to_string());
                    out.push('\n');
                },
            }
        }
    }

    let mut out = String::new();
    walk(tokens, 0, &mut out);
    out
}

/// Writes a token sequence back out as expression text using canonical
/// glyphs.
///
/// # Example
/// ```
/// use mate::{interpreter::token::render_expression, tokenize};
///
/// assert_eq!(render_expression(&tokenize("(4•5 - 5) : 2,5")), "(4 * 5 - 5) / 2.5");
/// ```
#[must_use]
pub fn render_expression(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|token| match token {
              Token::Number(literal) | Token::Illegal(literal) => literal.clone(),
              Token::Operator(op) => op.glyph().to_string(),
              Token::SubExpression(children) => format!("({})", render_expression(children)),
          })
          .collect::<Vec<_>>()
          .join(" ")
}
