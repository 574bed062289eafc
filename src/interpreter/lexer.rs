use std::ops::Range;

use log::{debug, trace};
use logos::Logos;

use crate::interpreter::token::{Operator, Token};

/// A flat lexical unit recognised by the scanner.
///
/// Lexemes are the raw material for [`tokenize`]: parentheses are still
/// separate here and signs are not yet attached to numbers. Whitespace
/// (space, tab, newline, carriage return) never produces a lexeme.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Unsigned decimal literals such as `42`, `4.5`, `5.`, `.5` or `2,25`.
    #[regex(r"[0-9]+([.,][0-9]*)?")]
    #[regex(r"[.,][0-9]+")]
    Number,
    /// Any accepted operator glyph, already mapped to its kind.
    #[regex(r"[+\-*/:•×÷]", |lex| lex.slice().chars().next().and_then(Operator::from_glyph))]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single character.
    #[regex(r".", priority = 0)]
    Unknown,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Ignored,
}

/// A lexeme together with the text and byte span it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed<'s> {
    /// What was recognised.
    pub lexeme: Lexeme,
    /// The matched source text.
    pub slice:  &'s str,
    /// Byte range of `slice` in the source.
    pub span:   Range<usize>,
}

/// Scans `input` into flat lexemes.
///
/// Scanning never fails: characters the scanner does not recognise come back
/// as [`Lexeme::Unknown`], one character at a time, multi-byte characters
/// included.
#[must_use]
pub fn scan(input: &str) -> Vec<Lexed<'_>> {
    Lexeme::lexer(input).spanned()
                        .map(|(result, span)| Lexed { lexeme: result.unwrap_or(Lexeme::Unknown),
                                                      slice:  &input[span.clone()],
                                                      span, })
                        .collect()
}

/// Returns how deeply the parentheses in `input` nest, without building a
/// token tree.
///
/// For balanced input this equals [`depth`](crate::interpreter::token::depth)
/// of the tokenized expression. A `)` that closes nothing is ignored and an
/// unclosed `(` still counts, so for unbalanced input the result is an upper
/// bound. Nothing here recurses, which makes it safe to call on input of any
/// depth before deciding whether to tokenize it.
///
/// # Example
/// ```
/// use mate::interpreter::lexer::nesting;
///
/// assert_eq!(nesting("1 + 2"), 0);
/// assert_eq!(nesting("(1 + (2 * 3)) - (4)"), 2);
/// assert_eq!(nesting(")) ((1"), 2);
/// ```
#[must_use]
pub fn nesting(input: &str) -> usize {
    let mut level = 0usize;
    let mut deepest = 0;

    for lexeme in Lexeme::lexer(input) {
        match lexeme {
            Ok(Lexeme::LParen) => {
                level += 1;
                deepest = deepest.max(level);
            },
            Ok(Lexeme::RParen) => level = level.saturating_sub(1),
            _ => {},
        }
    }

    deepest
}

/// Converts an arithmetic expression into a token tree.
///
/// Parenthesised runs are folded into [`Token::SubExpression`] tokens whose
/// nesting mirrors the parentheses exactly. A `+` or `-` written directly in
/// front of a number becomes part of that number when nothing that could act
/// as a left operand precedes it in the same group, so `2 + -4.5` yields
/// `[2, +, -4.5]` while `2 -4` yields `[2, -, 4]`. A `,` decimal point is
/// normalised to `.`.
///
/// Tokenizing never fails. Unrecognised characters become
/// [`Token::Illegal`], as do a `(` that is never closed (its contents follow
/// it at the same level) and a `)` that closes nothing. Rejecting those is
/// left to the evaluator.
///
/// # Example
/// ```
/// use mate::{interpreter::token::{Operator, Token}, tokenize};
///
/// assert_eq!(tokenize("2 + -4,5"),
///            vec![Token::number("2"),
///                 Token::Operator(Operator::Plus),
///                 Token::number("-4.5")]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let lexemes = scan(input);
    let mut lexemes = lexemes.iter().peekable();

    // One frame per open parenthesis; the bottom frame is the top level.
    let mut frames: Vec<Vec<Token>> = vec![Vec::new()];

    while let Some(lexed) = lexemes.next() {
        trace!("lexeme {:?} '{}' at {:?}", lexed.lexeme, lexed.slice, lexed.span);

        match lexed.lexeme {
            Lexeme::LParen => frames.push(Vec::new()),
            Lexeme::RParen => {
                if frames.len() > 1 {
                    let children = frames.pop().unwrap_or_default();
                    push(&mut frames, Token::SubExpression(children));
                } else {
                    push(&mut frames, Token::illegal(lexed.slice));
                }
            },
            Lexeme::Number => push(&mut frames, Token::Number(normalize(lexed.slice))),
            Lexeme::Operator(op) => {
                let follows_operand = current(&frames).last().is_some_and(Token::is_operand);
                let signed = matches!(op, Operator::Plus | Operator::Minus) && !follows_operand;

                match lexemes.peek().copied() {
                    Some(next) if signed
                                  && next.lexeme == Lexeme::Number
                                  && next.span.start == lexed.span.end =>
                    {
                        let literal = format!("{}{}", lexed.slice, normalize(next.slice));
                        lexemes.next();
                        push(&mut frames, Token::Number(literal));
                    },
                    _ => push(&mut frames, Token::Operator(op)),
                }
            },
            Lexeme::Unknown => push(&mut frames, Token::illegal(lexed.slice)),
            Lexeme::Ignored => {},
        }
    }

    // Groups still open at the end of input were never closed.
    while frames.len() > 1 {
        let children = frames.pop().unwrap_or_default();
        if let Some(parent) = frames.last_mut() {
            parent.push(Token::illegal("("));
            parent.extend(children);
        }
    }

    let tokens = frames.pop().unwrap_or_default();
    debug!("tokenized {input:?} into {} top-level tokens", tokens.len());
    tokens
}

fn normalize(literal: &str) -> String {
    literal.replace(',', ".")
}

fn current(frames: &[Vec<Token>]) -> &[Token] {
    frames.last().map_or(&[], Vec::as_slice)
}

fn push(frames: &mut [Vec<Token>], token: Token) {
    trace!("token {token}");
    if let Some(frame) = frames.last_mut() {
        frame.push(token);
    }
}
