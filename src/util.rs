/// Number literal helpers.
///
/// Checks that a literal has the shape the tokenizer promises (optional sign,
/// digits, at most one decimal point) and converts it to `f64`, reporting a
/// typed error instead of panicking or silently defaulting when it does not.
pub mod num;
