//! Token filters
//!
//!     Filters drop tokens from the stream. Value filters test the token
//!     text, type filters test the label, and the repeated-token filter
//!     drops immediate duplicates. Surviving tokens keep their relative
//!     order and are never modified.

use super::TokenTransformer;
use crate::token::{Token, TokenType};

/// Keeps tokens whose text satisfies a predicate.
pub struct ValueFilter {
    predicate: fn(&str) -> bool,
}

impl ValueFilter {
    pub fn new(predicate: fn(&str) -> bool) -> Self {
        Self { predicate }
    }

    /// Filter keeping strictly alphanumeric tokens. Whitespace and
    /// punctuation tokens are dropped, so "W 35th St." reduces to the
    /// tokens "W", "35", "th", "St".
    pub fn alphanumeric() -> Self {
        Self::new(is_alphanumeric)
    }
}

/// True when `text` is non-empty and every character is alphanumeric.
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

impl TokenTransformer for ValueFilter {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|t| (self.predicate)(&t.text))
            .collect()
    }
}

/// Keeps or drops tokens by label.
///
/// With `negated` false only tokens whose label appears in `types`
/// survive; with `negated` true exactly those tokens are dropped.
pub struct TypeFilter {
    types: Vec<TokenType>,
    negated: bool,
}

impl TypeFilter {
    pub fn new(types: Vec<TokenType>, negated: bool) -> Self {
        Self { types, negated }
    }
}

impl TokenTransformer for TypeFilter {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|t| self.types.contains(&t.token_type) != self.negated)
            .collect()
    }
}

/// Collapses runs of adjacent tokens with identical text, keeping the first
/// token of each run. Non-adjacent duplicates survive, so "ST MARKS ST"
/// keeps both "ST" tokens.
pub struct RepeatedTokenFilter;

impl TokenTransformer for RepeatedTokenFilter {
    fn transform(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        tokens.dedup_by(|a, b| a.text == b.text);
        tokens
    }
}
