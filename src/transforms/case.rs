//! Case normalization transformers
//!
//!     Case stages rewrite token text without touching labels or order. The
//!     key pipeline upper-cases early so every later table lookup and
//!     comparison works on a single case; the standardizer applies its case
//!     stage last to control the presentation of the output.

use super::TokenTransformer;
use crate::token::Token;

/// Rewrites every token to upper case.
pub struct UpperTokens;

impl TokenTransformer for UpperTokens {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|t| Token::with_type(t.text.to_uppercase(), t.token_type))
            .collect()
    }
}

/// Rewrites every token to lower case.
pub struct LowerTokens;

impl TokenTransformer for LowerTokens {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|t| Token::with_type(t.text.to_lowercase(), t.token_type))
            .collect()
    }
}

/// Rewrites every token to capitalized form: first character upper case,
/// the remainder lower case. "STR" becomes "Str" and "25TH" becomes "25th";
/// a leading digit is left as is.
pub struct CapitalizeTokens;

impl TokenTransformer for CapitalizeTokens {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|t| Token::with_type(capitalize(&t.text), t.token_type))
            .collect()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
