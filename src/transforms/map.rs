//! Lookup-table token rewriting
//!
//!     A mapper rewrites token text through a read-only lookup table. The
//!     token text is upper-cased for the lookup; on a hit the text is
//!     replaced with the mapped value and the token is relabeled with the
//!     mapper's output type. A miss leaves the token untouched: absence of
//!     a key is identity, never an error.

use std::collections::HashMap;

use super::TokenTransformer;
use crate::token::{Token, TokenType};

/// Rewrites tokens through a static lookup table.
///
/// Tables are process-wide constants (see [`crate::tables`]), so mappers
/// borrow them for `'static` and stay trivially cheap to construct.
pub struct TokenMapper {
    lookup: &'static HashMap<&'static str, &'static str>,
    output_type: TokenType,
    target: Option<TokenType>,
}

impl TokenMapper {
    /// Mapper over `lookup` that relabels hits with `output_type`.
    ///
    /// By default every token is a candidate regardless of its current
    /// label. The street pipelines rely on this: a spelled ordinal like
    /// "FIRST" arrives as an alpha token and must still map to a digit.
    pub fn new(
        lookup: &'static HashMap<&'static str, &'static str>,
        output_type: TokenType,
    ) -> Self {
        Self {
            lookup,
            output_type,
            target: None,
        }
    }

    /// Restrict the mapper to tokens whose current label equals `target`;
    /// all other tokens pass through without a lookup.
    pub fn with_target(mut self, target: TokenType) -> Self {
        self.target = Some(target);
        self
    }

    fn map_token(&self, token: Token) -> Token {
        if let Some(target) = self.target {
            if token.token_type != target {
                return token;
            }
        }
        match self.lookup.get(token.text.to_uppercase().as_str()) {
            Some(mapped) => Token::with_type(*mapped, self.output_type),
            None => token,
        }
    }
}

impl TokenTransformer for TokenMapper {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().map(|t| self.map_token(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use super::*;

    static SAMPLE: Lazy<HashMap<&'static str, &'static str>> =
        Lazy::new(|| [("STREET", "ST"), ("FIRST", "1")].into_iter().collect());

    #[test]
    fn test_hit_rewrites_text_and_relabels() {
        let mapper = TokenMapper::new(&SAMPLE, TokenType::StreetType);
        let tokens = mapper.transform(vec![Token::with_type("Street", TokenType::Alpha)]);
        assert_eq!(tokens[0].text, "ST");
        assert_eq!(tokens[0].token_type, TokenType::StreetType);
    }

    #[test]
    fn test_miss_is_identity() {
        let mapper = TokenMapper::new(&SAMPLE, TokenType::StreetType);
        let input = Token::with_type("BROADWAY", TokenType::Alpha);
        let tokens = mapper.transform(vec![input.clone()]);
        assert_eq!(tokens[0], input);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mapper = TokenMapper::new(&SAMPLE, TokenType::Digit);
        let tokens = mapper.transform(vec![Token::new("first")]);
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[0].token_type, TokenType::Digit);
    }

    #[test]
    fn test_target_restricts_candidates() {
        let mapper = TokenMapper::new(&SAMPLE, TokenType::StreetType).with_target(TokenType::Alpha);
        let alpha = Token::with_type("STREET", TokenType::Alpha);
        let any = Token::with_type("STREET", TokenType::Any);
        let tokens = mapper.transform(vec![alpha, any.clone()]);
        assert_eq!(tokens[0].text, "ST");
        assert_eq!(tokens[1], any);
    }
}
