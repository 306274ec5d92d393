//! Token types for the address normalization pipeline
//!
//!     A token is a contiguous run of characters from the input string together
//!     with a classification label. The chartype splitter produces tokens with
//!     structural labels (alpha, digit, space) and downstream transformers may
//!     rewrite the text or replace the label with a semantic one (direction,
//!     street type).
//!
//!     Tokens are plain values. Transformers consume and rebuild token lists
//!     rather than mutating tokens in place, so a list can always be traced
//!     back to the exact stage that produced it.

use std::fmt;

/// Classification label attached to a token.
///
/// The structural labels (`Alpha`, `Digit`, `Space`) are assigned by the
/// chartype splitter; `Any` is the fallback for characters no splitter rule
/// claims. `Direction` and `StreetType` are semantic labels attached by the
/// lookup mappers when a token matches one of the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenType {
    /// Run of alphabetic characters
    Alpha,
    /// Run of numeric characters
    Digit,
    /// Run of whitespace characters
    Space,
    /// Fallback for characters outside every splitter rule
    Any,
    /// Cardinal direction (NORTH, SOUTH, EAST, WEST)
    Direction,
    /// Standardized street type (ST, AVE, BLVD, ...)
    StreetType,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Alpha => "ALPHA",
            TokenType::Digit => "DIGIT",
            TokenType::Space => "SPACE",
            TokenType::Any => "ANY",
            TokenType::Direction => "DIRECTION",
            TokenType::StreetType => "STREET_TYPE",
        };
        write!(f, "{}", name)
    }
}

/// A run of input text with its classification label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// The token text
    pub text: String,
    /// The classification of this token
    pub token_type: TokenType,
}

impl Token {
    /// Create a token with the default `Any` label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            token_type: TokenType::Any,
        }
    }

    /// Create a token with an explicit label.
    pub fn with_type(text: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            text: text.into(),
            token_type,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
