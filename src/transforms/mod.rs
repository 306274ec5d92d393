//! Token stream transformations
//!
//!     Transformers are the building blocks of normalization pipelines. Each
//!     one is a pure function from token list to token list and the pipeline
//!     runs them in the order they were registered.
//!
//! Design principles
//!
//!     1. A transformer may delete tokens, rewrite their text, or replace
//!        their label. It never reorders tokens and never invents tokens the
//!        input does not contain.
//!     2. Transformers are stateless: configuration is fixed at construction
//!        and nothing is retained between invocations, so a single instance
//!        can be shared across threads.
//!     3. Absence is identity. A filter that matches nothing and a mapper
//!        that finds no table hit return the input unchanged.

pub mod case;
pub mod filter;
pub mod map;

pub use case::{CapitalizeTokens, LowerTokens, UpperTokens};
pub use filter::{RepeatedTokenFilter, TypeFilter, ValueFilter};
pub use map::TokenMapper;

use crate::token::Token;

/// A transformation over a token sequence.
///
/// Implementations must be deterministic: the same input list always
/// produces the same output list.
pub trait TokenTransformer: Send + Sync {
    /// Apply the transformation, producing a new token list.
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token>;
}
