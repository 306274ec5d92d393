//! # streetnorm
//!
//! Tokenization and normalization for U.S. street addresses.
//!
//! Street addresses arrive in many spellings of the same street: "W 35th
//! Street", "West 35 Str", and "W35ST" all name one street. This crate
//! splits a value into character-class tokens, rewrites them against the
//! USPS abbreviation tables, and renders one of three outputs:
//!
//! - a collision key via [`normalize_key`] ("35 ST WEST" for all three
//!   spellings above),
//! - an ordered token sequence via [`tokenize`],
//! - a human-readable standardized form via [`standardize`]
//!   ("East 25 St").
//!
//! The building blocks live in their own modules: [`split`] for the
//! character-class splitter, [`transforms`] for the token rewriting
//! stages, [`pipeline`] for the assembler, [`tables`] for the static
//! lookup data, and [`street`] for the assembled street pipelines.
//! [`zipcode`] defines the directory contract used when street keys are
//! joined with city data.

pub mod pipeline;
pub mod split;
pub mod street;
pub mod tables;
pub mod token;
pub mod transforms;
pub mod zipcode;

pub use pipeline::TokenPipeline;
pub use split::{ChartypeSplitter, ClassRule, Tokenizer};
pub use street::{
    normalize_key, standardize, tokenize, CaseTransform, ConfigError, StreetNameKey,
    StreetStandardizer, StreetTokenizer, TokenizeOptions,
};
pub use token::{Token, TokenType};
pub use transforms::TokenTransformer;
pub use zipcode::{ZipCodeError, ZipCodeIndex, ZipDirectory, ZipRecord};
