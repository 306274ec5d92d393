//! U.S. street-name pipelines
//!
//!     Three pipelines share one normalization core: split on character
//!     class, filter, upper-case, drop ordinal suffixes, map spelled
//!     ordinals to numerals, and standardize the first and last token.
//!     They differ only in output policy.
//!
//!         - [`StreetNameKey`] sorts the tokens and joins them with a
//!           space, producing a collision key: two spellings of the same
//!           street yield the same key.
//!         - [`StreetTokenizer`] preserves token order and returns the
//!           token list itself, for callers that need structure.
//!         - [`StreetStandardizer`] wraps the tokenizer and renders a
//!           human-readable form in a configurable case.
//!
//!     The free functions [`normalize_key`], [`tokenize`], and
//!     [`standardize`] cover the common configurations.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::pipeline::TokenPipeline;
use crate::split::{ChartypeSplitter, Tokenizer};
use crate::tables;
use crate::token::{Token, TokenType};
use crate::transforms::{
    CapitalizeTokens, LowerTokens, RepeatedTokenFilter, TokenMapper, TokenTransformer, TypeFilter,
    UpperTokens, ValueFilter,
};

/// Drops ordinal suffix tokens left behind when street numbers like "1st"
/// or "22nd" are split into a number and a suffix.
///
/// A single left-to-right pass. "ST" is dropped when the previous kept
/// token ends in '1', "ND" after '2', "RD" after '3', and "TH" after any
/// digit; the comparison is case insensitive and the first token is always
/// kept. The look-back is against the previous *kept* token, so once a
/// suffix is dropped the token before it becomes the predecessor for the
/// next decision.
pub struct StreetNumberSuffixFilter;

impl StreetNumberSuffixFilter {
    fn drops(suffix: &str, previous: &Token) -> bool {
        let last = match previous.text.chars().last() {
            Some(c) => c,
            None => return false,
        };
        match suffix {
            "ST" => last == '1',
            "ND" => last == '2',
            "RD" => last == '3',
            "TH" => last.is_ascii_digit(),
            _ => false,
        }
    }
}

impl TokenTransformer for StreetNumberSuffixFilter {
    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut kept: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(previous) = kept.last() {
                if Self::drops(&token.text.to_uppercase(), previous) {
                    continue;
                }
            }
            kept.push(token);
        }
        kept
    }
}

/// Standardizes the first and the last token of a street-address token
/// list.
///
/// The first token is rewritten when it is an avenue spelling (as in "Ave
/// of the Americas") or a cardinal-direction abbreviation; the last token
/// is rewritten when it is a common street-type abbreviation. Lists with
/// fewer than two tokens pass through unchanged. In a two-token list the
/// first token gets the prefix rules and the second the suffix rules,
/// independently.
pub struct StreetPrefixSuffix {
    prefix: [TokenMapper; 2],
    suffix: TokenMapper,
}

impl StreetPrefixSuffix {
    pub fn new() -> Self {
        Self {
            prefix: [
                TokenMapper::new(&tables::AVENUE_FORM_MAP, TokenType::Alpha),
                TokenMapper::new(&tables::DIRECTION_MAP, TokenType::Direction),
            ],
            suffix: TokenMapper::new(&tables::STREET_TYPE_MAP, TokenType::StreetType),
        }
    }
}

impl Default for StreetPrefixSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTransformer for StreetPrefixSuffix {
    fn transform(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        if tokens.len() < 2 {
            return tokens;
        }
        let last_index = tokens.len() - 1;

        let mut head = vec![tokens[0].clone()];
        for mapper in &self.prefix {
            head = mapper.transform(head);
        }
        if let Some(mapped) = head.into_iter().next() {
            tokens[0] = mapped;
        }

        let tail = self.suffix.transform(vec![tokens[last_index].clone()]);
        if let Some(mapped) = tail.into_iter().next() {
            tokens[last_index] = mapped;
        }

        tokens
    }
}

/// Options for [`StreetTokenizer`] and the pipelines built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Keep only strictly alphanumeric tokens, dropping separator tokens
    /// such as "/" along with whitespace. Off by default: separators carry
    /// structure ("E 1st Str/2nd Ave" names two streets).
    pub alphanumeric_only: bool,
    /// Collapse runs of adjacent tokens with identical text.
    pub collapse_repeats: bool,
    /// Drop duplicate token texts globally, keeping the first occurrence.
    /// Off by default; "ST MARKS ST" would otherwise lose its street type.
    pub unique: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            alphanumeric_only: false,
            collapse_repeats: true,
            unique: false,
        }
    }
}

/// Collision-key generator for U.S. street names.
///
/// Values split on character class, so "W35ST" produces the same tokens as
/// "W 35 ST". Non-alphanumeric tokens are removed, the rest are upper-cased
/// and normalized, and the result is sorted and joined with a single
/// space. Sorting makes keys insensitive to token order: "W 35th Street"
/// and "35 West Str" both key to "35 ST WEST".
///
/// Duplicate tokens are kept. An abbreviation can be part of a proper name
/// and a street type at once ("ST. MARKS ST") and collapsing it would
/// create false collisions with unrelated streets.
pub struct StreetNameKey {
    pipeline: TokenPipeline,
}

impl StreetNameKey {
    pub fn new() -> Self {
        let pipeline = TokenPipeline::new(ChartypeSplitter::new())
            .then(ValueFilter::alphanumeric())
            .then(UpperTokens)
            .then(StreetNumberSuffixFilter)
            .then(TokenMapper::new(&tables::ORDINAL_WORD_MAP, TokenType::Digit))
            .then(StreetPrefixSuffix::new())
            .delimiter(" ")
            .sorted();
        Self { pipeline }
    }

    /// Collision key for `value`. An empty or all-separator value keys to
    /// the empty string.
    pub fn key(&self, value: &str) -> String {
        self.pipeline.run(value)
    }

    /// The normalized, sorted tokens behind the key.
    pub fn tokens(&self, value: &str) -> Vec<Token> {
        self.pipeline.tokens(value)
    }
}

impl Default for StreetNameKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural tokenizer for U.S. street names.
///
/// Runs the same normalization core as [`StreetNameKey`] but preserves
/// token order and, by default, separator tokens. Whitespace is always
/// dropped.
pub struct StreetTokenizer {
    pipeline: TokenPipeline,
}

impl StreetTokenizer {
    pub fn new(options: TokenizeOptions) -> Self {
        let mut pipeline = TokenPipeline::new(ChartypeSplitter::new().with_space_rule());
        pipeline = if options.alphanumeric_only {
            pipeline.then(ValueFilter::alphanumeric())
        } else {
            pipeline.then(TypeFilter::new(vec![TokenType::Space], true))
        };
        pipeline = pipeline
            .then(UpperTokens)
            .then(StreetNumberSuffixFilter)
            .then(TokenMapper::new(&tables::ORDINAL_WORD_MAP, TokenType::Digit))
            .then(StreetPrefixSuffix::new());
        if options.collapse_repeats {
            pipeline = pipeline.then(RepeatedTokenFilter);
        }
        if options.unique {
            pipeline = pipeline.unique();
        }
        Self { pipeline }
    }

    /// Normalized tokens of `value`, in input order.
    pub fn tokens(&self, value: &str) -> Vec<Token> {
        self.pipeline.tokens(value)
    }
}

impl Default for StreetTokenizer {
    fn default() -> Self {
        Self::new(TokenizeOptions::default())
    }
}

impl Tokenizer for StreetTokenizer {
    fn tokens(&self, value: &str) -> Vec<Token> {
        self.pipeline.tokens(value)
    }
}

/// Case applied to standardized tokens before they are joined.
///
/// The string selectors accepted by [`standardize`] and
/// [`CaseTransform::from_str`] are "capitalize", "lower", and "upper";
/// anything else is a [`ConfigError`]. A caller-supplied transformer goes
/// through the `Custom` variant.
pub enum CaseTransform {
    /// First character upper case, remainder lower case (the default)
    Capitalize,
    /// All lower case
    Lower,
    /// All upper case
    Upper,
    /// Caller-supplied transformer
    Custom(Box<dyn TokenTransformer>),
}

impl Default for CaseTransform {
    fn default() -> Self {
        CaseTransform::Capitalize
    }
}

impl fmt::Debug for CaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseTransform::Capitalize => write!(f, "Capitalize"),
            CaseTransform::Lower => write!(f, "Lower"),
            CaseTransform::Upper => write!(f, "Upper"),
            CaseTransform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl FromStr for CaseTransform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capitalize" => Ok(CaseTransform::Capitalize),
            "lower" => Ok(CaseTransform::Lower),
            "upper" => Ok(CaseTransform::Upper),
            other => Err(ConfigError::UnknownCaseTransform(other.to_string())),
        }
    }
}

/// Pipeline configuration errors.
///
/// Raised while a pipeline is being configured, before any tokenization
/// happens. Malformed address input is never an error: empty input yields
/// empty output and unknown tokens pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A case-transform selector outside "capitalize", "lower", "upper".
    UnknownCaseTransform(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownCaseTransform(selector) => {
                write!(f, "unknown case transform '{}'", selector)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Human-readable standardizer for U.S. street names.
///
/// Wraps [`StreetTokenizer`], applies a final case transform, and joins
/// the tokens with a single space: "e 25TH str" standardizes to
/// "East 25 St" under the default capitalization.
pub struct StreetStandardizer {
    pipeline: TokenPipeline,
}

impl StreetStandardizer {
    pub fn new(case: CaseTransform, options: TokenizeOptions) -> Self {
        let mut pipeline = TokenPipeline::new(StreetTokenizer::new(options)).delimiter(" ");
        pipeline = match case {
            CaseTransform::Capitalize => pipeline.then(CapitalizeTokens),
            CaseTransform::Lower => pipeline.then(LowerTokens),
            // Tokens leave the tokenizer upper case already.
            CaseTransform::Upper => pipeline,
            CaseTransform::Custom(transformer) => pipeline.then_boxed(transformer),
        };
        Self { pipeline }
    }

    /// Standardized form of `value`.
    pub fn standardize(&self, value: &str) -> String {
        self.pipeline.run(value)
    }
}

impl Default for StreetStandardizer {
    fn default() -> Self {
        Self::new(CaseTransform::default(), TokenizeOptions::default())
    }
}

static DEFAULT_KEY: Lazy<StreetNameKey> = Lazy::new(StreetNameKey::new);

/// Collision key for a U.S. street address.
///
/// Two spellings of the same street produce the same key:
/// `normalize_key("W 35th Street")` and `normalize_key("West 35 Str")`
/// both return "35 ST WEST".
pub fn normalize_key(address: &str) -> String {
    DEFAULT_KEY.key(address)
}

/// Normalized street tokens of `address`, in input order.
pub fn tokenize(address: &str, options: TokenizeOptions) -> Vec<Token> {
    StreetTokenizer::new(options).tokens(address)
}

/// Standardized form of `address` using a string case-mode selector.
///
/// Fails before any tokenization when `case_mode` is not one of
/// "capitalize", "lower", or "upper". Use [`StreetStandardizer`] directly
/// to supply a custom transformer.
pub fn standardize(
    address: &str,
    case_mode: &str,
    options: TokenizeOptions,
) -> Result<String, ConfigError> {
    let case = case_mode.parse::<CaseTransform>()?;
    Ok(StreetStandardizer::new(case, options).standardize(address))
}
