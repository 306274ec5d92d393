//! Pipeline assembly
//!
//!     A pipeline wires a tokenizer to an ordered transformer chain and an
//!     output policy. Running one is always the same five steps: tokenize,
//!     apply each transformer in registration order, optionally drop
//!     duplicate texts, optionally sort, then join with the configured
//!     delimiter.
//!
//!     Pipelines are immutable after construction and hold no state between
//!     invocations, so one instance behind a `Lazy` static can serve any
//!     number of callers concurrently. A pipeline also implements
//!     [`Tokenizer`], which lets the standardizer use the whole tokenization
//!     pipeline as the front end of its own.

use std::collections::HashSet;

use crate::split::Tokenizer;
use crate::token::Token;
use crate::transforms::TokenTransformer;

/// A tokenizer, a transformer chain, and an output policy.
pub struct TokenPipeline {
    tokenizer: Box<dyn Tokenizer>,
    transformers: Vec<Box<dyn TokenTransformer>>,
    delimiter: String,
    sort: bool,
    unique: bool,
}

impl TokenPipeline {
    /// Pipeline over `tokenizer` with no transformers, an empty delimiter,
    /// and neither sorting nor deduplication.
    pub fn new(tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            transformers: Vec::new(),
            delimiter: String::new(),
            sort: false,
            unique: false,
        }
    }

    /// Append a transformer; transformers run in the order added.
    pub fn then(self, transformer: impl TokenTransformer + 'static) -> Self {
        self.then_boxed(Box::new(transformer))
    }

    /// Append an already boxed transformer.
    pub fn then_boxed(mut self, transformer: Box<dyn TokenTransformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Delimiter placed between token texts by [`run`](Self::run).
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Sort surviving tokens by text before assembly. The sort is stable,
    /// so tokens with equal text keep their relative order.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Drop duplicate token texts, keeping the first occurrence of each.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Run the pipeline and return the surviving tokens.
    pub fn tokens(&self, value: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokens(value);
        for transformer in &self.transformers {
            tokens = transformer.transform(tokens);
        }
        if self.unique {
            let mut seen = HashSet::new();
            tokens.retain(|t| seen.insert(t.text.clone()));
        }
        if self.sort {
            tokens.sort_by(|a, b| a.text.cmp(&b.text));
        }
        tokens
    }

    /// Run the pipeline and join the surviving token texts with the
    /// configured delimiter. An empty input yields an empty string.
    pub fn run(&self, value: &str) -> String {
        let tokens = self.tokens(value);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        texts.join(&self.delimiter)
    }
}

impl Tokenizer for TokenPipeline {
    fn tokens(&self, value: &str) -> Vec<Token> {
        TokenPipeline::tokens(self, value)
    }
}
