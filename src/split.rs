//! Character-class tokenization
//!
//!     The chartype splitter scans a string left to right and groups maximal
//!     runs of same-class characters into tokens, so "W35ST" splits into
//!     "W", "35", "ST" without any delimiter in the input.
//!
//!     Classification is an ordered rule list. Each character is tested
//!     against the rules in declaration order and the first match wins;
//!     characters no rule claims get the `Any` label. A new token starts
//!     exactly when the class changes, which makes the splitter lossless:
//!     concatenating the token texts reproduces the input.

use crate::token::{Token, TokenType};

/// A classification rule: a character predicate and the label it assigns.
#[derive(Clone, Copy)]
pub struct ClassRule {
    predicate: fn(char) -> bool,
    label: TokenType,
}

impl ClassRule {
    pub fn new(predicate: fn(char) -> bool, label: TokenType) -> Self {
        Self { predicate, label }
    }
}

/// Anything that turns a string into a token sequence.
///
/// Implemented by [`ChartypeSplitter`] and by the assembled pipelines, so a
/// whole pipeline can serve as the tokenizer stage of another pipeline.
pub trait Tokenizer: Send + Sync {
    fn tokens(&self, value: &str) -> Vec<Token>;
}

/// Tokenizer that groups maximal runs of same-class characters.
pub struct ChartypeSplitter {
    rules: Vec<ClassRule>,
}

impl ChartypeSplitter {
    /// Splitter with the default rules: alphabetic runs become `Alpha`
    /// tokens, numeric runs become `Digit` tokens, everything else falls
    /// back to `Any`.
    pub fn new() -> Self {
        Self {
            rules: vec![
                ClassRule::new(char::is_alphabetic, TokenType::Alpha),
                ClassRule::new(char::is_numeric, TokenType::Digit),
            ],
        }
    }

    /// Append a rule, evaluated after the existing ones.
    pub fn with_rule(mut self, rule: ClassRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a whitespace rule so space runs become `Space` tokens that a
    /// type filter can drop explicitly instead of falling into `Any`.
    pub fn with_space_rule(self) -> Self {
        self.with_rule(ClassRule::new(char::is_whitespace, TokenType::Space))
    }

    fn classify(&self, c: char) -> TokenType {
        for rule in &self.rules {
            if (rule.predicate)(c) {
                return rule.label;
            }
        }
        TokenType::Any
    }
}

impl Default for ChartypeSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for ChartypeSplitter {
    fn tokens(&self, value: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut run_type = TokenType::Any;
        for c in value.chars() {
            let label = self.classify(c);
            // A class change ends the current run, even when both classes
            // would satisfy the same downstream predicate.
            if !run.is_empty() && label != run_type {
                tokens.push(Token::with_type(run, run_type));
                run = String::new();
            }
            if run.is_empty() {
                run_type = label;
            }
            run.push(c);
        }
        if !run.is_empty() {
            tokens.push(Token::with_type(run, run_type));
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_splits_on_class_change_without_delimiters() {
        let tokens = ChartypeSplitter::new().tokens("W35ST");
        assert_eq!(texts(&tokens), vec!["W", "35", "ST"]);
        assert_eq!(tokens[0].token_type, TokenType::Alpha);
        assert_eq!(tokens[1].token_type, TokenType::Digit);
        assert_eq!(tokens[2].token_type, TokenType::Alpha);
    }

    #[test]
    fn test_unclaimed_characters_fall_back_to_any() {
        let tokens = ChartypeSplitter::new().tokens("5th/6th");
        assert_eq!(texts(&tokens), vec!["5", "th", "/", "6", "th"]);
        assert_eq!(tokens[2].token_type, TokenType::Any);
    }

    #[test]
    fn test_default_rules_label_spaces_any() {
        let tokens = ChartypeSplitter::new().tokens("W 35");
        assert_eq!(texts(&tokens), vec!["W", " ", "35"]);
        assert_eq!(tokens[1].token_type, TokenType::Any);
    }

    #[test]
    fn test_space_rule_labels_whitespace_runs() {
        let tokens = ChartypeSplitter::new().with_space_rule().tokens("W  35");
        assert_eq!(texts(&tokens), vec!["W", "  ", "35"]);
        assert_eq!(tokens[1].token_type, TokenType::Space);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let input = "W 35th St. #4-B / rear";
        let tokens = ChartypeSplitter::new().with_space_rule().tokens(input);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(ChartypeSplitter::new().tokens("").is_empty());
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // A rule ahead of the defaults claims 'x' before the alpha rule sees it.
        let splitter = ChartypeSplitter {
            rules: vec![
                ClassRule::new(|c| c == 'x', TokenType::Any),
                ClassRule::new(char::is_alphabetic, TokenType::Alpha),
            ],
        };
        let tokens = splitter.tokens("axb");
        assert_eq!(texts(&tokens), vec!["a", "x", "b"]);
        assert_eq!(tokens[1].token_type, TokenType::Any);
    }
}
