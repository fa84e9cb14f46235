use crate::analysis::token::Token;

/// Minimum term length kept by the default tokenizer. Single-character
/// terms are noise for this corpus and are dropped on both the indexing
/// and the query path.
pub const MIN_TERM_LEN: usize = 2;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Term strings only, in stream order. Shared by indexing and querying
    /// so term matching stays consistent.
    fn normalize(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Whitespace tokenizer: splits on Unicode whitespace, lowercases,
/// discards terms shorter than `min_term_len` characters. No stemming,
/// no stop words.
#[derive(Clone)]
pub struct WhitespaceTokenizer {
    pub min_term_len: usize,
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        WhitespaceTokenizer {
            min_term_len: MIN_TERM_LEN,
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for word in text.split_whitespace() {
            if word.chars().count() < self.min_term_len {
                continue;
            }
            let offset = word.as_ptr() as usize - text.as_ptr() as usize;
            tokens.push(Token::new(word.to_lowercase(), position, offset));
            position += 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_whitespace() {
        let tokenizer = WhitespaceTokenizer::default();
        let terms = tokenizer.normalize("Hello  World\trust\nprogramming");
        assert_eq!(terms, vec!["hello", "world", "rust", "programming"]);
    }

    #[test]
    fn discards_terms_shorter_than_two_chars() {
        let tokenizer = WhitespaceTokenizer::default();
        let terms = tokenizer.normalize("I am a rust dev");
        assert_eq!(terms, vec!["am", "rust", "dev"]);
    }

    #[test]
    fn normalization_is_case_insensitive() {
        let tokenizer = WhitespaceTokenizer::default();
        let text = "Quick Brown FOX";
        assert_eq!(
            tokenizer.normalize(text),
            tokenizer.normalize(&text.to_lowercase())
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let tokenizer = WhitespaceTokenizer::default();
        let once = tokenizer.normalize("The Quick Brown Fox");
        let twice = tokenizer.normalize(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_yields_no_terms() {
        let tokenizer = WhitespaceTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn token_positions_and_offsets_track_the_source() {
        let tokenizer = WhitespaceTokenizer::default();
        let tokens = tokenizer.tokenize("ab  cd");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].offset, 4);
    }
}
