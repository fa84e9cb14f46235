use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use serde::{Deserialize, Serialize};

/// Location of the first query match inside a document's content.
///
/// `paragraph` indexes into `content.split('\n')`; `offset` is a
/// character offset within that paragraph. The default `{0, 0}` is the
/// "no match located" fallback, not a real match at the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPosition {
    pub paragraph: usize,
    pub offset: usize,
}

/// Scan paragraphs in order, then query terms in query order; the first
/// term found wins. The offset always refers to the original paragraph's
/// characters, even where case folding changes the character count.
pub fn find_position(content: &str, query: &str) -> MatchPosition {
    let tokenizer = WhitespaceTokenizer::default();
    let terms = tokenizer.normalize(query);
    if terms.is_empty() {
        return MatchPosition::default();
    }

    for (paragraph, text) in content.split('\n').enumerate() {
        for term in &terms {
            if let Some(offset) = term_char_offset(text, term) {
                return MatchPosition { paragraph, offset };
            }
        }
    }

    MatchPosition::default()
}

/// Case-insensitive search for `term` in `text`, returning the character
/// offset of the match in `text` itself. Folds one character at a time
/// and records where each folded character came from, so offsets stay
/// aligned when lowercasing expands a character ('İ' folds to two).
fn term_char_offset(text: &str, term: &str) -> Option<usize> {
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (char_index, ch) in text.chars().enumerate() {
        for folded in ch.to_lowercase() {
            origin.push(char_index);
            lowered.push(folded);
        }
    }

    let byte = lowered.find(term)?;
    let folded_index = lowered[..byte].chars().count();
    origin.get(folded_index).copied()
}
