use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use regex::RegexBuilder;

/// Full-content highlight output: rendered HTML plus the number of marks
/// emitted, so a UI can drive "match i of N" navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedContent {
    pub html: String,
    pub match_count: usize,
}

fn term_regex(term: &str) -> Option<regex::Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wrap every occurrence of each query term (length >= 2) in
/// `<mark class="search-match">`, preserving the original casing of the
/// matched substring. Terms are applied one after another; a substring
/// matched by two distinct terms may be wrapped twice. That is the
/// defined behavior, not a bug.
pub fn highlight(text: &str, query: &str) -> String {
    let tokenizer = WhitespaceTokenizer::default();
    let mut highlighted = text.to_string();

    for term in tokenizer.normalize(query) {
        let Some(re) = term_regex(&term) else {
            continue;
        };
        highlighted = re
            .replace_all(&highlighted, |caps: &regex::Captures| {
                format!("<mark class=\"search-match\">{}</mark>", &caps[0])
            })
            .into_owned();
    }

    highlighted
}

/// Highlight a whole document for the preview pane: collapses whitespace
/// runs to single spaces, then wraps matches like [`highlight`] but with
/// a unique sequential `id="search-match-N"` per mark.
pub fn highlight_full_content(content: &str, query: &str) -> HighlightedContent {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");

    let tokenizer = WhitespaceTokenizer::default();
    let mut html = collapsed;
    let mut match_count = 0usize;

    for term in tokenizer.normalize(query) {
        let Some(re) = term_regex(&term) else {
            continue;
        };
        html = re
            .replace_all(&html, |caps: &regex::Captures| {
                let id = match_count;
                match_count += 1;
                format!(
                    "<mark class=\"search-match\" id=\"search-match-{id}\">{}</mark>",
                    &caps[0]
                )
            })
            .into_owned();
    }

    HighlightedContent { html, match_count }
}
