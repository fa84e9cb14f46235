use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use unicode_segmentation::UnicodeSegmentation;

/// Extract a sentence-based preview: the sentence containing the most
/// query terms, plus one sentence of leading and trailing context,
/// joined with `". "`. Best-effort and total: an empty or non-matching
/// query returns the opening sentences.
pub fn extract_context(content: &str, query: &str) -> String {
    let tokenizer = WhitespaceTokenizer::default();
    let terms = tokenizer.normalize(query);
    let sentences: Vec<&str> = content.split(['.', '!', '?']).collect();

    let mut best_index = 0;
    let mut best_count = 0;

    for (index, sentence) in sentences.iter().enumerate() {
        let lowered = sentence.to_lowercase();
        let count = terms.iter().filter(|term| lowered.contains(*term)).count();
        // Strict comparison keeps the first occurrence on ties.
        if count > best_count {
            best_count = count;
            best_index = index;
        }
    }

    let start = best_index.saturating_sub(1);
    let end = (best_index + 2).min(sentences.len());
    sentences[start..end].join(". ").trim().to_string()
}

/// Extract a fixed-size window of `window_size` characters centered on
/// `offset`, clipped to content bounds, with a trailing `...` when the
/// window is truncated at the end. Grapheme-aware so a cluster is never
/// split mid-way.
pub fn extract_window(content: &str, offset: usize, window_size: usize) -> String {
    let graphemes: Vec<&str> = content.graphemes(true).collect();
    if graphemes.is_empty() {
        return String::new();
    }

    let half = window_size / 2;
    let start = offset.saturating_sub(half);
    let end = (offset + half).min(graphemes.len());
    let start = start.min(end);

    let mut window: String = graphemes[start..end].concat();
    if end < graphemes.len() {
        window.push_str("...");
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Rust is fast. Memory safety without garbage collection. \
                        Fearless concurrency is the slogan! Tooling is excellent.";

    #[test]
    fn picks_the_sentence_with_the_most_terms() {
        let context = extract_context(TEXT, "memory safety");
        assert!(context.contains("Memory safety without garbage collection"));
        // One neighbor each side.
        assert!(context.contains("Rust is fast"));
        assert!(context.contains("Fearless concurrency"));
    }

    #[test]
    fn ties_break_toward_the_first_sentence() {
        let context = extract_context("alpha beta. gamma beta.", "beta");
        assert!(context.starts_with("alpha beta"));
    }

    #[test]
    fn empty_query_never_panics_and_returns_text() {
        let context = extract_context(TEXT, "");
        assert!(!context.is_empty());
    }

    #[test]
    fn non_matching_query_returns_a_default_window() {
        let context = extract_context(TEXT, "zzz qqq");
        assert!(!context.is_empty());
    }

    #[test]
    fn empty_content_is_handled() {
        assert_eq!(extract_context("", "anything"), "");
    }

    #[test]
    fn window_is_centered_and_clipped() {
        let content = "0123456789";
        assert_eq!(extract_window(content, 5, 4), "3456...");
        assert_eq!(extract_window(content, 0, 4), "01...");
        assert_eq!(extract_window(content, 9, 4), "789");
    }

    #[test]
    fn window_marks_truncation_at_the_end_only() {
        let content = "short";
        assert_eq!(extract_window(content, 2, 100), "short");
    }

    #[test]
    fn window_respects_grapheme_clusters() {
        let content = "a\u{0301}bcdef"; // "á" as a combining sequence
        let window = extract_window(content, 0, 4);
        assert!(window.starts_with("a\u{0301}"));
    }

    #[test]
    fn window_on_empty_content() {
        assert_eq!(extract_window("", 10, 50), "");
    }
}
