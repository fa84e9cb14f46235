use std::time::Duration;

/// Tunables for the search pipeline.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results returned per search.
    pub result_limit: usize,
    /// Width of the offset-based context window, in characters.
    pub context_window: usize,
    /// Quiet period before a debounced search fires.
    pub debounce_quiet: Duration,
    /// Fall back to prefix matches when a query term has no exact postings.
    pub suggest: bool,
    /// Terms shorter than this are discarded by the tokenizer.
    pub min_term_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            result_limit: 10,
            context_window: 100,
            debounce_quiet: Duration::from_millis(300),
            suggest: true,
            min_term_len: 2,
        }
    }
}
