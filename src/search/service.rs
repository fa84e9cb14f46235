use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::SearchConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, Document, IndexEntry};
use crate::index::inverted::{InvertedIndex, SearchOptions};
use crate::search::results::SearchResult;
use crate::snippet::context::{extract_context, extract_window};
use crate::snippet::highlight::highlight;
use crate::snippet::position::{find_position, MatchPosition};
use crate::store::DocumentStore;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// The index plus the user it currently covers. Guarded by one mutex so
/// every mutation of the index is applied atomically per document id.
struct IndexState {
    index: InvertedIndex,
    indexed_user: Option<String>,
}

/// Orchestrates the search pipeline: load documents, maintain the
/// inverted index, query it, then attach position, context and highlight
/// to each candidate.
///
/// The index is maintained incrementally through `save_document` and
/// `delete_document`; a full rebuild happens only when a search targets a
/// user the index does not cover yet. Constructed by the composition root
/// and passed by handle; there is no global instance.
pub struct SearchService<S: DocumentStore> {
    store: S,
    config: SearchConfig,
    state: Mutex<IndexState>,
}

impl<S: DocumentStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        SearchService::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: S, config: SearchConfig) -> Self {
        let tokenizer = WhitespaceTokenizer {
            min_term_len: config.min_term_len,
        };
        SearchService {
            store,
            config,
            state: Mutex::new(IndexState {
                index: InvertedIndex::with_tokenizer(Box::new(tokenizer)),
                indexed_user: None,
            }),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the full pipeline for one query, scoped to one user's
    /// documents. An empty or whitespace-only query is a valid "no
    /// results" case, not an error. Store failures abort the whole call;
    /// no partial results are returned.
    pub async fn search(&self, query: &str, user_id: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.ensure_indexed(user_id).await?;

        let state = self.state.lock();
        let options = SearchOptions {
            limit: self.config.result_limit,
            suggest: self.config.suggest,
        };
        let groups = state.index.search(query, &options);

        // Flatten field groups, deduping by id and keeping the best score.
        // First-seen order is preserved so the final sort stays stable
        // across fields.
        let mut order: Vec<DocId> = Vec::new();
        let mut best: std::collections::HashMap<DocId, f32> = std::collections::HashMap::new();
        for group in &groups {
            for hit in &group.hits {
                match best.get_mut(&hit.doc_id) {
                    Some(score) => {
                        if hit.score > *score {
                            *score = hit.score;
                        }
                    }
                    None => {
                        order.push(hit.doc_id.clone());
                        best.insert(hit.doc_id.clone(), hit.score);
                    }
                }
            }
        }

        let mut results = Vec::with_capacity(order.len());
        for doc_id in order {
            let Some(entry) = state.index.entry(&doc_id) else {
                continue;
            };
            let score = best[&doc_id];
            results.push(self.build_result(entry, query, score));
        }

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(self.config.result_limit);

        debug!(query, user_id, hits = results.len(), "search completed");
        Ok(results)
    }

    /// Persist a document and keep the index in step with the store.
    pub async fn save_document(&self, doc: Document) -> Result<DocId> {
        let id = self.store.save_document(doc.clone()).await?;

        let mut state = self.state.lock();
        if state.indexed_user.as_deref() == Some(doc.user_id.as_str()) {
            let mut entry = IndexEntry::from(&doc);
            entry.id = id.clone();
            if let Err(err) = state.index.add(entry) {
                warn!(id = %id, error = %err, "document saved but not indexed");
            }
        }
        Ok(id)
    }

    /// Delete a document and drop its postings.
    pub async fn delete_document(&self, id: &DocId) -> Result<()> {
        self.store.delete_document(id).await?;
        self.state.lock().index.remove(id);
        Ok(())
    }

    /// Rebuild the index from the store for one user. Documents that fail
    /// to index are skipped and logged; one malformed document must not
    /// deny search over the rest of the corpus.
    pub async fn rebuild(&self, user_id: &str) -> Result<()> {
        let docs = self.store.load_documents(user_id).await.map_err(|err| {
            Error::store_unavailable(format!("loading documents for user {user_id}: {err}"))
        })?;

        let mut state = self.state.lock();
        state.index.clear();
        for doc in &docs {
            if let Err(err) = state.index.add(IndexEntry::from(doc)) {
                warn!(id = %doc.id, error = %err, "skipping unindexable document");
            }
        }
        state.indexed_user = Some(user_id.to_string());

        info!(user_id, indexed = state.index.len(), "index rebuilt");
        Ok(())
    }

    async fn ensure_indexed(&self, user_id: &str) -> Result<()> {
        let covered = {
            let state = self.state.lock();
            state.indexed_user.as_deref() == Some(user_id)
        };
        if covered {
            return Ok(());
        }
        self.rebuild(user_id).await
    }

    fn build_result(&self, entry: &IndexEntry, query: &str, score: f32) -> SearchResult {
        let position = find_position(&entry.content, query);
        let context = self.context_for(entry, query, position);
        let highlighted = highlight(&context, query);

        SearchResult {
            id: entry.id.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            context,
            position,
            highlight: highlighted,
            score,
        }
    }

    /// Sentence-based context when it actually contains a query term;
    /// otherwise (a title-only match, or a term the sentence scorer could
    /// not see) a `context_window`-sized window at the located position.
    fn context_for(&self, entry: &IndexEntry, query: &str, position: MatchPosition) -> String {
        let sentence = extract_context(&entry.content, query);

        let tokenizer = WhitespaceTokenizer {
            min_term_len: self.config.min_term_len,
        };
        let lowered = sentence.to_lowercase();
        let matched = tokenizer
            .normalize(query)
            .iter()
            .any(|term| lowered.contains(term.as_str()));
        if matched {
            return sentence;
        }

        let paragraph = entry
            .content
            .split('\n')
            .nth(position.paragraph)
            .unwrap_or_default();
        extract_window(paragraph, position.offset, self.config.context_window)
    }
}
