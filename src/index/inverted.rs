use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::error::Result;
use crate::core::types::{DocId, Field, IndexEntry};
use crate::index::posting::{Posting, PostingList};
use crate::scoring::scorer::{Bm25Scorer, DocStats, Scorer};
use crate::search::results::{FieldHits, ScoredHit, TopKCollector};
use std::collections::{BTreeMap, HashMap};

/// Options for an index query.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum hits returned per field.
    pub limit: usize,
    /// Fall back to prefix matches for terms with no exact postings.
    pub suggest: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: 10,
            suggest: true,
        }
    }
}

/// Term → posting list map for one indexed field, plus the length
/// statistics scoring needs. BTreeMap keys double as the term dictionary
/// for prefix lookups in suggest mode.
#[derive(Default)]
struct FieldIndex {
    postings: BTreeMap<String, PostingList>,
    doc_lengths: HashMap<DocId, u32>,
    total_tokens: u64,
}

impl FieldIndex {
    fn add(&mut self, doc_id: &DocId, tokens: &[Token]) {
        let mut term_positions: HashMap<&str, Vec<u32>> = HashMap::new();
        for token in tokens {
            term_positions
                .entry(token.text.as_str())
                .or_default()
                .push(token.position);
        }

        for (term, positions) in term_positions {
            let posting = Posting {
                doc_id: doc_id.clone(),
                term_freq: positions.len() as u32,
                positions,
            };
            self.postings
                .entry(term.to_string())
                .or_default()
                .add_posting(posting);
        }

        self.doc_lengths.insert(doc_id.clone(), tokens.len() as u32);
        self.total_tokens += tokens.len() as u64;
    }

    fn remove(&mut self, doc_id: &DocId, terms: &[String]) {
        for term in terms {
            if let Some(list) = self.postings.get_mut(term) {
                list.remove(doc_id);
                if list.is_empty() {
                    self.postings.remove(term);
                }
            }
        }

        if let Some(len) = self.doc_lengths.remove(doc_id) {
            self.total_tokens -= len as u64;
        }
    }

    fn stats_for(&self, doc_id: &DocId) -> DocStats {
        let total_docs = self.doc_lengths.len();
        DocStats {
            doc_length: self.doc_lengths.get(doc_id).copied().unwrap_or(0) as usize,
            avg_doc_length: if total_docs > 0 {
                self.total_tokens as f32 / total_docs as f32
            } else {
                0.0
            },
            total_docs,
        }
    }

    /// Posting lists for a term, expanding to prefix matches when the
    /// exact term is absent and suggest mode is on.
    fn lookup<'a>(&'a self, term: &str, suggest: bool) -> Vec<&'a PostingList> {
        if let Some(list) = self.postings.get(term) {
            return vec![list];
        }
        if !suggest {
            return Vec::new();
        }
        self.postings
            .range(term.to_string()..)
            .take_while(|(key, _)| key.starts_with(term))
            .map(|(_, list)| list)
            .collect()
    }
}

/// In-memory inverted index over the `title` and `content` fields of a
/// document set. Mutable accumulator with no terminal state: build, query,
/// update, remove, query again.
pub struct InvertedIndex {
    title: FieldIndex,
    content: FieldIndex,
    /// Stored field projections, keyed by doc id.
    entries: HashMap<DocId, IndexEntry>,
    tokenizer: Box<dyn Tokenizer>,
    scorer: Box<dyn Scorer>,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        InvertedIndex::new()
    }
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::with_tokenizer(Box::new(WhitespaceTokenizer::default()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        InvertedIndex {
            title: FieldIndex::default(),
            content: FieldIndex::default(),
            entries: HashMap::new(),
            tokenizer,
            scorer: Box::new(Bm25Scorer::default()),
        }
    }

    fn field(&self, field: Field) -> &FieldIndex {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    /// Insert a document's terms into the index. An entry with an empty id
    /// is skipped silently; the caller guarantees id presence. Re-adding an
    /// existing id replaces its postings.
    pub fn add(&mut self, entry: IndexEntry) -> Result<()> {
        if entry.id.is_empty() {
            tracing::debug!("skipping index entry with empty id");
            return Ok(());
        }

        if self.entries.contains_key(&entry.id) {
            self.remove(&entry.id);
        }

        let title_tokens = self.tokenizer.tokenize(&entry.title);
        let content_tokens = self.tokenizer.tokenize(&entry.content);

        self.title.add(&entry.id, &title_tokens);
        self.content.add(&entry.id, &content_tokens);
        self.entries.insert(entry.id.clone(), entry);

        Ok(())
    }

    /// Remove-then-add. Leaves no stale postings for the id.
    pub fn update(&mut self, id: &DocId, entry: IndexEntry) -> Result<()> {
        self.remove(id);
        self.add(entry)
    }

    /// Delete all postings for an id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &DocId) {
        let Some(entry) = self.entries.remove(id) else {
            return;
        };

        let title_terms = self.tokenizer.normalize(&entry.title);
        let content_terms = self.tokenizer.normalize(&entry.content);
        self.title.remove(id, &title_terms);
        self.content.remove(id, &content_terms);
    }

    /// Query the index: candidates grouped per field, best first within
    /// each group. Cross-field ordering is the caller's concern.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<FieldHits> {
        let terms = self.tokenizer.normalize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut groups = Vec::new();
        for field in Field::ALL {
            let field_index = self.field(field);
            let mut doc_scores: HashMap<DocId, f32> = HashMap::new();

            for term in &terms {
                for list in field_index.lookup(term, options.suggest) {
                    let doc_freq = list.doc_freq();
                    for posting in list.iter() {
                        let stats = field_index.stats_for(&posting.doc_id);
                        let score = self.scorer.score(posting.term_freq, doc_freq, &stats);
                        *doc_scores.entry(posting.doc_id.clone()).or_insert(0.0) += score;
                    }
                }
            }

            if doc_scores.is_empty() {
                continue;
            }

            let mut collector = TopKCollector::new(options.limit);
            for (doc_id, score) in doc_scores {
                collector.collect(ScoredHit { doc_id, score });
            }

            groups.push(FieldHits {
                field,
                hits: collector.into_results(),
            });
        }

        groups
    }

    /// Stored projection for a doc id.
    pub fn entry(&self, id: &DocId) -> Option<&IndexEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.title = FieldIndex::default();
        self.content = FieldIndex::default();
        self.entries.clear();
    }
}
