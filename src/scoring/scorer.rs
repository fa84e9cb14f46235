/// Collection statistics a scorer needs for one document.
#[derive(Debug, Clone)]
pub struct DocStats {
    /// Number of tokens in the scored field of this document.
    pub doc_length: usize,
    /// Average field length across the collection.
    pub avg_doc_length: f32,
    /// Total number of documents in the collection.
    pub total_docs: usize,
}

pub trait Scorer: Send + Sync {
    /// Score one term occurrence: `term_freq` occurrences in the document,
    /// `doc_freq` documents containing the term.
    fn score(&self, term_freq: u32, doc_freq: u32, stats: &DocStats) -> f32;

    fn name(&self) -> &str;
}

/// BM25 scorer.
pub struct Bm25Scorer {
    /// Term frequency saturation (default: 1.2).
    pub k1: f32,
    /// Length normalization strength (default: 0.75).
    pub b: f32,
}

impl Default for Bm25Scorer {
    fn default() -> Self {
        Bm25Scorer { k1: 1.2, b: 0.75 }
    }
}

impl Bm25Scorer {
    /// Lucene-style idf. Strictly positive even when a term occurs in
    /// every document, so ranking never degenerates to all-zero scores.
    fn idf(&self, doc_freq: u32, total_docs: usize) -> f32 {
        let n = total_docs as f32;
        let df = doc_freq as f32;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }
}

impl Scorer for Bm25Scorer {
    fn score(&self, term_freq: u32, doc_freq: u32, stats: &DocStats) -> f32 {
        let tf = term_freq as f32;
        let doc_len = stats.doc_length as f32;
        let avg_doc_len = if stats.avg_doc_length > 0.0 {
            stats.avg_doc_length
        } else {
            1.0
        };

        let idf = self.idf(doc_freq, stats.total_docs);
        let numerator = idf * tf * (self.k1 + 1.0);
        let denominator = tf + self.k1 * (1.0 - self.b + self.b * (doc_len / avg_doc_len));

        numerator / denominator
    }

    fn name(&self) -> &str {
        "bm25"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(doc_length: usize) -> DocStats {
        DocStats {
            doc_length,
            avg_doc_length: 10.0,
            total_docs: 100,
        }
    }

    #[test]
    fn scores_are_non_negative() {
        let scorer = Bm25Scorer::default();
        assert!(scorer.score(1, 1, &stats(10)) >= 0.0);
        assert!(scorer.score(0, 50, &stats(10)) >= 0.0);
    }

    #[test]
    fn rarer_terms_score_higher() {
        let scorer = Bm25Scorer::default();
        let rare = scorer.score(1, 1, &stats(10));
        let common = scorer.score(1, 90, &stats(10));
        assert!(rare > common);
    }

    #[test]
    fn higher_term_frequency_scores_higher() {
        let scorer = Bm25Scorer::default();
        let once = scorer.score(1, 5, &stats(10));
        let thrice = scorer.score(3, 5, &stats(10));
        assert!(thrice > once);
    }

    #[test]
    fn longer_documents_are_penalized() {
        let scorer = Bm25Scorer::default();
        let short = scorer.score(2, 5, &stats(5));
        let long = scorer.score(2, 5, &stats(50));
        assert!(short > long);
    }
}
