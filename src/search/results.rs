use crate::core::types::DocId;
use crate::snippet::position::MatchPosition;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A candidate returned by the inverted index: doc id plus relevance score.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    pub doc_id: DocId,
    pub score: f32,
}

// Heap ordering: reversed on score so the BinaryHeap acts as a min-heap.
impl PartialEq for ScoredHit {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredHit {}

impl PartialOrd for ScoredHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredHit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

/// Per-field group of index candidates, best first.
#[derive(Debug, Clone)]
pub struct FieldHits {
    pub field: crate::core::types::Field,
    pub hits: Vec<ScoredHit>,
}

/// The result shape handed to the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: DocId,
    pub title: String,
    pub content: String,
    /// Context snippet around the best match.
    pub context: String,
    pub position: MatchPosition,
    /// Context snippet with matched terms wrapped in `<mark>` markup.
    pub highlight: String,
    pub score: f32,
}

/// Keeps the k best hits seen so far using a bounded min-heap.
pub struct TopKCollector {
    heap: BinaryHeap<ScoredHit>,
    k: usize,
    min_score: f32,
    pub total_collected: usize,
}

impl TopKCollector {
    pub fn new(k: usize) -> Self {
        TopKCollector {
            heap: BinaryHeap::with_capacity(k + 1),
            k,
            min_score: 0.0,
            total_collected: 0,
        }
    }

    pub fn collect(&mut self, hit: ScoredHit) {
        self.total_collected += 1;

        if hit.score > self.min_score || self.heap.len() < self.k {
            self.heap.push(hit);

            if self.heap.len() > self.k {
                self.heap.pop();
                if let Some(min_hit) = self.heap.peek() {
                    self.min_score = min_hit.score;
                }
            }
        }
    }

    /// Drain into a list sorted best-first.
    pub fn into_results(self) -> Vec<ScoredHit> {
        let mut results: Vec<_> = self.heap.into_iter().collect();
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results
    }
}
