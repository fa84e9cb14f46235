use crate::core::types::DocId;

#[derive(Debug, Clone)]
pub struct Posting {
    pub doc_id: DocId,
    /// Term frequency in the field.
    pub term_freq: u32,
    /// Token positions, for future phrase support.
    pub positions: Vec<u32>,
}

/// Posting list for a term. Sorted by doc id for efficient merging.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    /// Insert or replace the posting for its doc id, keeping sort order.
    pub fn add_posting(&mut self, posting: Posting) {
        match self
            .postings
            .binary_search_by(|p| p.doc_id.cmp(&posting.doc_id))
        {
            Ok(pos) => self.postings[pos] = posting,
            Err(pos) => self.postings.insert(pos, posting),
        }
    }

    /// Remove the posting for a doc id. No-op when absent.
    pub fn remove(&mut self, doc_id: &DocId) {
        if let Ok(pos) = self.postings.binary_search_by(|p| p.doc_id.cmp(doc_id)) {
            self.postings.remove(pos);
        }
    }

    pub fn get(&self, doc_id: &DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by(|p| p.doc_id.cmp(doc_id))
            .ok()
            .map(|pos| &self.postings[pos])
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u32 {
        self.postings.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.postings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, freq: u32) -> Posting {
        Posting {
            doc_id: DocId::from(id),
            term_freq: freq,
            positions: Vec::new(),
        }
    }

    #[test]
    fn postings_stay_sorted_by_doc_id() {
        let mut list = PostingList::new();
        list.add_posting(posting("c", 1));
        list.add_posting(posting("a", 1));
        list.add_posting(posting("b", 1));

        let ids: Vec<&str> = list.iter().map(|p| p.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn adding_same_doc_replaces_the_posting() {
        let mut list = PostingList::new();
        list.add_posting(posting("a", 1));
        list.add_posting(posting("a", 5));

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&DocId::from("a")).unwrap().term_freq, 5);
    }

    #[test]
    fn remove_is_a_noop_for_unknown_ids() {
        let mut list = PostingList::new();
        list.add_posting(posting("a", 1));
        list.remove(&DocId::from("zzz"));
        assert_eq!(list.len(), 1);

        list.remove(&DocId::from("a"));
        assert!(list.is_empty());
    }
}
