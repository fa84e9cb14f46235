use crate::core::error::Result;
use crate::core::types::{DocId, Document};
use crate::store::DocumentStore;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory document store. The reference `DocumentStore` implementation,
/// used by tests and as the default backend for small corpora.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<DocId, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentStore for MemoryStore {
    async fn load_documents(&self, user_id: &str) -> Result<Vec<Document>> {
        let documents = self.documents.read();
        let mut docs: Vec<Document> = documents
            .values()
            .filter(|doc| doc.user_id == user_id)
            .cloned()
            .collect();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs)
    }

    async fn load_document(&self, id: &DocId) -> Result<Option<Document>> {
        Ok(self.documents.read().get(id).cloned())
    }

    async fn save_document(&self, mut doc: Document) -> Result<DocId> {
        if doc.id.is_empty() {
            doc.id = DocId::new(Uuid::new_v4().to_string());
        }
        doc.updated_at = Utc::now();

        let id = doc.id.clone();
        self.documents.write().insert(id.clone(), doc);
        tracing::debug!(id = %id, "document saved");
        Ok(id)
    }

    async fn delete_document(&self, id: &DocId) -> Result<()> {
        self.documents.write().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_an_id_when_missing() {
        let store = MemoryStore::new();
        let id = store
            .save_document(Document::new("", "T", "C", "user-1"))
            .await
            .unwrap();
        assert!(!id.is_empty());
        assert!(store.load_document(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn load_documents_is_scoped_to_the_user() {
        let store = MemoryStore::new();
        store
            .save_document(Document::new("a", "Mine", "x", "user-1"))
            .await
            .unwrap();
        store
            .save_document(Document::new("b", "Theirs", "y", "user-2"))
            .await
            .unwrap();

        let docs = store.load_documents("user-1").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Mine");
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() {
        let store = MemoryStore::new();
        store
            .save_document(Document::new("a", "Old", "x", "user-1"))
            .await
            .unwrap();
        store
            .save_document(Document::new("a", "New", "x", "user-1"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        let doc = store.load_document(&DocId::from("a")).await.unwrap();
        assert_eq!(doc.unwrap().title, "New");
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_unknown_ids() {
        let store = MemoryStore::new();
        store.delete_document(&DocId::from("ghost")).await.unwrap();
        assert!(store.is_empty());
    }
}
