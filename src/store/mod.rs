pub mod memory;

use crate::core::error::Result;
use crate::core::types::{DocId, Document};

/// Persistence boundary for documents. The search core only reads through
/// `load_documents`/`load_document`; writes go through the service so the
/// index stays consistent with the store.
#[allow(async_fn_in_trait)]
pub trait DocumentStore: Send + Sync {
    /// All documents owned by a user, newest first.
    async fn load_documents(&self, user_id: &str) -> Result<Vec<Document>>;

    async fn load_document(&self, id: &DocId) -> Result<Option<Document>>;

    /// Insert or update a document, assigning an id when the document has
    /// none. Returns the effective id.
    async fn save_document(&self, doc: Document) -> Result<DocId>;

    /// Delete by id. Deleting an unknown id is a no-op.
    async fn delete_document(&self, id: &DocId) -> Result<()>;
}
