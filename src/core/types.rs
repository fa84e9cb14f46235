use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned document identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored document. Owned by the document store; the search core only
/// holds transient copies while a search runs.
///
/// `content` is an arbitrary UTF-8 blob with `\n`-delimited paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        id: impl Into<DocId>,
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Document {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Reduced projection of a document held inside the inverted index.
/// Rebuilt from the store or maintained incrementally, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: DocId,
    pub title: String,
    pub content: String,
}

impl From<&Document> for IndexEntry {
    fn from(doc: &Document) -> Self {
        IndexEntry {
            id: doc.id.clone(),
            title: doc.title.clone(),
            content: doc.content.clone(),
        }
    }
}

/// Indexed fields of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_entry_projects_document() {
        let doc = Document::new("d1", "Title", "Body text", "user-1");
        let entry = IndexEntry::from(&doc);
        assert_eq!(entry.id, DocId::from("d1"));
        assert_eq!(entry.title, "Title");
        assert_eq!(entry.content, "Body text");
    }

    #[test]
    fn field_names_match_store_schema() {
        assert_eq!(Field::Title.as_str(), "title");
        assert_eq!(Field::Content.as_str(), "content");
    }
}
