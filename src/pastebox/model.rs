use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single paste record, exactly as it is persisted in the slot.
///
/// `_id` and `createDate` are the field names used by early builds of the
/// browser app; they are accepted on read and never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "createdAt", alias = "createDate")]
    pub created_at: DateTime<Utc>,
}

impl Paste {
    pub fn new(id: String, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a paste. Without an id, the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl PasteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Replacement title and content for the paste matching `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl PasteUpdate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
