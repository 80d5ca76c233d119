use serde::{Deserialize, Serialize};

pub type CommentId = i64;

/// A single entry on the board. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub name: String,
    pub content: String,
}

impl Comment {
    pub fn new(id: CommentId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
        }
    }
}
