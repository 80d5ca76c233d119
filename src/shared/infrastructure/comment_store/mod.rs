// Write side of the comment board.
//
// Implementations own the ordered comment sequence and the id counter and
// must apply each call as one atomic step: no caller may observe a counter
// bump without the matching insert.

pub mod in_memory;

use async_trait::async_trait;

use crate::modules::comments::core::comment::{Comment, CommentId};

#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Stores a new comment at the end of the sequence under the next id.
    async fn append(&self, name: String, content: String) -> Comment;

    /// Removes the first comment carrying `id`. Returns whether one was found.
    async fn remove_first(&self, id: CommentId) -> bool;
}
