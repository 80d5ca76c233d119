use std::sync::Arc;

use thiserror::Error;

use crate::modules::comments::core::comment::CommentId;
use crate::modules::comments::use_cases::delete_comment::command::DeleteComment;
use crate::shared::infrastructure::comment_store::CommentStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound { id: CommentId },
}

pub struct DeleteCommentHandler<TStore>
where
    TStore: CommentStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteCommentHandler<TStore>
where
    TStore: CommentStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Removes the first comment with the given id.
    pub async fn handle(&self, command: DeleteComment) -> Result<(), DeleteCommentError> {
        if self.store.remove_first(command.id).await {
            tracing::info!(comment_id = command.id, "comment deleted");
            Ok(())
        } else {
            tracing::info!(comment_id = command.id, "comment to delete not found");
            Err(DeleteCommentError::NotFound { id: command.id })
        }
    }
}
