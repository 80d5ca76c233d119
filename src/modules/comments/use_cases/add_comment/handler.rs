use std::sync::Arc;

use crate::modules::comments::core::comment::Comment;
use crate::modules::comments::use_cases::add_comment::command::AddComment;
use crate::shared::infrastructure::comment_store::CommentStore;

pub struct AddCommentHandler<TStore>
where
    TStore: CommentStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddCommentHandler<TStore>
where
    TStore: CommentStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Name and content are stored verbatim; there is nothing to reject.
    pub async fn handle(&self, command: AddComment) -> Comment {
        let comment = self.store.append(command.name, command.content).await;
        tracing::info!(comment_id = comment.id, "comment added");
        comment
    }
}
