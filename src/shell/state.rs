use std::sync::Arc;

use crate::modules::comments::use_cases::add_comment::handler::AddCommentHandler;
use crate::modules::comments::use_cases::delete_comment::handler::DeleteCommentHandler;
use crate::modules::comments::use_cases::list_comments::handler::ListCommentsHandler;
use crate::shared::infrastructure::comment_store::in_memory::InMemoryCommentStore;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListCommentsHandler<InMemoryCommentStore>>,
    pub add_handler: Arc<AddCommentHandler<InMemoryCommentStore>>,
    pub delete_handler: Arc<DeleteCommentHandler<InMemoryCommentStore>>,
}

impl AppState {
    /// Wires every handler to the same store instance.
    pub fn new(store: Arc<InMemoryCommentStore>) -> Self {
        Self {
            list_handler: Arc::new(ListCommentsHandler::new(store.clone())),
            add_handler: Arc::new(AddCommentHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteCommentHandler::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryCommentStore::seeded()))
    }
}
