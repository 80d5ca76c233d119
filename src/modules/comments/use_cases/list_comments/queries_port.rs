use async_trait::async_trait;

use crate::modules::comments::core::pagination::{CommentPage, PageRequest};

#[async_trait]
pub trait CommentQueries: Send + Sync {
    /// Returns the requested page in store order plus the total count.
    async fn list(&self, request: PageRequest) -> CommentPage;
}
