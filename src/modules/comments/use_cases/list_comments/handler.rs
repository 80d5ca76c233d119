use std::sync::Arc;

use crate::modules::comments::core::pagination::{CommentPage, PageRequest};
use crate::modules::comments::use_cases::list_comments::queries_port::CommentQueries;

pub struct ListCommentsHandler<TQueries>
where
    TQueries: CommentQueries + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
}

impl<TQueries> ListCommentsHandler<TQueries>
where
    TQueries: CommentQueries + Send + Sync + 'static,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    pub async fn handle(&self, request: PageRequest) -> CommentPage {
        let page = self.queries.list(request).await;
        tracing::debug!(
            page = request.page(),
            size = request.size(),
            total = page.total,
            returned = page.comments.len(),
            "listed comments"
        );
        page
    }
}
