use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::comments::core::comment::Comment;
use crate::modules::comments::core::pagination::{CommentPage, PageRequest};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Comment")]
pub struct GqlComment {
    pub id: i64,
    pub name: String,
    pub content: String,
}

impl From<Comment> for GqlComment {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            name: c.name,
            content: c.content,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "CommentPage")]
pub struct GqlCommentPage {
    pub total: u64,
    pub comments: Vec<GqlComment>,
}

impl From<CommentPage> for GqlCommentPage {
    fn from(p: CommentPage) -> Self {
        Self {
            total: p.total as u64,
            comments: p.comments.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn comments(
        &self,
        context: &Context<'_>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> GqlResult<GqlCommentPage> {
        let state = context.data_unchecked::<AppState>();
        let request = PageRequest::new(page.unwrap_or(0), size.unwrap_or(0));
        let page = state.list_handler.handle(request).await;
        Ok(page.into())
    }
}
