use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::comments::use_cases::add_comment::command::AddComment;
use crate::modules::comments::use_cases::list_comments::inbound::graphql::GqlComment;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddCommentMutation;

#[Object]
impl AddCommentMutation {
    async fn add_comment(
        &self,
        context: &Context<'_>,
        name: String,
        content: String,
    ) -> GqlResult<GqlComment> {
        let state = context.data_unchecked::<AppState>();
        let comment = state
            .add_handler
            .handle(AddComment { name, content })
            .await;
        Ok(comment.into())
    }
}
