use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::comments::use_cases::delete_comment::command::DeleteComment;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteCommentMutation;

#[Object]
impl DeleteCommentMutation {
    async fn delete_comment(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(DeleteComment { id })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
