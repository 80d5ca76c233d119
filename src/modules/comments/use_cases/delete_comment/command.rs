use crate::modules::comments::core::comment::CommentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteComment {
    pub id: CommentId,
}
