use crate::modules::comments::core::comment::{Comment, CommentId};

/// Counter value handed out to the first comment added after seeding.
pub const SEED_NEXT_ID: CommentId = 3;

/// Comments the board starts with on every process start.
///
/// Two entries share id 2. This is kept as-is for compatibility with
/// existing clients; deleting id 2 removes the first of them only.
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment::new(1, "User1", "This is the first comment!"),
        Comment::new(2, "User2", "Hello World!"),
        Comment::new(2, "User2", "我想放假www"),
    ]
}
