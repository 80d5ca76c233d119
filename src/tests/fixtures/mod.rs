pub mod add_comment;

pub use add_comment::AddCommentBuilder;
