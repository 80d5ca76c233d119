// Shared test fixture for the AddComment command.

use crate::modules::comments::use_cases::add_comment::command::AddComment;

pub struct AddCommentBuilder {
    inner: AddComment,
}

impl Default for AddCommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddCommentBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddComment {
                name: "user-fixed-0001".to_string(),
                content: "This is a test".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn build(self) -> AddComment {
        self.inner
    }
}

#[cfg(test)]
mod add_comment_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let command = AddCommentBuilder::default().name("n").content("c").build();
        assert_eq!(
            command,
            AddComment {
                name: "n".into(),
                content: "c".into()
            }
        );
    }
}
