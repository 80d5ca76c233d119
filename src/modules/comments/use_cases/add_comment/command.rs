#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub name: String,
    pub content: String,
}
