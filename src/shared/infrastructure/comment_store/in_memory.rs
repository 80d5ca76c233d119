// In memory comment store.
//
// One reader/writer lock guards both the sequence and the id counter.
// Listing takes the read side; append and remove take the write side.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::comments::core::comment::{Comment, CommentId};
use crate::modules::comments::core::pagination::{CommentPage, PageRequest};
use crate::modules::comments::core::seed::{SEED_NEXT_ID, seed_comments};
use crate::modules::comments::use_cases::list_comments::queries_port::CommentQueries;
use crate::shared::infrastructure::comment_store::CommentStore;

#[derive(Debug)]
struct Board {
    comments: Vec<Comment>,
    next_id: CommentId,
}

#[derive(Debug)]
pub struct InMemoryCommentStore {
    board: RwLock<Board>,
}

impl Default for InMemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), 1)
    }

    /// Store holding the fixed start-up data set.
    pub fn seeded() -> Self {
        Self::from_parts(seed_comments(), SEED_NEXT_ID)
    }

    fn from_parts(comments: Vec<Comment>, next_id: CommentId) -> Self {
        Self {
            board: RwLock::new(Board { comments, next_id }),
        }
    }
}

#[cfg(test)]
impl InMemoryCommentStore {
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let next_id = comments.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        Self::from_parts(comments, next_id)
    }

    pub async fn len(&self) -> usize {
        self.board.read().await.comments.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn snapshot(&self) -> Vec<Comment> {
        self.board.read().await.comments.clone()
    }

    pub async fn next_id(&self) -> CommentId {
        self.board.read().await.next_id
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn append(&self, name: String, content: String) -> Comment {
        let mut board = self.board.write().await;
        let comment = Comment {
            id: board.next_id,
            name,
            content,
        };
        board.next_id += 1;
        board.comments.push(comment.clone());
        comment
    }

    async fn remove_first(&self, id: CommentId) -> bool {
        let mut board = self.board.write().await;
        match board.comments.iter().position(|c| c.id == id) {
            Some(index) => {
                board.comments.remove(index);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl CommentQueries for InMemoryCommentStore {
    async fn list(&self, request: PageRequest) -> CommentPage {
        let board = self.board.read().await;
        CommentPage {
            total: board.comments.len(),
            comments: request.slice(&board.comments).to_vec(),
        }
    }
}

#[cfg(test)]
mod in_memory_comment_store_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[fixture]
    fn seeded() -> InMemoryCommentStore {
        InMemoryCommentStore::seeded()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_from_the_seed_data(seeded: InMemoryCommentStore) {
        assert_eq!(seeded.len().await, 3);
        assert_eq!(seeded.next_id().await, 3);
        assert_eq!(seeded.snapshot().await, seed_comments());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty_with_the_counter_at_one() {
        let store = InMemoryCommentStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.append("a".into(), "b".into()).await.id, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_place_the_counter_past_the_highest_given_id() {
        let store = InMemoryCommentStore::with_comments(vec![
            Comment::new(9, "a", "a"),
            Comment::new(4, "b", "b"),
        ]);
        assert_eq!(store.next_id().await, 10);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_the_counter_and_append_at_the_end(seeded: InMemoryCommentStore) {
        let added = seeded.append("X".into(), "Y".into()).await;
        assert_eq!(added, Comment::new(3, "X", "Y"));
        assert_eq!(seeded.next_id().await, 4);
        assert_eq!(seeded.snapshot().await.last(), Some(&added));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_empty_strings(seeded: InMemoryCommentStore) {
        let added = seeded.append(String::new(), String::new()).await;
        assert_eq!(added.name, "");
        assert_eq!(added.content, "");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_only_the_first_duplicate(seeded: InMemoryCommentStore) {
        assert!(seeded.remove_first(2).await);
        let remaining = seeded.snapshot().await;
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[1].content, "我想放假www");

        assert!(seeded.remove_first(2).await);
        assert_eq!(seeded.snapshot().await, vec![seed_comments()[0].clone()]);

        assert!(!seeded.remove_first(2).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_store_untouched_when_the_id_is_absent(
        seeded: InMemoryCommentStore,
    ) {
        assert!(!seeded.remove_first(999).await);
        assert_eq!(seeded.snapshot().await, seed_comments());
        assert_eq!(seeded.next_id().await, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_reuse_ids_after_deletion(seeded: InMemoryCommentStore) {
        let added = seeded.append("a".into(), "a".into()).await;
        assert!(seeded.remove_first(added.id).await);
        let next = seeded.append("b".into(), "b".into()).await;
        assert!(next.id > added.id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_preserve_relative_order_after_removal() {
        let store = InMemoryCommentStore::new();
        for n in 0..5 {
            store.append(format!("n{n}"), String::new()).await;
        }
        assert!(store.remove_first(3).await);
        let ids: Vec<_> = store.snapshot().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_a_page_and_the_unfiltered_total(seeded: InMemoryCommentStore) {
        let page = seeded.list(PageRequest::new(2, 2)).await;
        assert_eq!(page.total, 3);
        assert_eq!(page.comments, vec![seed_comments()[2].clone()]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_an_empty_page_past_the_end(seeded: InMemoryCommentStore) {
        let page = seeded.list(PageRequest::new(10, 10)).await;
        assert_eq!(page.total, 3);
        assert!(page.comments.is_empty());
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn it_should_hand_out_unique_ids_under_concurrent_appends() {
        let store = Arc::new(InMemoryCommentStore::seeded());
        let tasks: Vec<_> = (0..64)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move { store.append(format!("u{n}"), "c".into()).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            let comment = task.await.unwrap();
            assert!(comment.id >= 3);
            assert!(ids.insert(comment.id), "duplicate id {}", comment.id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(store.len().await, 67);
        assert_eq!(store.next_id().await, 67);
    }
}
