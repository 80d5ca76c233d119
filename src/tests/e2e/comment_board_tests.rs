// End to end in memory flows across the list, add and delete use cases,
// all sharing one seeded store.
use crate::modules::comments::core::pagination::PageRequest;
use crate::modules::comments::core::seed::seed_comments;
use crate::modules::comments::use_cases::delete_comment::command::DeleteComment;
use crate::modules::comments::use_cases::delete_comment::handler::DeleteCommentError;
use crate::shell::state::AppState;
use crate::tests::fixtures::AddCommentBuilder;

#[tokio::test]
async fn adds_a_comment_to_the_seeded_board() {
    let state = AppState::seeded();

    let added = state
        .add_handler
        .handle(AddCommentBuilder::new().name("X").content("Y").build())
        .await;
    assert_eq!(added.id, 3);

    let page = state.list_handler.handle(PageRequest::new(1, 10)).await;
    assert_eq!(page.total, 4);
    assert_eq!(page.comments.last(), Some(&added));
}

#[tokio::test]
async fn deletes_the_seeded_duplicates_first_match_first() {
    let state = AppState::seeded();
    let seed = seed_comments();

    state.delete_handler.handle(DeleteComment { id: 2 }).await.unwrap();
    let page = state.list_handler.handle(PageRequest::default()).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.comments, vec![seed[0].clone(), seed[2].clone()]);

    state.delete_handler.handle(DeleteComment { id: 2 }).await.unwrap();
    let page = state.list_handler.handle(PageRequest::default()).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.comments, vec![seed[0].clone()]);
}

#[tokio::test]
async fn leaves_the_board_unchanged_when_deleting_an_unknown_id() {
    let state = AppState::seeded();
    let before = state.list_handler.handle(PageRequest::default()).await;

    let result = state.delete_handler.handle(DeleteComment { id: 999 }).await;
    assert_eq!(result, Err(DeleteCommentError::NotFound { id: 999 }));

    let after = state.list_handler.handle(PageRequest::default()).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn pages_through_added_comments_in_insertion_order() {
    let state = AppState::seeded();
    for n in 0..7 {
        state
            .add_handler
            .handle(AddCommentBuilder::new().name(format!("user-{n}")).build())
            .await;
    }

    let mut seen = Vec::new();
    for page in 1..=4 {
        let result = state.list_handler.handle(PageRequest::new(page, 3)).await;
        assert_eq!(result.total, 10);
        assert!(result.comments.len() <= 3);
        seen.extend(result.comments);
    }

    let all = state.list_handler.handle(PageRequest::new(1, 100)).await;
    assert_eq!(seen, all.comments);
    let added_ids: Vec<_> = all.comments[3..].iter().map(|c| c.id).collect();
    assert_eq!(added_ids, (3..10).collect::<Vec<_>>());
}
