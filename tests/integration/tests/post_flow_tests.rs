//! Post Flow Tests
//!
//! Every scenario runs against the in-memory store. The PostgreSQL variants
//! additionally require DATABASE_URL and skip otherwise.
//!
//! Run with: cargo test -p integration-tests --test post_flow_tests

use std::collections::HashSet;

use board_core::value_objects::{PostId, UserId};
use board_core::DomainError;
use board_service::dto::PageQuery;
use board_service::ServiceError;
use integration_tests::{expect_status, PostRequestBuilder, TestBoard};

// ============================================================================
// Scenarios
// ============================================================================

async fn writer_can_modify_but_stranger_cannot(board: &TestBoard) {
    let ids = board.ids;
    let service = board.service();

    let created = service
        .add_post(
            PostRequestBuilder::new("A", ids.free_category, ids.backend)
                .content("B")
                .members(2)
                .build(),
            ids.writer,
        )
        .await
        .expect("create failed");
    assert_eq!(created.title, "A");
    assert_eq!(created.writer.id, ids.writer);

    let modified = service
        .modify_post(
            created.id,
            PostRequestBuilder::new("A2", ids.free_category, ids.backend).build(),
            ids.writer,
        )
        .await
        .expect("modify failed");
    assert_eq!(modified.title, "A2");

    let result = service
        .modify_post(
            created.id,
            PostRequestBuilder::new("A3", ids.free_category, ids.backend).build(),
            ids.stranger,
        )
        .await;
    expect_status(result, 403).unwrap();

    let current = service.get_post(created.id).await.expect("get failed");
    assert_eq!(current.title, "A2");
}

async fn delete_requires_writer(board: &TestBoard) {
    let ids = board.ids;
    let service = board.service();

    let created = service
        .add_post(
            PostRequestBuilder::new("to delete", ids.free_category, ids.frontend).build(),
            ids.writer,
        )
        .await
        .unwrap();

    expect_status(service.delete_post(created.id, ids.stranger).await, 403).unwrap();
    assert!(service.get_post(created.id).await.is_ok());

    let deleted = service.delete_post(created.id, ids.writer).await.unwrap();
    assert_eq!(deleted, created);

    expect_status(service.get_post(created.id).await, 404).unwrap();
    expect_status(service.delete_post(created.id, ids.writer).await, 404).unwrap();
}

async fn listing_pages_in_creation_order(board: &TestBoard) {
    let ids = board.ids;
    let service = board.service();

    for i in 0..5 {
        service
            .add_post(
                PostRequestBuilder::new(&format!("edu-{i}"), ids.education_category, ids.backend)
                    .members(i + 1)
                    .build(),
                ids.writer,
            )
            .await
            .unwrap();
    }
    service
        .add_post(
            PostRequestBuilder::new("elsewhere", ids.free_category, ids.backend).build(),
            ids.writer,
        )
        .await
        .unwrap();

    let mut seen = Vec::new();
    for page in 0..3 {
        let list = service
            .get_education_list(PageQuery::new(page, 2), ids.education_category)
            .await
            .unwrap();
        assert_eq!(list.page, page);
        assert_eq!(list.total_pages, 3);
        seen.extend(list.posts.into_iter().map(|p| (p.title, p.members)));
    }
    let expected: Vec<_> = (0..5).map(|i| (format!("edu-{i}"), i + 1)).collect();
    assert_eq!(seen, expected);

    let past_end = service
        .get_common_list(PageQuery::new(7, 2), ids.education_category)
        .await
        .unwrap();
    assert!(past_end.posts.is_empty());
    assert_eq!(past_end.total_pages, 3);
}

// ============================================================================
// In-memory Tests
// ============================================================================

#[tokio::test]
async fn test_modify_flow_in_memory() {
    writer_can_modify_but_stranger_cannot(&TestBoard::in_memory()).await;
}

#[tokio::test]
async fn test_delete_flow_in_memory() {
    delete_requires_writer(&TestBoard::in_memory()).await;
}

#[tokio::test]
async fn test_listing_flow_in_memory() {
    listing_pages_in_creation_order(&TestBoard::in_memory()).await;
}

#[tokio::test]
async fn test_get_returns_created_post() {
    let board = TestBoard::in_memory();
    let ids = board.ids;
    let service = board.service();

    let created = service
        .add_post(
            PostRequestBuilder::new("hello", ids.free_category, ids.frontend).build(),
            ids.writer,
        )
        .await
        .unwrap();
    let fetched = service.get_post(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.category.id, ids.free_category);
    assert_eq!(fetched.part.id, ids.frontend);
}

#[tokio::test]
async fn test_failed_create_persists_nothing() {
    let board = TestBoard::in_memory();
    let ids = board.ids;
    let service = board.service();
    let store = board.store().unwrap();

    let err = expect_status(
        service
            .add_post(
                PostRequestBuilder::new("x", ids.free_category, ids.backend).build(),
                UserId::new(12_345),
            )
            .await,
        404,
    )
    .unwrap();
    assert!(matches!(err, ServiceError::Domain(DomainError::UserNotFound(_))));
    assert_eq!(err.error_code(), "UNKNOWN_USER");

    expect_status(
        service
            .add_post(
                PostRequestBuilder::new("x", ids.free_category, ids.backend)
                    .members(0)
                    .build(),
                ids.writer,
            )
            .await,
        400,
    )
    .unwrap();

    assert_eq!(store.post_count(), 0);
    let list = service
        .get_common_list(PageQuery::default(), ids.free_category)
        .await
        .unwrap();
    assert_eq!(list.total_pages, 0);
}

#[tokio::test]
async fn test_modify_moves_post_between_categories() {
    let board = TestBoard::in_memory();
    let ids = board.ids;
    let service = board.service();

    let created = service
        .add_post(
            PostRequestBuilder::new("mover", ids.free_category, ids.backend).build(),
            ids.writer,
        )
        .await
        .unwrap();
    service
        .modify_post(
            created.id,
            PostRequestBuilder::new("mover", ids.education_category, ids.frontend).build(),
            ids.writer,
        )
        .await
        .unwrap();

    let free = service
        .get_common_list(PageQuery::default(), ids.free_category)
        .await
        .unwrap();
    assert!(free.posts.is_empty());

    let education = service
        .get_education_list(PageQuery::default(), ids.education_category)
        .await
        .unwrap();
    assert_eq!(education.posts.len(), 1);
    assert_eq!(education.posts[0].id, created.id);
    assert_eq!(education.posts[0].part.id, ids.frontend);
}

#[tokio::test]
async fn test_unknown_post_and_category() {
    let board = TestBoard::in_memory();
    let ids = board.ids;
    let service = board.service();
    let missing = PostId::new(9_999);

    expect_status(service.get_post(missing).await, 404).unwrap();
    expect_status(
        service
            .modify_post(
                missing,
                PostRequestBuilder::new("x", ids.free_category, ids.backend).build(),
                ids.writer,
            )
            .await,
        404,
    )
    .unwrap();
    expect_status(service.delete_post(missing, ids.writer).await, 404).unwrap();
    expect_status(
        service
            .get_education_list(PageQuery::default(), board_core::CategoryId::new(777))
            .await,
        404,
    )
    .unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let board = TestBoard::in_memory();
    let ids = board.ids;
    let service = board.service();
    let request = |title: &str| PostRequestBuilder::new(title, ids.free_category, ids.backend).build();

    let (a, b, c) = tokio::join!(
        service.add_post(request("a"), ids.writer),
        service.add_post(request("b"), ids.writer),
        service.add_post(request("c"), ids.writer),
    );

    let created: HashSet<_> = [a.unwrap().id, b.unwrap().id, c.unwrap().id].into();
    assert_eq!(created.len(), 3);
    assert_eq!(board.store().unwrap().post_count(), 3);
}

#[tokio::test]
async fn test_detail_response_json_shape() {
    let board = TestBoard::in_memory();
    let ids = board.ids;

    let created = board
        .service()
        .add_post(
            PostRequestBuilder::new("json", ids.free_category, ids.backend).build(),
            ids.writer,
        )
        .await
        .unwrap();
    let json = serde_json::to_value(&created).unwrap();

    assert_eq!(json["id"], created.id.into_inner());
    assert_eq!(json["category"]["name"], "free");
    assert_eq!(json["part"]["name"], "backend");
    assert_eq!(json["writer"]["nickname"], "lion");
    assert!(json["writer"].get("email").is_none());
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_modify_flow_postgres() {
    let Some(board) = TestBoard::postgres().await.expect("Failed to set up board") else {
        return;
    };
    writer_can_modify_but_stranger_cannot(&board).await;
}

#[tokio::test]
async fn test_delete_flow_postgres() {
    let Some(board) = TestBoard::postgres().await.expect("Failed to set up board") else {
        return;
    };
    delete_requires_writer(&board).await;
}

#[tokio::test]
async fn test_listing_flow_postgres() {
    let Some(board) = TestBoard::postgres().await.expect("Failed to set up board") else {
        return;
    };
    listing_pages_in_creation_order(&board).await;
}
