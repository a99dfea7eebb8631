//! Test fixtures and data generators
//!
//! Provides reusable reference data and request builders for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use board_core::entities::{Category, Part, User};
use board_core::value_objects::{CategoryId, PartId, UserId};
use board_service::dto::PostCreateRequest;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Ids of the reference rows a seeded board holds
#[derive(Debug, Clone, Copy)]
pub struct BoardIds {
    /// Writes every fixture post
    pub writer: UserId,
    /// Has no posts of its own
    pub stranger: UserId,
    pub free_category: CategoryId,
    pub education_category: CategoryId,
    pub backend: PartId,
    pub frontend: PartId,
}

/// Reference data for an in-memory board
///
/// Ids match the example scenario: writer 10, stranger 99, category 1, part 1.
pub fn in_memory_references() -> (Vec<User>, Vec<Category>, Vec<Part>, BoardIds) {
    let ids = BoardIds {
        writer: UserId::new(10),
        stranger: UserId::new(99),
        free_category: CategoryId::new(1),
        education_category: CategoryId::new(2),
        backend: PartId::new(1),
        frontend: PartId::new(2),
    };

    let users = vec![
        User::new(
            ids.writer,
            "lion".to_string(),
            "lion@example.com".to_string(),
        ),
        User::new(
            ids.stranger,
            "tiger".to_string(),
            "tiger@example.com".to_string(),
        ),
    ];
    let categories = vec![
        Category::new(ids.free_category, "free"),
        Category::new(ids.education_category, "education"),
    ];
    let parts = vec![
        Part::new(ids.backend, "backend"),
        Part::new(ids.frontend, "frontend"),
    ];

    (users, categories, parts, ids)
}

/// Builder for post bodies
#[derive(Debug, Clone)]
pub struct PostRequestBuilder {
    request: PostCreateRequest,
}

impl PostRequestBuilder {
    pub fn new(title: &str, category: CategoryId, part: PartId) -> Self {
        Self {
            request: PostCreateRequest {
                title: title.to_string(),
                content: format!("{title} content"),
                members: 2,
                category,
                part,
            },
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.request.content = content.to_string();
        self
    }

    pub fn members(mut self, members: i32) -> Self {
        self.request.members = members;
        self
    }

    pub fn build(self) -> PostCreateRequest {
        self.request
    }
}
