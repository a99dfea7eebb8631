//! Request DTOs for post operations
//!
//! Request DTOs implement `Deserialize`; bodies also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

use board_common::PaginationConfig;
use board_core::value_objects::{CategoryId, PageRequest, PartId};

// ============================================================================
// Post Requests
// ============================================================================

/// Body for creating or modifying a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostCreateRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    #[validate(range(min = 1, max = 1000, message = "Members must be between 1 and 1000"))]
    pub members: i32,

    pub category: CategoryId,

    pub part: PartId,
}

// ============================================================================
// Paging
// ============================================================================

/// Page selection for listings; missing values fall back to the configured defaults
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// Page index (0-indexed)
    pub page: Option<u32>,
    /// Items per page
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Resolve against the paging limits
    pub fn to_page_request(self, config: &PaginationConfig) -> PageRequest {
        let size = self
            .size
            .unwrap_or(config.default_size)
            .min(config.max_size);
        PageRequest::new(self.page.unwrap_or(0), size)
    }
}
