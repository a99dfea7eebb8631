//! Response DTOs for post operations
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids serialize as plain numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use board_core::value_objects::{CategoryId, PartId, PostId, UserId};

// ============================================================================
// Reference Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartResponse {
    pub id: PartId,
    pub name: String,
}

/// Public view of a post's writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriterResponse {
    pub id: UserId,
    pub nickname: String,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Full post with every reference resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub members: i32,
    pub category: CategoryResponse,
    pub part: PartResponse,
    pub writer: WriterResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of a general board listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCommonSummaryResponse {
    pub id: PostId,
    pub title: String,
    pub writer: WriterResponse,
    pub created_at: DateTime<Utc>,
}

/// Row of an education board listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEducationSummaryResponse {
    pub id: PostId,
    pub title: String,
    pub members: i32,
    pub part: PartResponse,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Listing Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCommonListResponse {
    pub posts: Vec<PostCommonSummaryResponse>,
    /// Page index (0-indexed)
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEducationListResponse {
    pub posts: Vec<PostEducationSummaryResponse>,
    /// Page index (0-indexed)
    pub page: u32,
    pub total_pages: u32,
}
