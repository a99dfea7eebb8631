//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use board_core::entities::{Category, Part, Post, User};
use board_core::value_objects::Page;

use super::responses::{
    CategoryResponse, PartResponse, PostCommonListResponse, PostCommonSummaryResponse,
    PostDetailResponse, PostEducationListResponse, PostEducationSummaryResponse, WriterResponse,
};

// ============================================================================
// Reference Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<&Part> for PartResponse {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id,
            name: part.name.clone(),
        }
    }
}

impl From<&User> for WriterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

/// Post with every reference it points at
#[derive(Debug, Clone)]
pub struct PostWithDetails {
    pub post: Post,
    pub category: Category,
    pub part: Part,
    pub writer: User,
}

impl From<PostWithDetails> for PostDetailResponse {
    fn from(details: PostWithDetails) -> Self {
        let PostWithDetails {
            post,
            category,
            part,
            writer,
        } = details;

        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            members: post.members,
            category: CategoryResponse::from(&category),
            part: PartResponse::from(&part),
            writer: WriterResponse::from(&writer),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Post paired with its writer, for general listings
#[derive(Debug, Clone)]
pub struct PostWithWriter {
    pub post: Post,
    pub writer: User,
}

impl From<PostWithWriter> for PostCommonSummaryResponse {
    fn from(value: PostWithWriter) -> Self {
        Self {
            id: value.post.id,
            title: value.post.title,
            writer: WriterResponse::from(&value.writer),
            created_at: value.post.created_at,
        }
    }
}

/// Post paired with its part, for education listings
#[derive(Debug, Clone)]
pub struct PostWithPart {
    pub post: Post,
    pub part: Part,
}

impl From<PostWithPart> for PostEducationSummaryResponse {
    fn from(value: PostWithPart) -> Self {
        Self {
            id: value.post.id,
            title: value.post.title,
            members: value.post.members,
            part: PartResponse::from(&value.part),
            created_at: value.post.created_at,
        }
    }
}

// ============================================================================
// Listing Mappers
// ============================================================================

impl From<Page<PostCommonSummaryResponse>> for PostCommonListResponse {
    fn from(page: Page<PostCommonSummaryResponse>) -> Self {
        let total_pages = page.total_pages();
        Self {
            page: page.number,
            total_pages,
            posts: page.content,
        }
    }
}

impl From<Page<PostEducationSummaryResponse>> for PostEducationListResponse {
    fn from(page: Page<PostEducationSummaryResponse>) -> Self {
        let total_pages = page.total_pages();
        Self {
            page: page.number,
            total_pages,
            posts: page.content,
        }
    }
}
