//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Methods take `&mut self`: every call runs inside a unit of work that owns
//! a single transaction.

use async_trait::async_trait;

use crate::entities::{Category, NewPost, Part, Post, User};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, Page, PageRequest, PartId, PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reference Repositories (read-only)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send {
    /// Find user by ID
    async fn find_by_id(&mut self, id: UserId) -> RepoResult<Option<User>>;

    /// Find every user whose id is in `ids`; missing ids are skipped
    async fn find_by_ids(&mut self, ids: &[UserId]) -> RepoResult<Vec<User>>;
}

#[async_trait]
pub trait CategoryRepository: Send {
    /// Find category by ID
    async fn find_by_id(&mut self, id: CategoryId) -> RepoResult<Option<Category>>;
}

#[async_trait]
pub trait PartRepository: Send {
    /// Find part by ID
    async fn find_by_id(&mut self, id: PartId) -> RepoResult<Option<Part>>;

    /// Find every part whose id is in `ids`; missing ids are skipped
    async fn find_by_ids(&mut self, ids: &[PartId]) -> RepoResult<Vec<Part>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send {
    /// Find post by ID
    async fn find_by_id(&mut self, id: PostId) -> RepoResult<Option<Post>>;

    /// Persist a new post and return it with its assigned id
    async fn insert(&mut self, post: &NewPost) -> RepoResult<Post>;

    /// Write back every mutable field of an existing post
    async fn update(&mut self, post: &Post) -> RepoResult<Post>;

    /// Remove a post
    async fn delete(&mut self, post: &Post) -> RepoResult<()>;

    /// List posts of a category, oldest first
    async fn find_by_category(
        &mut self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<Page<Post>>;
}
