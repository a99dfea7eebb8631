//! Post service
//!
//! Handles post creation, lookup, modification, deletion, and the two
//! category listings. Every public operation runs inside one unit of work
//! that is committed on success and rolled back on any error.

use std::collections::{BTreeSet, HashMap};

use board_core::entities::{Category, NewPost, Part, Post, User};
use board_core::traits::UnitOfWork;
use board_core::value_objects::{CategoryId, Page, PageRequest, PartId, PostId, UserId};
use board_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    PageQuery, PostCommonListResponse, PostCommonSummaryResponse, PostCreateRequest,
    PostDetailResponse, PostEducationListResponse, PostEducationSummaryResponse, PostWithDetails,
    PostWithPart, PostWithWriter,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post written by `user_id`
    #[instrument(skip(self, request))]
    pub async fn add_post(
        &self,
        request: PostCreateRequest,
        user_id: UserId,
    ) -> ServiceResult<PostDetailResponse> {
        request.validate()?;

        let mut uow = self.ctx.begin().await?;
        let result = create(uow.as_mut(), request, user_id).await;
        let details = finish(uow, result).await?;

        info!(post_id = %details.post.id, "Post created");
        Ok(PostDetailResponse::from(details))
    }

    /// Get post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: PostId) -> ServiceResult<PostDetailResponse> {
        let mut uow = self.ctx.begin().await?;
        let result = read(uow.as_mut(), post_id).await;
        let details = finish(uow, result).await?;

        Ok(PostDetailResponse::from(details))
    }

    /// Replace the title, content, members, category, and part of a post
    ///
    /// Only the writer may modify a post.
    #[instrument(skip(self, request))]
    pub async fn modify_post(
        &self,
        post_id: PostId,
        request: PostCreateRequest,
        user_id: UserId,
    ) -> ServiceResult<PostDetailResponse> {
        request.validate()?;

        let mut uow = self.ctx.begin().await?;
        let result = modify(uow.as_mut(), post_id, request, user_id).await;
        let details = finish(uow, result).await?;

        info!(post_id = %post_id, "Post modified");
        Ok(PostDetailResponse::from(details))
    }

    /// Delete a post and return the view it had before removal
    ///
    /// Only the writer may delete a post.
    #[instrument(skip(self))]
    pub async fn delete_post(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<PostDetailResponse> {
        let mut uow = self.ctx.begin().await?;
        let result = remove(uow.as_mut(), post_id, user_id).await;
        let details = finish(uow, result).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(PostDetailResponse::from(details))
    }

    /// List a category's posts with their writers
    #[instrument(skip(self))]
    pub async fn get_common_list(
        &self,
        query: PageQuery,
        category_id: CategoryId,
    ) -> ServiceResult<PostCommonListResponse> {
        let page = self
            .list_by_category::<PostCommonSummaryResponse>(query, category_id)
            .await?;
        Ok(PostCommonListResponse::from(page))
    }

    /// List a category's posts with their parts and member counts
    #[instrument(skip(self))]
    pub async fn get_education_list(
        &self,
        query: PageQuery,
        category_id: CategoryId,
    ) -> ServiceResult<PostEducationListResponse> {
        let page = self
            .list_by_category::<PostEducationSummaryResponse>(query, category_id)
            .await?;
        Ok(PostEducationListResponse::from(page))
    }

    async fn list_by_category<R: ListingRow>(
        &self,
        query: PageQuery,
        category_id: CategoryId,
    ) -> ServiceResult<Page<R>> {
        let request = query.to_page_request(self.ctx.pagination());

        let mut uow = self.ctx.begin().await?;
        let result = list(uow.as_mut(), category_id, request).await;
        finish(uow, result).await
    }
}

// ============================================================================
// Operation bodies
// ============================================================================

async fn create(
    uow: &mut dyn UnitOfWork,
    request: PostCreateRequest,
    user_id: UserId,
) -> ServiceResult<PostWithDetails> {
    let writer = require_user(uow, user_id).await?;
    let category = require_category(uow, request.category).await?;
    let part = require_part(uow, request.part).await?;

    let new_post = NewPost {
        title: request.title,
        content: request.content,
        members: request.members,
        category_id: category.id,
        part_id: part.id,
        writer_id: writer.id,
    };
    let post = uow.posts().insert(&new_post).await?;

    Ok(PostWithDetails {
        post,
        category,
        part,
        writer,
    })
}

async fn read(uow: &mut dyn UnitOfWork, post_id: PostId) -> ServiceResult<PostWithDetails> {
    let post = require_post(uow, post_id).await?;
    load_details(uow, post).await
}

async fn modify(
    uow: &mut dyn UnitOfWork,
    post_id: PostId,
    request: PostCreateRequest,
    user_id: UserId,
) -> ServiceResult<PostWithDetails> {
    let mut post = require_post(uow, post_id).await?;
    ensure_writer(&post, user_id)?;

    let category = require_category(uow, request.category).await?;
    let part = require_part(uow, request.part).await?;

    post.modify(
        request.title,
        request.content,
        request.members,
        category.id,
        part.id,
    );
    let post = uow.posts().update(&post).await?;
    let writer = referenced_user(uow, &post).await?;

    Ok(PostWithDetails {
        post,
        category,
        part,
        writer,
    })
}

async fn remove(
    uow: &mut dyn UnitOfWork,
    post_id: PostId,
    user_id: UserId,
) -> ServiceResult<PostWithDetails> {
    let post = require_post(uow, post_id).await?;
    ensure_writer(&post, user_id)?;

    let details = load_details(uow, post).await?;
    uow.posts().delete(&details.post).await?;

    Ok(details)
}

async fn list<R: ListingRow>(
    uow: &mut dyn UnitOfWork,
    category_id: CategoryId,
    request: PageRequest,
) -> ServiceResult<Page<R>> {
    require_category(uow, category_id).await?;
    let posts = uow.posts().find_by_category(category_id, request).await?;

    let rows = if posts.content.is_empty() {
        Vec::new()
    } else {
        R::project_page(uow, posts.content).await?
    };

    Ok(Page {
        content: rows,
        number: posts.number,
        size: posts.size,
        total_elements: posts.total_elements,
    })
}

/// Commit when `result` is Ok, otherwise roll back and hand the error back
async fn finish<T>(uow: Box<dyn UnitOfWork>, result: ServiceResult<T>) -> ServiceResult<T> {
    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}

fn ensure_writer(post: &Post, user_id: UserId) -> ServiceResult<()> {
    if post.is_written_by(user_id) {
        return Ok(());
    }
    warn!(post_id = %post.id, user_id = %user_id, "Rejected change by non-writer");
    Err(DomainError::NotPostWriter(post.id).into())
}

// ============================================================================
// Lookups
// ============================================================================

async fn require_user(uow: &mut dyn UnitOfWork, id: UserId) -> ServiceResult<User> {
    uow.users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::UserNotFound(id).into())
}

async fn require_category(uow: &mut dyn UnitOfWork, id: CategoryId) -> ServiceResult<Category> {
    uow.categories()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::CategoryNotFound(id).into())
}

async fn require_part(uow: &mut dyn UnitOfWork, id: PartId) -> ServiceResult<Part> {
    uow.parts()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::PartNotFound(id).into())
}

async fn require_post(uow: &mut dyn UnitOfWork, id: PostId) -> ServiceResult<Post> {
    uow.posts()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::PostNotFound(id).into())
}

/// Error for a stored post whose referenced row is missing
///
/// The caller's input was valid, so this surfaces as an internal error.
fn dangling(resource: &str, id: impl std::fmt::Display, post: &Post) -> ServiceError {
    ServiceError::internal(format!("{resource} {id} referenced by post {} is missing", post.id))
}

async fn referenced_user(uow: &mut dyn UnitOfWork, post: &Post) -> ServiceResult<User> {
    uow.users()
        .find_by_id(post.writer_id)
        .await?
        .ok_or_else(|| dangling("User", post.writer_id, post))
}

async fn referenced_category(uow: &mut dyn UnitOfWork, post: &Post) -> ServiceResult<Category> {
    uow.categories()
        .find_by_id(post.category_id)
        .await?
        .ok_or_else(|| dangling("Category", post.category_id, post))
}

async fn referenced_part(uow: &mut dyn UnitOfWork, post: &Post) -> ServiceResult<Part> {
    uow.parts()
        .find_by_id(post.part_id)
        .await?
        .ok_or_else(|| dangling("Part", post.part_id, post))
}

async fn load_details(uow: &mut dyn UnitOfWork, post: Post) -> ServiceResult<PostWithDetails> {
    let category = referenced_category(uow, &post).await?;
    let part = referenced_part(uow, &post).await?;
    let writer = referenced_user(uow, &post).await?;

    Ok(PostWithDetails {
        post,
        category,
        part,
        writer,
    })
}

// ============================================================================
// Listing projections
// ============================================================================

/// Rows of a category listing, built from one page of stored posts
///
/// Each implementation loads the rows it references with a single batched
/// lookup per page.
trait ListingRow: Sized {
    async fn project_page(
        uow: &mut dyn UnitOfWork,
        posts: Vec<Post>,
    ) -> ServiceResult<Vec<Self>>;
}

impl ListingRow for PostCommonSummaryResponse {
    async fn project_page(
        uow: &mut dyn UnitOfWork,
        posts: Vec<Post>,
    ) -> ServiceResult<Vec<Self>> {
        let ids = distinct(posts.iter().map(|post| post.writer_id));
        let writers: HashMap<UserId, User> = uow
            .users()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        posts
            .into_iter()
            .map(|post| -> ServiceResult<Self> {
                let writer = writers
                    .get(&post.writer_id)
                    .cloned()
                    .ok_or_else(|| dangling("User", post.writer_id, &post))?;
                Ok(Self::from(PostWithWriter { post, writer }))
            })
            .collect()
    }
}

impl ListingRow for PostEducationSummaryResponse {
    async fn project_page(
        uow: &mut dyn UnitOfWork,
        posts: Vec<Post>,
    ) -> ServiceResult<Vec<Self>> {
        let ids = distinct(posts.iter().map(|post| post.part_id));
        let parts: HashMap<PartId, Part> = uow
            .parts()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|part| (part.id, part))
            .collect();

        posts
            .into_iter()
            .map(|post| -> ServiceResult<Self> {
                let part = parts
                    .get(&post.part_id)
                    .cloned()
                    .ok_or_else(|| dangling("Part", post.part_id, &post))?;
                Ok(Self::from(PostWithPart { post, part }))
            })
            .collect()
    }
}

fn distinct<T: Ord>(ids: impl Iterator<Item = T>) -> Vec<T> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}
