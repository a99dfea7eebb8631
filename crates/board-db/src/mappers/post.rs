//! Post entity <-> model mapper

use board_core::entities::{NewPost, Post};
use board_core::value_objects::{CategoryId, PartId, PostId, UserId};
use chrono::{DateTime, Utc};

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            title: model.title,
            content: model.content,
            members: model.members,
            category_id: CategoryId::new(model.category_id),
            part_id: PartId::new(model.part_id),
            writer_id: UserId::new(model.writer_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound when inserting a new post
pub struct PostInsert<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub members: i32,
    pub category_id: i64,
    pub part_id: i64,
    pub writer_id: i64,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            content: &post.content,
            members: post.members,
            category_id: post.category_id.into_inner(),
            part_id: post.part_id.into_inner(),
            writer_id: post.writer_id.into_inner(),
        }
    }
}

/// Values bound when rewriting an existing post
pub struct PostUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub members: i32,
    pub category_id: i64,
    pub part_id: i64,
    pub updated_at: DateTime<Utc>,
}

impl<'a> PostUpdate<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            title: &post.title,
            content: &post.content,
            members: post.members,
            category_id: post.category_id.into_inner(),
            part_id: post.part_id.into_inner(),
            updated_at: post.updated_at,
        }
    }
}
