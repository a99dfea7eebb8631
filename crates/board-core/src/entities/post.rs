//! Post entity - a user-authored board entry

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryId, PartId, PostId, UserId};

/// Post entity
///
/// A post always references one existing category, part, and writer.
/// The writer never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Number of participants the post is recruiting or describing
    pub members: i32,
    pub category_id: CategoryId,
    pub part_id: PartId,
    pub writer_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check if the given user wrote this post
    #[inline]
    pub fn is_written_by(&self, user_id: UserId) -> bool {
        self.writer_id == user_id
    }

    /// Replace every mutable field in place
    pub fn modify(
        &mut self,
        title: String,
        content: String,
        members: i32,
        category_id: CategoryId,
        part_id: PartId,
    ) {
        self.title = title;
        self.content = content;
        self.members = members;
        self.category_id = category_id;
        self.part_id = part_id;
        self.updated_at = Utc::now();
    }

    /// Check if the post was changed after creation
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// A post that has not been persisted yet
///
/// The store assigns `id` and `created_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub members: i32,
    pub category_id: CategoryId,
    pub part_id: PartId,
    pub writer_id: UserId,
}

impl NewPost {
    /// Materialize the persisted form once the store picked an id
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            members: self.members,
            category_id: self.category_id,
            part_id: self.part_id,
            writer_id: self.writer_id,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post() -> NewPost {
        NewPost {
            title: "A".to_string(),
            content: "B".to_string(),
            members: 2,
            category_id: CategoryId::new(1),
            part_id: PartId::new(1),
            writer_id: UserId::new(10),
        }
    }

    #[test]
    fn test_into_post() {
        let now = Utc::now();
        let post = new_post().into_post(PostId::new(5), now);
        assert_eq!(post.id, PostId::new(5));
        assert_eq!(post.title, "A");
        assert_eq!(post.created_at, now);
        assert!(!post.is_modified());
    }

    #[test]
    fn test_is_written_by() {
        let post = new_post().into_post(PostId::new(1), Utc::now());
        assert!(post.is_written_by(UserId::new(10)));
        assert!(!post.is_written_by(UserId::new(99)));
    }

    #[test]
    fn test_modify_replaces_fields() {
        let created = Utc::now() - chrono::Duration::seconds(5);
        let mut post = new_post().into_post(PostId::new(1), created);

        post.modify(
            "A2".to_string(),
            "B2".to_string(),
            4,
            CategoryId::new(2),
            PartId::new(3),
        );

        assert_eq!(post.title, "A2");
        assert_eq!(post.content, "B2");
        assert_eq!(post.members, 4);
        assert_eq!(post.category_id, CategoryId::new(2));
        assert_eq!(post.part_id, PartId::new(3));
        assert_eq!(post.writer_id, UserId::new(10));
        assert!(post.is_modified());
    }
}
