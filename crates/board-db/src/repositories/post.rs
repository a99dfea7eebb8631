//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use board_core::entities::{NewPost, Post};
use board_core::traits::{PostRepository, RepoResult};
use board_core::value_objects::{CategoryId, Page, PageRequest, PostId};

use crate::mappers::{PostInsert, PostUpdate};
use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};
use super::unit_of_work::PgUnitOfWork;

#[async_trait]
impl PostRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, content, members, category_id, part_id, writer_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self, post), fields(category_id = %post.category_id, writer_id = %post.writer_id))]
    async fn insert(&mut self, post: &NewPost) -> RepoResult<Post> {
        let values = PostInsert::new(post);
        let now = Utc::now();

        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (title, content, members, category_id, part_id, writer_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, title, content, members, category_id, part_id, writer_id, created_at, updated_at
            ",
        )
        .bind(values.title)
        .bind(values.content)
        .bind(values.members)
        .bind(values.category_id)
        .bind(values.part_id)
        .bind(values.writer_id)
        .bind(now)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&mut self, post: &Post) -> RepoResult<Post> {
        let values = PostUpdate::new(post);

        let model = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET title = $2, content = $3, members = $4, category_id = $5, part_id = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, title, content, members, category_id, part_id, writer_id, created_at, updated_at
            ",
        )
        .bind(values.id)
        .bind(values.title)
        .bind(values.content)
        .bind(values.members)
        .bind(values.category_id)
        .bind(values.part_id)
        .bind(values.updated_at)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        model
            .map(Post::from)
            .ok_or_else(|| post_not_found(post.id))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn delete(&mut self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post.id.into_inner())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_category(
        &mut self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<Page<Post>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE category_id = $1")
            .bind(category_id.into_inner())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, content, members, category_id, part_id, writer_id, created_at, updated_at
            FROM posts
            WHERE category_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(category_id.into_inner())
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Post::from).collect(),
            page,
            total.max(0) as u64,
        ))
    }
}
