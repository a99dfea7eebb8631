//! PostgreSQL lookups for users, categories, and parts

use async_trait::async_trait;
use tracing::instrument;

use board_core::entities::{Category, Part, User};
use board_core::traits::{CategoryRepository, PartRepository, RepoResult, UserRepository};
use board_core::value_objects::{CategoryId, PartId, UserId};

use crate::models::{CategoryModel, PartModel, UserModel};

use super::error::map_db_error;
use super::unit_of_work::PgUnitOfWork;

#[async_trait]
impl UserRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            "SELECT id, nickname, email, created_at FROM users WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&mut self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_as::<_, UserModel>(
            "SELECT id, nickname, email, created_at FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl CategoryRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result =
            sqlx::query_as::<_, CategoryModel>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }
}

#[async_trait]
impl PartRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: PartId) -> RepoResult<Option<Part>> {
        let result = sqlx::query_as::<_, PartModel>("SELECT id, name FROM parts WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Part::from))
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&mut self, ids: &[PartId]) -> RepoResult<Vec<Part>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let rows =
            sqlx::query_as::<_, PartModel>("SELECT id, name FROM parts WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Part::from).collect())
    }
}
