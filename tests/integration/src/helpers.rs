//! Test helpers for integration tests
//!
//! Provides seeded boards over either store and assertions on service errors.

use anyhow::Result;
use board_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use board_core::value_objects::{CategoryId, PartId, UserId};
use board_db::{create_pool, run_migrations, InMemoryStore, PgPool, PoolConfig};
use board_service::{PostService, ServiceContext, ServiceError, ServiceResult};

use crate::fixtures::{in_memory_references, unique_suffix, BoardIds};

/// A service context with seeded users, categories, and parts
pub struct TestBoard {
    pub ctx: ServiceContext,
    pub ids: BoardIds,
    store: Option<InMemoryStore>,
}

impl TestBoard {
    /// Board over a fresh in-memory store
    pub fn in_memory() -> Self {
        init_test_tracing();

        let store = InMemoryStore::new();
        let (users, categories, parts, ids) = in_memory_references();
        users.into_iter().for_each(|u| store.add_user(u));
        categories.into_iter().for_each(|c| store.add_category(c));
        parts.into_iter().for_each(|p| store.add_part(p));

        Self {
            ctx: ServiceContext::in_memory(store.clone()),
            ids,
            store: Some(store),
        }
    }

    /// Board over PostgreSQL, or `None` when `DATABASE_URL` is not set
    pub async fn postgres() -> Result<Option<Self>> {
        if !check_test_env() {
            return Ok(None);
        }
        init_test_tracing();

        let config = test_config()?;
        let pool = create_pool(&PoolConfig::from(&config.database)).await?;
        run_migrations(&pool).await?;
        let ids = seed_postgres(&pool).await?;

        Ok(Some(Self {
            ctx: ServiceContext::postgres(pool, config.pagination),
            ids,
            store: None,
        }))
    }

    pub fn service(&self) -> PostService<'_> {
        PostService::new(&self.ctx)
    }

    /// Backing in-memory store, if this board has one
    pub fn store(&self) -> Option<&InMemoryStore> {
        self.store.as_ref()
    }
}

/// Insert a fresh set of reference rows; unique names keep runs independent
async fn seed_postgres(pool: &PgPool) -> Result<BoardIds> {
    let suffix = unique_suffix();
    let run = std::process::id();

    let mut user_ids = Vec::with_capacity(2);
    for name in ["writer", "stranger"] {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (nickname, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(format!("{name}_{run}_{suffix}"))
        .bind(format!("{name}_{run}_{suffix}@example.com"))
        .fetch_one(pool)
        .await?;
        user_ids.push(UserId::new(id));
    }

    let mut category_ids = Vec::with_capacity(2);
    for name in ["free", "education"] {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
                .bind(format!("{name}_{run}_{suffix}"))
                .fetch_one(pool)
                .await?;
        category_ids.push(CategoryId::new(id));
    }

    let mut part_ids = Vec::with_capacity(2);
    for name in ["backend", "frontend"] {
        let id: i64 = sqlx::query_scalar("INSERT INTO parts (name) VALUES ($1) RETURNING id")
            .bind(format!("{name}_{run}_{suffix}"))
            .fetch_one(pool)
            .await?;
        part_ids.push(PartId::new(id));
    }

    Ok(BoardIds {
        writer: user_ids[0],
        stranger: user_ids[1],
        free_category: category_ids[0],
        education_category: category_ids[1],
        backend: part_ids[0],
        frontend: part_ids[1],
    })
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if the PostgreSQL test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Install a development subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(&TracingConfig::development());
}

/// Assert the call failed with the given status code and return the error
pub fn expect_status<T: std::fmt::Debug>(
    result: ServiceResult<T>,
    expected_status: u16,
) -> Result<ServiceError> {
    match result {
        Ok(value) => anyhow::bail!("Expected status {expected_status}, got success: {value:?}"),
        Err(err) if err.status_code() == expected_status => Ok(err),
        Err(err) => anyhow::bail!(
            "Expected status {expected_status}, got {}: {err}",
            err.status_code()
        ),
    }
}
