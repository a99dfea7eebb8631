//! # board-db
//!
//! Storage adapters implementing the repository ports from `board-core`.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool management, migrations, row models,
//!   model → entity mappers, and a transaction-backed unit of work
//! - An in-memory store with the same unit-of-work semantics, used by tests
//!   and local tooling
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_db::{create_pool, run_migrations, PgUnitOfWorkFactory, PoolConfig};
//! use board_core::UnitOfWorkFactory;
//!
//! async fn example(config: &board_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!
//!     let factory = PgUnitOfWorkFactory::new(pool);
//!     let mut uow = factory.begin().await?;
//!     // Use the repositories...
//!     uow.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgUnitOfWork, PgUnitOfWorkFactory};
