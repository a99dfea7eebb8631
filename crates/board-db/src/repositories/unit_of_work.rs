//! Transaction-backed unit of work

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use board_core::traits::{
    CategoryRepository, PartRepository, PostRepository, RepoResult, UnitOfWork,
    UnitOfWorkFactory, UserRepository,
};

use super::error::map_db_error;

/// Opens a `PgUnitOfWork` per call
#[derive(Clone)]
pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        debug!("Transaction started");
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

/// One PostgreSQL transaction serving every repository port
///
/// An uncommitted transaction is rolled back by sqlx when dropped.
pub struct PgUnitOfWork {
    pub(super) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn categories(&mut self) -> &mut dyn CategoryRepository {
        self
    }

    fn parts(&mut self) -> &mut dyn PartRepository {
        self
    }

    fn posts(&mut self) -> &mut dyn PostRepository {
        self
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)?;
        debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        self.tx.rollback().await.map_err(map_db_error)?;
        debug!("Transaction rolled back");
        Ok(())
    }
}
