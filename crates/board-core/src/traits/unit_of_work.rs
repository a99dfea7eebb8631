//! Unit of work - one atomic scope over every repository
//!
//! A service call begins a unit of work, performs all of its reads and writes
//! through the accessors, then either commits or rolls back. Dropping a unit
//! of work without committing discards its writes.

use async_trait::async_trait;

use super::repositories::{
    CategoryRepository, PartRepository, PostRepository, RepoResult, UserRepository,
};

#[async_trait]
pub trait UnitOfWork: Send {
    fn users(&mut self) -> &mut dyn UserRepository;

    fn categories(&mut self) -> &mut dyn CategoryRepository;

    fn parts(&mut self) -> &mut dyn PartRepository;

    fn posts(&mut self) -> &mut dyn PostRepository;

    /// Make every write of this unit visible
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard every write of this unit
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}

/// Opens units of work against a store
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;
}
