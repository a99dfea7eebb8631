//! Service context - dependency container for services
//!
//! Holds the unit-of-work factory and the paging defaults every service reads.

use std::sync::Arc;

use board_common::PaginationConfig;
use board_core::traits::{UnitOfWork, UnitOfWorkFactory};
use board_db::{InMemoryStore, PgPool, PgUnitOfWorkFactory};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; the factory is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
    pagination: PaginationConfig,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(uow_factory: Arc<dyn UnitOfWorkFactory>, pagination: PaginationConfig) -> Self {
        Self {
            uow_factory,
            pagination,
        }
    }

    /// Context backed by PostgreSQL transactions
    pub fn postgres(pool: PgPool, pagination: PaginationConfig) -> Self {
        Self::new(Arc::new(PgUnitOfWorkFactory::new(pool)), pagination)
    }

    /// Context backed by an in-memory store with default paging
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self::new(Arc::new(store), PaginationConfig::default())
    }

    /// Open a unit of work for one service call
    pub async fn begin(&self) -> ServiceResult<Box<dyn UnitOfWork>> {
        Ok(self.uow_factory.begin().await?)
    }

    /// Paging defaults and limits
    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("uow_factory", &"dyn UnitOfWorkFactory")
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    uow_factory: Option<Arc<dyn UnitOfWorkFactory>>,
    pagination: Option<PaginationConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uow_factory(mut self, factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        self.uow_factory = Some(factory);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the unit-of-work factory is missing
    /// or the paging limits are inconsistent
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let uow_factory = self
            .uow_factory
            .ok_or_else(|| ServiceError::validation("uow_factory is required"))?;
        let pagination = self.pagination.unwrap_or_default();

        if pagination.max_size == 0 || pagination.default_size == 0 {
            return Err(ServiceError::validation("page sizes must be positive"));
        }
        if pagination.default_size > pagination.max_size {
            return Err(ServiceError::validation(
                "default page size exceeds the maximum",
            ));
        }

        Ok(ServiceContext::new(uow_factory, pagination))
    }
}
