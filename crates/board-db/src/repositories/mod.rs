//! Repository implementations
//!
//! PostgreSQL implementations of the repository ports defined in board-core.
//! All of them run on the transaction owned by a `PgUnitOfWork`.

mod error;
mod post;
mod reference;
mod unit_of_work;

pub use unit_of_work::{PgUnitOfWork, PgUnitOfWorkFactory};
