//! Repository ports

mod repositories;
mod unit_of_work;

pub use repositories::{
    CategoryRepository, PartRepository, PostRepository, RepoResult, UserRepository,
};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
