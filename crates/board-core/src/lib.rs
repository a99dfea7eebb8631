//! # board-core
//!
//! Domain layer containing entities, value objects, and repository ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Category, NewPost, Part, Post, User};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, PartRepository, PostRepository, RepoResult, UnitOfWork,
    UnitOfWorkFactory, UserRepository,
};
pub use value_objects::{
    CategoryId, IdParseError, Page, PageRequest, PartId, PostId, UserId, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
