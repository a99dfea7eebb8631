//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod reference;

pub use post::PostModel;
pub use reference::{CategoryModel, PartModel, UserModel};
