//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `PostInsert`/`PostUpdate`: Prepare entity data for database writes

mod post;
mod reference;

pub use post::{PostInsert, PostUpdate};
