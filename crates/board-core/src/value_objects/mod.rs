//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;

pub use ids::{CategoryId, IdParseError, PartId, PostId, UserId};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
