//! Business logic services
//!
//! Services validate input, open a unit of work, and orchestrate the
//! repository calls for one use case.

pub mod context;
pub mod error;
pub mod post;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
