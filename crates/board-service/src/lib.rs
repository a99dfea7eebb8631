//! # board-service
//!
//! Application layer containing the post use cases, the service context,
//! and request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
