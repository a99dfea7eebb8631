//! Data transfer objects for post requests and responses
//!
//! This module provides:
//! - Request DTOs with validation
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{PageQuery, PostCreateRequest};

pub use responses::{
    CategoryResponse, PartResponse, PostCommonListResponse, PostCommonSummaryResponse,
    PostDetailResponse, PostEducationListResponse, PostEducationSummaryResponse, WriterResponse,
};

pub use mappers::{PostWithDetails, PostWithPart, PostWithWriter};
