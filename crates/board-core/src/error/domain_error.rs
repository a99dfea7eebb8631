//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, PartId, PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Part not found: {0}")]
    PartNotFound(PartId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the writer may change post {0}")]
    NotPostWriter(PostId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::PartNotFound(_) => "UNKNOWN_PART",
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Authorization
            Self::NotPostWriter(_) => "NOT_POST_WRITER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::PartNotFound(_)
                | Self::PostNotFound(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostWriter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(UserId::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::NotPostWriter(PostId::new(1));
        assert_eq!(err.code(), "NOT_POST_WRITER");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::CategoryNotFound(CategoryId::new(1)).is_not_found());
        assert!(DomainError::PartNotFound(PartId::new(1)).is_not_found());
        assert!(DomainError::PostNotFound(PostId::new(1)).is_not_found());
        assert!(!DomainError::NotPostWriter(PostId::new(1)).is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotPostWriter(PostId::new(1)).is_authorization());
        assert!(!DomainError::PostNotFound(PostId::new(1)).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PostNotFound(PostId::new(123));
        assert_eq!(err.to_string(), "Post not found: 123");

        let err = DomainError::NotPostWriter(PostId::new(7));
        assert_eq!(err.to_string(), "Only the writer may change post 7");
    }
}
