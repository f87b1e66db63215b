//! Validation errors raised at entity boundaries.

use thiserror::Error;

use crate::entities::MagazineId;

/// Every way an entity can be rejected at construction or reassignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,

    #[error("magazine name must be between 2 and 16 characters (got {len})")]
    MagazineNameLength { len: usize },

    #[error("category must be a non-empty string")]
    EmptyCategory,

    #[error("title must be between 5 and 50 characters (got {len})")]
    TitleLength { len: usize },

    /// The magazine id does not resolve to a magazine registered in the press.
    #[error("magazine {0} is not registered in this press")]
    UnknownMagazine(MagazineId),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
