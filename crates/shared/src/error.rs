use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ArticleField, ArticleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Conflict,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate article id {0}")]
    DuplicateId(ArticleId),
    #[error("article {0} not found")]
    NotFound(ArticleId),
    #[error("article {id}: field '{field}' must not be empty")]
    Validation { id: ArticleId, field: ArticleField },
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::DuplicateId(_) => ErrorCode::Conflict,
            StoreError::NotFound(_) => ErrorCode::NotFound,
            StoreError::Validation { .. } => ErrorCode::Validation,
        }
    }
}
