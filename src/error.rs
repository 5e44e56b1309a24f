// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type returned by every store operation.

use thiserror::Error;

/// Why a store operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A foreign key, unique, not-null or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// No row matched the id or name.
    #[error("the requested record could not be found")]
    NotFound,

    /// A stored value could not be decoded (e.g. a malformed amount).
    #[error("invalid stored data: {0}")]
    InvalidData(String),

    /// Any other SQLite failure, including I/O and connection problems.
    #[error("database error: {0}")]
    Sql(rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, desc)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let detail = desc.unwrap_or_else(|| err.to_string());
                tracing::warn!("write rejected by constraint: {detail}");
                StoreError::ConstraintViolation(detail)
            }
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                StoreError::Sql(error)
            }
        }
    }
}
