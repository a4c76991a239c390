//! Storage-specific error type wrapping sqlx errors.

use homewatch_domain::error::HomewatchError;

/// Errors originating from the sensor store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for HomewatchError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_to_domain_storage_error() {
        let err: HomewatchError = StorageError::Database(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, HomewatchError::Storage(_)));
    }
}
