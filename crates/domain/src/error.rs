//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors (`LinkError` in the device
//! adapter, `StorageError` in the storage adapter) and wraps them into
//! [`HomewatchError`] when crossing a port boundary.

/// Workspace-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum HomewatchError {
    /// A statement failed to prepare or execute against the sensor store.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device link failed at the transport level.
    #[error("device link error")]
    Link(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An operation that requires a connected device link was called
    /// while the link was down.
    #[error("not connected to device controller")]
    NotConnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_connected_error() {
        let err = HomewatchError::NotConnected;
        assert_eq!(err.to_string(), "not connected to device controller");
    }

    #[test]
    fn should_expose_storage_source() {
        let inner = std::io::Error::other("boom");
        let err = HomewatchError::Storage(Box::new(inner));
        assert_eq!(err.to_string(), "storage error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
