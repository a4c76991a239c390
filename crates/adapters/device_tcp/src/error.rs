//! Device link error types.

use homewatch_domain::error::HomewatchError;

/// Errors specific to the controller link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// `send` was called while the link was down.
    #[error("not connected to device controller")]
    NotConnected,

    /// The transport handshake did not complete in time.
    #[error("connection to {host}:{port} timed out")]
    ConnectTimeout {
        /// Controller host.
        host: String,
        /// Controller port.
        port: u16,
    },

    /// A socket operation failed.
    #[error("socket error")]
    Io(#[from] std::io::Error),
}

impl LinkError {
    /// Convert into a [`HomewatchError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> HomewatchError {
        match self {
            Self::NotConnected => HomewatchError::NotConnected,
            other => HomewatchError::Link(Box::new(other)),
        }
    }
}

impl From<LinkError> for HomewatchError {
    fn from(err: LinkError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_connected_error() {
        let err = LinkError::NotConnected;
        assert_eq!(err.to_string(), "not connected to device controller");
    }

    #[test]
    fn should_display_connect_timeout_with_endpoint() {
        let err = LinkError::ConnectTimeout {
            host: "10.0.0.7".to_string(),
            port: 8080,
        };
        assert_eq!(err.to_string(), "connection to 10.0.0.7:8080 timed out");
    }

    #[test]
    fn should_convert_not_connected_to_domain_variant() {
        let err: HomewatchError = LinkError::NotConnected.into();
        assert!(matches!(err, HomewatchError::NotConnected));
    }

    #[test]
    fn should_convert_io_error_to_link_variant() {
        let err: HomewatchError = LinkError::Io(std::io::Error::other("reset")).into();
        assert!(matches!(err, HomewatchError::Link(_)));
    }
}
