//! Device link configuration.

use std::time::Duration;

/// Configuration for the controller link.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Controller host.
    pub host: String,
    /// Controller TCP port.
    pub port: u16,
    /// Bound on the transport handshake.
    pub connect_timeout: Duration,
    /// Bound on the graceful-close wait during teardown.
    pub close_timeout: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            connect_timeout: Duration::from_secs(5),
            close_timeout: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_controller() {
        let config = DeviceConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.close_timeout, Duration::from_secs(3));
    }
}
