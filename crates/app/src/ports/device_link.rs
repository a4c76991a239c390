//! Device link port — the asynchronous command channel to the controller.
//!
//! Callers never block on the socket: `connect` starts a handshake in the
//! background and `send` hands the payload to a writer task. Outcomes are
//! observed through [`LinkEvent`]s on a broadcast subscription, in arrival
//! order. Transport failures never escalate past an event.

use std::future::Future;

use tokio::sync::broadcast;

use homewatch_domain::command::WindowCommand;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::link::LinkEvent;

/// A single long-lived command/response channel to the window controller.
pub trait DeviceLink: Send + Sync {
    /// Start connecting to `host:port`.
    ///
    /// A warning no-op when a handshake is already in flight or the link is
    /// up (at most one live socket). Success and failure are reported as
    /// [`LinkEvent::Connected`] / [`LinkEvent::ErrorOccurred`]; there is no
    /// automatic retry.
    fn connect(&self, host: &str, port: u16) -> impl Future<Output = ()> + Send;

    /// Initiate a graceful close. Meaningful only while connected; exactly
    /// one [`LinkEvent::Disconnected`] fires once the transport confirms.
    fn disconnect(&self) -> impl Future<Output = ()> + Send;

    /// Queue `message` for the wire, UTF-8 encoded, **no terminator
    /// appended**, flushed immediately. The protocol is caller-framed.
    ///
    /// # Errors
    ///
    /// [`HomewatchError::NotConnected`] when the link is down; one
    /// [`LinkEvent::ErrorOccurred`] is emitted and nothing is written.
    fn send(&self, message: &str) -> impl Future<Output = Result<(), HomewatchError>> + Send;

    /// Whether the link is currently in the connected state.
    fn is_connected(&self) -> bool;

    /// Subscribe to link events published after this call.
    fn subscribe(&self) -> broadcast::Receiver<LinkEvent>;

    /// Send [`WindowCommand::Open`].
    fn send_window_open(&self) -> impl Future<Output = Result<(), HomewatchError>> + Send {
        async move { self.send(&WindowCommand::Open.to_string()).await }
    }

    /// Send [`WindowCommand::Close`].
    fn send_window_close(&self) -> impl Future<Output = Result<(), HomewatchError>> + Send {
        async move { self.send(&WindowCommand::Close.to_string()).await }
    }

    /// Send [`WindowCommand::Status`].
    fn send_window_status(&self) -> impl Future<Output = Result<(), HomewatchError>> + Send {
        async move { self.send(&WindowCommand::Status.to_string()).await }
    }

    /// Send [`WindowCommand::SetAngle`]. No range validation — any integer
    /// is forwarded.
    fn set_window_angle(
        &self,
        angle: i32,
    ) -> impl Future<Output = Result<(), HomewatchError>> + Send {
        async move { self.send(&WindowCommand::SetAngle(angle).to_string()).await }
    }
}
