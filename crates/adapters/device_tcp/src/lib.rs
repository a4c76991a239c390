//! # homewatch-adapter-device-tcp
//!
//! TCP adapter for the window controller — implements the
//! [`DeviceLink`] port defined in `homewatch-app`.
//!
//! ## How it works
//!
//! The client owns at most one live socket. `connect` spawns a background
//! link task that performs the handshake, then splits the stream: the link
//! task keeps the read half and drains inbound frames, while a writer task
//! consumes a single mpsc queue feeding the write half. All state
//! transitions funnel through one mutex, so callers observe them strictly
//! in arrival order and no call ever blocks on socket IO.
//!
//! Outcomes surface as [`LinkEvent`]s on a broadcast subscription:
//! `Connected`, `Disconnected` (exactly once per session), one
//! `MessageReceived` per inbound frame, and `ErrorOccurred` for transport
//! failures and protocol misuse. The client never retries on its own.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `homewatch-app` and
//! `homewatch-domain`.

mod config;
mod error;
mod frame;

pub use config::DeviceConfig;
pub use error::LinkError;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use homewatch_app::event_bus::LinkEventBus;
use homewatch_app::ports::DeviceLink;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::link::{LinkEvent, LinkState};

/// Depth of the writer queue. Senders briefly back-pressure when the
/// controller stops draining.
const WRITER_QUEUE_DEPTH: usize = 32;

enum WriterOp {
    /// Put these bytes on the wire, as-is, and flush.
    Send(Vec<u8>),
    /// Shut the write half down (sends FIN) and stop.
    Shutdown,
}

struct Inner {
    state: LinkState,
    writer_tx: Option<mpsc::Sender<WriterOp>>,
    link_task: Option<JoinHandle<()>>,
}

struct Shared {
    inner: Mutex<Inner>,
    events: LinkEventBus,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move to `Disconnected` and report it, exactly once per session.
    ///
    /// An aborted handshake also lands here but never reports: only a
    /// session that reached `Connected` owes a `Disconnected` event.
    fn finish_session(&self) {
        let was_connected = {
            let mut inner = self.lock();
            let was_connected = inner.state == LinkState::Connected;
            inner.state = LinkState::Disconnected;
            inner.writer_tx = None;
            was_connected
        };
        if was_connected {
            tracing::info!("disconnected from controller");
            self.events.publish(LinkEvent::Disconnected);
        }
    }
}

/// TCP client for the window controller.
pub struct DeviceClient {
    config: DeviceConfig,
    shared: Arc<Shared>,
}

impl DeviceClient {
    /// Create a disconnected client.
    #[must_use]
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            config,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: LinkState::Disconnected,
                    writer_tx: None,
                    link_task: None,
                }),
                events: LinkEventBus::default(),
            }),
        }
    }

    /// Current link state.
    #[must_use]
    pub fn state(&self) -> LinkState {
        self.shared.lock().state
    }

    /// Bounded graceful close for teardown.
    ///
    /// Attempts a graceful disconnect, waits at most the configured
    /// `close_timeout` for the transport to confirm, then releases the link
    /// regardless of whether the peer acknowledged.
    pub async fn close(&self) {
        let (tx, task) = {
            let mut inner = self.shared.lock();
            let tx = if inner.state == LinkState::Connected {
                inner.writer_tx.clone()
            } else {
                None
            };
            (tx, inner.link_task.take())
        };

        if let Some(tx) = tx {
            let _ = tx.send(WriterOp::Shutdown).await;
        }

        if let Some(mut task) = task {
            if timeout(self.config.close_timeout, &mut task).await.is_err() {
                task.abort();
                tracing::warn!("graceful close timed out, releasing link");
                self.shared.finish_session();
            }
        }
    }
}

impl DeviceLink for DeviceClient {
    async fn connect(&self, host: &str, port: u16) {
        {
            let mut inner = self.shared.lock();
            match inner.state {
                LinkState::Connected => {
                    tracing::warn!("already connected to controller");
                    return;
                }
                LinkState::Connecting => {
                    tracing::warn!("connection attempt already in progress");
                    return;
                }
                LinkState::Disconnected => inner.state = LinkState::Connecting,
            }
        }

        tracing::info!(host, port, "connecting to controller");
        let task = tokio::spawn(run_link(
            Arc::clone(&self.shared),
            host.to_string(),
            port,
            self.config.connect_timeout,
        ));
        self.shared.lock().link_task = Some(task);
    }

    async fn disconnect(&self) {
        let tx = {
            let inner = self.shared.lock();
            if inner.state != LinkState::Connected {
                tracing::warn!("not connected to controller");
                return;
            }
            inner.writer_tx.clone()
        };

        tracing::info!("disconnecting from controller");
        if let Some(tx) = tx {
            let _ = tx.send(WriterOp::Shutdown).await;
        }
    }

    async fn send(&self, message: &str) -> Result<(), HomewatchError> {
        let tx = {
            let inner = self.shared.lock();
            if inner.state == LinkState::Connected {
                inner.writer_tx.clone()
            } else {
                None
            }
        };

        let Some(tx) = tx else {
            return Err(self.refuse_send());
        };

        if tx.send(WriterOp::Send(message.as_bytes().to_vec())).await.is_err() {
            return Err(self.refuse_send());
        }

        tracing::debug!(command = message, "queued command");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state() == LinkState::Connected
    }

    fn subscribe(&self) -> broadcast::Receiver<LinkEvent> {
        self.shared.events.subscribe()
    }
}

impl DeviceClient {
    fn refuse_send(&self) -> HomewatchError {
        let err = LinkError::NotConnected;
        tracing::warn!("{err}, command dropped");
        self.shared
            .events
            .publish(LinkEvent::ErrorOccurred(err.to_string()));
        err.into_domain()
    }
}

/// Background task owning one socket session from handshake to closure.
async fn run_link(shared: Arc<Shared>, host: String, port: u16, connect_timeout: Duration) {
    let stream = match timeout(connect_timeout, TcpStream::connect((host.as_str(), port))).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(err)) => {
            fail_handshake(&shared, &host, port, &err.to_string());
            return;
        }
        Err(_) => {
            let err = LinkError::ConnectTimeout {
                host: host.clone(),
                port,
            };
            fail_handshake(&shared, &host, port, &err.to_string());
            return;
        }
    };

    // Commands must hit the wire immediately.
    if let Err(err) = stream.set_nodelay(true) {
        tracing::debug!(error = %err, "could not disable Nagle's algorithm");
    }

    let (read_half, write_half) = stream.into_split();
    let (writer_tx, writer_rx) = mpsc::channel(WRITER_QUEUE_DEPTH);

    {
        let mut inner = shared.lock();
        inner.state = LinkState::Connected;
        inner.writer_tx = Some(writer_tx);
    }
    tracing::info!(%host, port, "connected to controller");
    shared.events.publish(LinkEvent::Connected);

    let writer = tokio::spawn(run_writer(writer_rx, write_half, shared.events.clone()));

    read_loop(read_half, &shared.events).await;

    shared.finish_session();
    let _ = writer.await;
}

fn fail_handshake(shared: &Shared, host: &str, port: u16, reason: &str) {
    shared.lock().state = LinkState::Disconnected;
    tracing::warn!(host, port, reason, "connection failed");
    shared.events.publish(LinkEvent::ErrorOccurred(format!(
        "failed to connect to {host}:{port}: {reason}"
    )));
}

/// Single-writer queue consumer. The only task that touches the write half.
async fn run_writer(
    mut rx: mpsc::Receiver<WriterOp>,
    mut write_half: OwnedWriteHalf,
    events: LinkEventBus,
) {
    while let Some(op) = rx.recv().await {
        match op {
            WriterOp::Send(bytes) => {
                if let Err(err) = write_flushed(&mut write_half, &bytes).await {
                    tracing::warn!(error = %err, "failed to send command");
                    events.publish(LinkEvent::ErrorOccurred(format!(
                        "failed to send command: {err}"
                    )));
                }
            }
            WriterOp::Shutdown => {
                if let Err(err) = write_half.shutdown().await {
                    tracing::debug!(error = %err, "socket shutdown failed");
                }
                break;
            }
        }
    }
}

async fn write_flushed(write_half: &mut OwnedWriteHalf, bytes: &[u8]) -> std::io::Result<()> {
    write_half.write_all(bytes).await?;
    write_half.flush().await
}

/// Drain inbound frames until the transport closes, locally or by the peer.
async fn read_loop(mut read_half: OwnedReadHalf, events: &LinkEventBus) {
    let mut buf = vec![0u8; 4096];
    loop {
        match read_half.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                for message in frame::drain(&buf[..n]) {
                    tracing::debug!(payload = %message, "message received");
                    events.publish(LinkEvent::MessageReceived(message));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "socket read failed");
                events.publish(LinkEvent::ErrorOccurred(format!("socket error: {err}")));
                break;
            }
        }
    }
}
