//! # homewatch-app
//!
//! Application layer — **port definitions** (traits) and in-process
//! infrastructure shared by adapters.
//!
//! ## Responsibilities
//! - Define **reading ports** that the storage adapter implements: per-domain
//!   latest-value and time-range search operations
//! - Define the **device link port** that the TCP adapter implements
//! - Provide the broadcast-backed [`event_bus::LinkEventBus`] that carries
//!   link events to the presentation layer
//!
//! ## Dependency rule
//! Depends on `homewatch-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
