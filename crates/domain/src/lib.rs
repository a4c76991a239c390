//! # homewatch-domain
//!
//! Pure domain model for the homewatch monitoring backend.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamp-string helpers
//! - Define the five **sensor record** families (environment, fire/gas,
//!   plant, pet, door) in their latest-value and search-row shapes
//! - Define the **device link** state machine and its event vocabulary
//! - Define the **window command** wire vocabulary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod link;

pub mod door;
pub mod environment;
pub mod fire;
pub mod pet;
pub mod plant;
