//! Reading ports — per-domain sensor queries over the relational store.
//!
//! Two operation shapes are normalized across all five sensor domains:
//!
//! - **Latest value**: the single most recent record, or `None`. An empty
//!   table and a failed statement collapse into the same `None` — callers
//!   cannot tell them apart through this interface. That gap is part of the
//!   inherited contract and is kept, with failures logged by implementations.
//! - **Time-range search**: all records inside an inclusive
//!   `[first, last]` bound, newest first. Zero matches is `Ok` with an empty
//!   sequence; only execution failure is an `Err` — so searches *do* let
//!   callers distinguish the two.
//!
//! Bounds are opaque date-time strings (`yyyy-MM-dd HH:mm:ss` by caller
//! convention) forwarded verbatim as bind parameters.
//!
//! Every latest-value operation accepts a `home_id`. The current statements
//! do not apply it — each call answers with the globally newest row. Kept
//! for signature stability with the dashboard until the schema grows a
//! per-home filter.

use std::future::Future;

use homewatch_domain::door::DoorState;
use homewatch_domain::environment::{EnvReading, EnvSample};
use homewatch_domain::error::HomewatchError;
use homewatch_domain::fire::{FireAlert, FireSample, GasSample};
use homewatch_domain::pet::PetSample;
use homewatch_domain::plant::SoilSample;

/// Indoor climate queries over `home_env`.
pub trait EnvironmentReadings {
    /// Most recent temperature/humidity pair, or `None`.
    fn latest(&self, home_id: &str) -> impl Future<Output = Option<EnvReading>> + Send;

    /// All climate rows inside `[first, last]`, newest first.
    fn search(
        &self,
        first: &str,
        last: &str,
    ) -> impl Future<Output = Result<Vec<EnvSample>, HomewatchError>> + Send;
}

/// Fire and gas queries over the shared `fire_events` table.
pub trait FireReadings {
    /// Most recent flame/gas alert state, or `None`.
    fn latest(&self, home_id: &str) -> impl Future<Output = Option<FireAlert>> + Send;

    /// Flame projection of events inside `[first, last]`, newest first.
    fn search_fire(
        &self,
        first: &str,
        last: &str,
    ) -> impl Future<Output = Result<Vec<FireSample>, HomewatchError>> + Send;

    /// Gas projection of the same events, newest first.
    fn search_gas(
        &self,
        first: &str,
        last: &str,
    ) -> impl Future<Output = Result<Vec<GasSample>, HomewatchError>> + Send;
}

/// Plant environment queries over `plant_env`.
pub trait PlantReadings {
    /// Most recent soil moisture value, or `None`.
    fn latest_soil_moisture(&self, home_id: &str) -> impl Future<Output = Option<i64>> + Send;

    /// All soil rows inside `[first, last]`, newest first.
    fn search(
        &self,
        first: &str,
        last: &str,
    ) -> impl Future<Output = Result<Vec<SoilSample>, HomewatchError>> + Send;
}

/// Pet station queries over `pet_status`.
pub trait PetReadings {
    /// Most recent toilet state, or `None`.
    fn latest_toilet(&self, home_id: &str) -> impl Future<Output = Option<String>> + Send;

    /// All pet rows inside `[first, last]`, newest first.
    fn search(
        &self,
        first: &str,
        last: &str,
    ) -> impl Future<Output = Result<Vec<PetSample>, HomewatchError>> + Send;
}

/// Front door queries over `door_status`. Latest only — the dashboard has
/// no door history view.
pub trait DoorReadings {
    /// Most recent door state, or `None`.
    fn latest(&self, home_id: &str) -> impl Future<Output = Option<DoorState>> + Send;
}
