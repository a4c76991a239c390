//! Fire and gas event records.
//!
//! Fire and gas observations share one underlying event table; the two
//! search shapes are different column projections of the same rows.

/// Most recent fire/gas alert state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireAlert {
    /// Flame detection state as reported by the sensor.
    pub fire_status: String,
    /// Gas level state as reported by the sensor.
    pub level_status: String,
}

/// One row of a fire time-range search (flame projection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireSample {
    pub status: String,
    pub level: String,
    pub detected_at: String,
}

/// One row of a gas time-range search (gas projection of the same table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasSample {
    pub status: String,
    pub level: String,
    pub detected_at: String,
}
