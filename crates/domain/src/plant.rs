//! Plant environment records — soil moisture.

/// One row of a plant time-range search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilSample {
    pub moisture: i64,
    pub measured_at: String,
}
