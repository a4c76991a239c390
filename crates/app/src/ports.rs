//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the consuming layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod device_link;
pub mod readings;

pub use device_link::DeviceLink;
pub use readings::{
    DoorReadings, EnvironmentReadings, FireReadings, PetReadings, PlantReadings,
};
