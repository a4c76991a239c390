//! # homewatch-adapter-storage-mysql-sqlx
//!
//! MySQL read adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the reading port traits defined in `homewatch-app::ports`
//! - Manage the single shared connection's lifecycle ([`Store`])
//! - Map database rows into domain records
//!
//! The pool is driver-agnostic (`sqlx::Any`): deployments point it at
//! MySQL, tests at an in-memory `SQLite` database — the SQL text is the
//! same. The schema is owned by the ingestion side; this crate only reads.
//!
//! ## Dependency rule
//! Depends on `homewatch-app` (for port traits) and `homewatch-domain`
//! (for record types). The `app` and `domain` crates must never reference
//! this adapter.

mod door_repo;
mod environment_repo;
pub mod error;
mod fire_repo;
mod pet_repo;
mod plant_repo;
pub mod pool;

pub use door_repo::MysqlDoorReadings;
pub use environment_repo::MysqlEnvironmentReadings;
pub use error::StorageError;
pub use fire_repo::MysqlFireReadings;
pub use pet_repo::MysqlPetReadings;
pub use plant_repo::MysqlPlantReadings;
pub use pool::{Store, StoreConfig};
