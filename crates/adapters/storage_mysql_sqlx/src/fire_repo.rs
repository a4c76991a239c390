//! SQL implementation of [`FireReadings`].
//!
//! Fire and gas searches read the same `fire_events` table with different
//! column projections.

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use homewatch_app::ports::readings::FireReadings;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::fire::{FireAlert, FireSample, GasSample};

use crate::error::StorageError;

struct Latest(FireAlert);

impl<'r> FromRow<'r, AnyRow> for Latest {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FireAlert {
            fire_status: row.try_get("fire_status")?,
            level_status: row.try_get("level_status")?,
        }))
    }
}

struct FireRow(FireSample);

impl<'r> FromRow<'r, AnyRow> for FireRow {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FireSample {
            status: row.try_get("fire_status")?,
            level: row.try_get("fire_level")?,
            detected_at: row.try_get("detected_at")?,
        }))
    }
}

struct GasRow(GasSample);

impl<'r> FromRow<'r, AnyRow> for GasRow {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(GasSample {
            status: row.try_get("level_status")?,
            level: row.try_get("level")?,
            detected_at: row.try_get("detected_at")?,
        }))
    }
}

const SELECT_LATEST: &str = r"
    SELECT fire_status, level_status FROM fire_events
    ORDER BY detected_at DESC
    LIMIT 1
";

const SELECT_FIRE_IN_RANGE: &str = r"
    SELECT fire_status, fire_level, CAST(detected_at AS CHAR) AS detected_at
    FROM fire_events
    WHERE detected_at >= ? AND detected_at <= ?
    ORDER BY detected_at DESC
";

const SELECT_GAS_IN_RANGE: &str = r"
    SELECT level_status, level, CAST(detected_at AS CHAR) AS detected_at
    FROM fire_events
    WHERE detected_at >= ? AND detected_at <= ?
    ORDER BY detected_at DESC
";

/// MySQL-backed fire/gas queries.
pub struct MysqlFireReadings {
    pool: AnyPool,
}

impl MysqlFireReadings {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

impl FireReadings for MysqlFireReadings {
    // `home_id` is accepted but not applied; the newest event wins globally.
    async fn latest(&self, _home_id: &str) -> Option<FireAlert> {
        let row: Option<Latest> = match sqlx::query_as(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "latest fire query failed");
                return None;
            }
        };

        row.map(|w| w.0)
    }

    async fn search_fire(&self, first: &str, last: &str) -> Result<Vec<FireSample>, HomewatchError> {
        let rows: Vec<FireRow> = sqlx::query_as(SELECT_FIRE_IN_RANGE)
            .bind(first)
            .bind(last)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn search_gas(&self, first: &str, last: &str) -> Result<Vec<GasSample>, HomewatchError> {
        let rows: Vec<GasRow> = sqlx::query_as(SELECT_GAS_IN_RANGE)
            .bind(first)
            .bind(last)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Store;

    async fn setup() -> MysqlFireReadings {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        sqlx::query(
            "CREATE TABLE fire_events (
                fire_status CHAR(16),
                level_status CHAR(16),
                fire_level CHAR(16),
                level CHAR(16),
                detected_at CHAR(19)
            )",
        )
        .execute(store.pool())
        .await
        .unwrap();

        MysqlFireReadings::new(store.pool().clone())
    }

    async fn insert(repo: &MysqlFireReadings, fire: &str, gas: &str, at: &str) {
        sqlx::query(
            "INSERT INTO fire_events (fire_status, level_status, fire_level, level, detected_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(fire)
        .bind(gas)
        .bind("12")
        .bind("340")
        .bind(at)
        .execute(&repo.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_return_newest_alert_state() {
        let repo = setup().await;
        insert(&repo, "normal", "normal", "2025-03-14 08:00:00").await;
        insert(&repo, "detected", "warning", "2025-03-14 09:00:00").await;

        let alert = repo.latest("home-1").await.unwrap();

        assert_eq!(alert.fire_status, "detected");
        assert_eq!(alert.level_status, "warning");
    }

    #[tokio::test]
    async fn should_return_none_when_no_events() {
        let repo = setup().await;
        assert!(repo.latest("home-1").await.is_none());
    }

    #[tokio::test]
    async fn should_project_fire_and_gas_from_same_rows() {
        let repo = setup().await;
        insert(&repo, "detected", "warning", "2025-03-14 09:00:00").await;

        let fire = repo
            .search_fire("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await
            .unwrap();
        let gas = repo
            .search_gas("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await
            .unwrap();

        assert_eq!(fire.len(), 1);
        assert_eq!(fire[0].status, "detected");
        assert_eq!(fire[0].level, "12");

        assert_eq!(gas.len(), 1);
        assert_eq!(gas[0].status, "warning");
        assert_eq!(gas[0].level, "340");

        assert_eq!(fire[0].detected_at, gas[0].detected_at);
    }

    #[tokio::test]
    async fn should_order_search_newest_first() {
        let repo = setup().await;
        insert(&repo, "normal", "normal", "2025-03-14 08:00:00").await;
        insert(&repo, "detected", "warning", "2025-03-14 09:00:00").await;

        let rows = repo
            .search_fire("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await
            .unwrap();

        assert_eq!(rows[0].detected_at, "2025-03-14 09:00:00");
        assert_eq!(rows[1].detected_at, "2025-03-14 08:00:00");
    }

    #[tokio::test]
    async fn should_error_when_search_statement_fails() {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        let repo = MysqlFireReadings::new(store.pool().clone());

        let result = repo
            .search_gas("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await;

        assert!(matches!(result, Err(HomewatchError::Storage(_))));
    }
}
