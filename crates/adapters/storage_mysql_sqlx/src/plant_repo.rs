//! SQL implementation of [`PlantReadings`].

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use homewatch_app::ports::readings::PlantReadings;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::plant::SoilSample;

use crate::error::StorageError;

struct Wrapper(SoilSample);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(SoilSample {
            moisture: row.try_get("soil_moisture")?,
            measured_at: row.try_get("measured_at")?,
        }))
    }
}

const SELECT_LATEST: &str = r"
    SELECT soil_moisture FROM plant_env
    ORDER BY measured_at DESC
    LIMIT 1
";

const SELECT_IN_RANGE: &str = r"
    SELECT soil_moisture, CAST(measured_at AS CHAR) AS measured_at
    FROM plant_env
    WHERE measured_at >= ? AND measured_at <= ?
    ORDER BY measured_at DESC
";

/// MySQL-backed plant environment queries.
pub struct MysqlPlantReadings {
    pool: AnyPool,
}

impl MysqlPlantReadings {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

impl PlantReadings for MysqlPlantReadings {
    // `home_id` is accepted but not applied; the newest row wins globally.
    async fn latest_soil_moisture(&self, _home_id: &str) -> Option<i64> {
        let row: Option<(i64,)> = match sqlx::query_as(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "latest soil moisture query failed");
                return None;
            }
        };

        row.map(|(moisture,)| moisture)
    }

    async fn search(&self, first: &str, last: &str) -> Result<Vec<SoilSample>, HomewatchError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_IN_RANGE)
            .bind(first)
            .bind(last)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
