//! SQL implementation of [`EnvironmentReadings`].

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use homewatch_app::ports::readings::EnvironmentReadings;
use homewatch_domain::environment::{EnvReading, EnvSample};
use homewatch_domain::error::HomewatchError;

use crate::error::StorageError;

struct Latest(EnvReading);

impl<'r> FromRow<'r, AnyRow> for Latest {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(EnvReading {
            temperature: row.try_get("temperature")?,
            humidity: row.try_get("humidity")?,
        }))
    }
}

struct Wrapper(EnvSample);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(EnvSample {
            temperature: row.try_get("temperature")?,
            humidity: row.try_get("humidity")?,
            illumination: row.try_get("illumination")?,
            measured_at: row.try_get("measured_at")?,
        }))
    }
}

const SELECT_LATEST: &str = r"
    SELECT temperature, humidity FROM home_env
    ORDER BY measured_at DESC
    LIMIT 1
";

const SELECT_IN_RANGE: &str = r"
    SELECT temperature, humidity, illumination, CAST(measured_at AS CHAR) AS measured_at
    FROM home_env
    WHERE measured_at >= ? AND measured_at <= ?
    ORDER BY measured_at DESC
";

/// MySQL-backed indoor climate queries.
pub struct MysqlEnvironmentReadings {
    pool: AnyPool,
}

impl MysqlEnvironmentReadings {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

impl EnvironmentReadings for MysqlEnvironmentReadings {
    // `home_id` is accepted for signature stability but not applied: the
    // statement answers with the globally newest row.
    async fn latest(&self, _home_id: &str) -> Option<EnvReading> {
        let row: Option<Latest> = match sqlx::query_as(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "latest environment query failed");
                return None;
            }
        };

        row.map(|w| w.0)
    }

    async fn search(&self, first: &str, last: &str) -> Result<Vec<EnvSample>, HomewatchError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_IN_RANGE)
            .bind(first)
            .bind(last)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
