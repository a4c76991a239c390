//! SQL implementation of [`PetReadings`].

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use homewatch_app::ports::readings::PetReadings;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::pet::PetSample;

use crate::error::StorageError;

struct Wrapper(PetSample);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(PetSample {
            food: row.try_get("food")?,
            water: row.try_get("water")?,
            toilet: row.try_get("toilet")?,
            measured_at: row.try_get("measured_at")?,
        }))
    }
}

const SELECT_LATEST_TOILET: &str = r"
    SELECT toilet FROM pet_status
    ORDER BY measured_at DESC
    LIMIT 1
";

const SELECT_IN_RANGE: &str = r"
    SELECT food, water, toilet, CAST(measured_at AS CHAR) AS measured_at
    FROM pet_status
    WHERE measured_at >= ? AND measured_at <= ?
    ORDER BY measured_at DESC
";

/// MySQL-backed pet station queries.
pub struct MysqlPetReadings {
    pool: AnyPool,
}

impl MysqlPetReadings {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

impl PetReadings for MysqlPetReadings {
    // `home_id` is accepted but not applied; the newest row wins globally.
    async fn latest_toilet(&self, _home_id: &str) -> Option<String> {
        let row: Option<(String,)> = match sqlx::query_as(SELECT_LATEST_TOILET)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "latest pet toilet query failed");
                return None;
            }
        };

        row.map(|(toilet,)| toilet)
    }

    async fn search(&self, first: &str, last: &str) -> Result<Vec<PetSample>, HomewatchError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_IN_RANGE)
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

    async fn setup() -> MysqlPetReadings {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        sqlx::query(
            "CREATE TABLE pet_status (
                food CHAR(16),
                water CHAR(16),
                toilet CHAR(16),
                measured_at CHAR(19)
            )",
        )
        .execute(store.pool())
        .await
        .unwrap();

        MysqlPetReadings::new(store.pool().clone())
    }

    async fn insert(repo: &MysqlPetReadings, food: &str, water: &str, toilet: &str, at: &str) {
        sqlx::query(
            "INSERT INTO pet_status (food, water, toilet, measured_at) VALUES (?, ?, ?, ?)",
        )
        .bind(food)
        .bind(water)
        .bind(toilet)
        .bind(at)
        .execute(&repo.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_return_newest_toilet_state() {
        let repo = setup().await;
        insert(&repo, "full", "full", "clean", "2025-03-14 08:00:00").await;
        insert(&repo, "low", "full", "dirty", "2025-03-14 09:00:00").await;

        assert_eq!(repo.latest_toilet("home-1").await.as_deref(), Some("dirty"));
    }

    #[tokio::test]
    async fn should_return_none_when_table_empty() {
        let repo = setup().await;
        assert!(repo.latest_toilet("home-1").await.is_none());
    }

    #[tokio::test]
    async fn should_search_full_rows_newest_first() {
        let repo = setup().await;
        insert(&repo, "full", "full", "clean", "2025-03-14 08:00:00").await;
        insert(&repo, "low", "half", "dirty", "2025-03-14 09:00:00").await;

        let rows = repo
            .search("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].food, "low");
        assert_eq!(rows[0].water, "half");
        assert_eq!(rows[0].toilet, "dirty");
        assert_eq!(rows[1].measured_at, "2025-03-14 08:00:00");
    }

    #[tokio::test]
    async fn should_error_when_search_statement_fails() {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        let repo = MysqlPetReadings::new(store.pool().clone());

        let result = repo
            .search("2025-03-14 00:00:00", "2025-03-14 23:59:59")
            .await;

        assert!(matches!(result, Err(HomewatchError::Storage(_))));
    }
}
