//! SQL implementation of [`DoorReadings`].

use sqlx::AnyPool;

use homewatch_app::ports::readings::DoorReadings;
use homewatch_domain::door::DoorState;

const SELECT_LATEST: &str = r"
    SELECT status FROM door_status
    ORDER BY measured_at DESC
    LIMIT 1
";

/// MySQL-backed front door queries.
pub struct MysqlDoorReadings {
    pool: AnyPool,
}

impl MysqlDoorReadings {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

impl DoorReadings for MysqlDoorReadings {
    // `home_id` is accepted but not applied; the newest row wins globally.
    async fn latest(&self, _home_id: &str) -> Option<DoorState> {
        let row: Option<(String,)> = match sqlx::query_as(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "latest door status query failed");
                return None;
            }
        };

        row.map(|(status,)| DoorState(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Store;

    async fn setup() -> MysqlDoorReadings {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        sqlx::query(
            "CREATE TABLE door_status (
                status CHAR(16),
                measured_at CHAR(19)
            )",
        )
        .execute(store.pool())
        .await
        .unwrap();

        MysqlDoorReadings::new(store.pool().clone())
    }

    async fn insert(repo: &MysqlDoorReadings, status: &str, at: &str) {
        sqlx::query("INSERT INTO door_status (status, measured_at) VALUES (?, ?)")
            .bind(status)
            .bind(at)
            .execute(&repo.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_return_newest_door_state() {
        let repo = setup().await;
        insert(&repo, "open", "2025-03-14 08:00:00").await;
        insert(&repo, "locked", "2025-03-14 09:00:00").await;

        let state = repo.latest("home-1").await.unwrap();
        assert_eq!(state, DoorState("locked".to_string()));
    }

    #[tokio::test]
    async fn should_return_none_when_table_empty() {
        let repo = setup().await;
        assert!(repo.latest("home-1").await.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_statement_fails() {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        let repo = MysqlDoorReadings::new(store.pool().clone());

        assert!(repo.latest("home-1").await.is_none());
    }
}
