use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::ServiceError;

#[async_trait]
pub trait VisitorRepository: Send + Sync {
    async fn get_count(&self) -> Result<Option<i32>, ServiceError>;
    /// Unconditional increment; returns the new count, or None when the
    /// singleton row is missing.
    async fn increment(&self) -> Result<Option<i32>, ServiceError>;
}

pub struct MySqlVisitorRepository {
    pool: MySqlPool,
}

impl MySqlVisitorRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorRepository for MySqlVisitorRepository {
    async fn get_count(&self) -> Result<Option<i32>, ServiceError> {
        let count: Option<i32> =
            sqlx::query_scalar("SELECT count FROM visitor_count WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(count)
    }

    async fn increment(&self) -> Result<Option<i32>, ServiceError> {
        let result = sqlx::query(
            "UPDATE visitor_count SET count = count + 1, updated_at = CURRENT_TIMESTAMP WHERE id = 1",
        )
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_count().await
    }
}
