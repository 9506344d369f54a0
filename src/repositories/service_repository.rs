use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{ServiceEntry, ServiceError, ServiceForm};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ServiceEntry>, ServiceError>;
    async fn create(&self, form: &ServiceForm) -> Result<i32, ServiceError>;
    async fn update(&self, id: i32, form: &ServiceForm) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlServiceRepository {
    pool: MySqlPool,
}

impl MySqlServiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for MySqlServiceRepository {
    async fn list(&self) -> Result<Vec<ServiceEntry>, ServiceError> {
        let rows = sqlx::query_as::<_, ServiceEntry>("SELECT * FROM services")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, form: &ServiceForm) -> Result<i32, ServiceError> {
        let result = sqlx::query("INSERT INTO services (title, description) VALUES (?, ?)")
            .bind(&form.title)
            .bind(&form.description)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, id: i32, form: &ServiceForm) -> Result<u64, ServiceError> {
        let result = sqlx::query("UPDATE services SET title = ?, description = ? WHERE id = ?")
            .bind(&form.title)
            .bind(&form.description)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
