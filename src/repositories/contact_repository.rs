use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{
    ContactInfo, ContactInfoForm, ContactSubmission, ContactSubmissionForm, ServiceError,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_info(&self) -> Result<Option<ContactInfo>, ServiceError>;
    async fn upsert_info(&self, form: &ContactInfoForm) -> Result<(), ServiceError>;
    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, ServiceError>;
    async fn create_submission(&self, form: &ContactSubmissionForm) -> Result<i32, ServiceError>;
    async fn delete_submission(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn find_info(&self) -> Result<Option<ContactInfo>, ServiceError> {
        let info = sqlx::query_as::<_, ContactInfo>("SELECT * FROM contact_info WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(info)
    }

    async fn upsert_info(&self, form: &ContactInfoForm) -> Result<(), ServiceError> {
        sqlx::query(
            r#"
            INSERT INTO contact_info (id, address, phone, email, mapUrl)
            VALUES (1, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                address = VALUES(address), phone = VALUES(phone),
                email = VALUES(email), mapUrl = VALUES(mapUrl)
            "#,
        )
        .bind(&form.address)
        .bind(&form.phone)
        .bind(&form.email)
        .bind(&form.map_url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, ServiceError> {
        let rows = sqlx::query_as::<_, ContactSubmission>(
            "SELECT * FROM contact_submissions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_submission(&self, form: &ContactSubmissionForm) -> Result<i32, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO contact_submissions (name, email, subject, message) VALUES (?, ?, ?, ?)",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.subject)
        .bind(&form.message)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn delete_submission(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
