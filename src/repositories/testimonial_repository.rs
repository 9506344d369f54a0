use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{ServiceError, Testimonial, TestimonialForm};

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Testimonial>, ServiceError>;
    async fn create(&self, form: &TestimonialForm) -> Result<i32, ServiceError>;
    async fn update(&self, id: i32, form: &TestimonialForm) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlTestimonialRepository {
    pool: MySqlPool,
}

impl MySqlTestimonialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for MySqlTestimonialRepository {
    async fn list(&self) -> Result<Vec<Testimonial>, ServiceError> {
        let rows = sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, form: &TestimonialForm) -> Result<i32, ServiceError> {
        let result = sqlx::query("INSERT INTO testimonials (content, author, role) VALUES (?, ?, ?)")
            .bind(&form.content)
            .bind(&form.author)
            .bind(&form.role)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, id: i32, form: &TestimonialForm) -> Result<u64, ServiceError> {
        let result =
            sqlx::query("UPDATE testimonials SET content = ?, author = ?, role = ? WHERE id = ?")
                .bind(&form.content)
                .bind(&form.author)
                .bind(&form.role)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
