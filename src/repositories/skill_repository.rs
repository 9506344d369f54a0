use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{ServiceError, Skill};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, ServiceError>;
    async fn create(
        &self,
        name: &str,
        proficiency: i32,
        skill_type: &str,
    ) -> Result<i32, ServiceError>;
    async fn update(
        &self,
        id: i32,
        name: &str,
        proficiency: i32,
        skill_type: &str,
    ) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlSkillRepository {
    pool: MySqlPool,
}

impl MySqlSkillRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for MySqlSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, ServiceError> {
        let rows = sqlx::query_as::<_, Skill>("SELECT * FROM skills")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(
        &self,
        name: &str,
        proficiency: i32,
        skill_type: &str,
    ) -> Result<i32, ServiceError> {
        let result = sqlx::query("INSERT INTO skills (name, proficiency, type) VALUES (?, ?, ?)")
            .bind(name)
            .bind(proficiency)
            .bind(skill_type)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        proficiency: i32,
        skill_type: &str,
    ) -> Result<u64, ServiceError> {
        let result =
            sqlx::query("UPDATE skills SET name = ?, proficiency = ?, type = ? WHERE id = ?")
                .bind(name)
                .bind(proficiency)
                .bind(skill_type)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
