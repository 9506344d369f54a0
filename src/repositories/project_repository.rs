use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{Project, ProjectForm, ServiceError};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, ServiceError>;
    async fn create(&self, form: &ProjectForm) -> Result<i32, ServiceError>;
    async fn update(&self, id: i32, form: &ProjectForm) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlProjectRepository {
    pool: MySqlPool,
}

impl MySqlProjectRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for MySqlProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ServiceError> {
        let rows = sqlx::query_as::<_, Project>("SELECT * FROM projects")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, ServiceError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(project)
    }

    async fn create(&self, form: &ProjectForm) -> Result<i32, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO projects (title, description, image, github, demo) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&form.title)
        .bind(&form.description)
        .bind(&form.image)
        .bind(&form.github)
        .bind(&form.demo)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, id: i32, form: &ProjectForm) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "UPDATE projects SET title = ?, description = ?, image = ?, github = ?, demo = ? WHERE id = ?",
        )
        .bind(&form.title)
        .bind(&form.description)
        .bind(&form.image)
        .bind(&form.github)
        .bind(&form.demo)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
