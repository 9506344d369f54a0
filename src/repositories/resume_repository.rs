use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{
    Certification, CertificationForm, Education, EducationForm, Experience, ExperienceForm,
    ResumeSummary, ResumeSummaryForm, ServiceError,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Fetches the summary singleton, inserting a blank row on first access
    /// so the admin form always has something to edit.
    async fn get_summary(&self) -> Result<ResumeSummary, ServiceError>;
    async fn update_summary(&self, form: &ResumeSummaryForm) -> Result<(), ServiceError>;

    async fn list_education(&self) -> Result<Vec<Education>, ServiceError>;
    async fn create_education(&self, form: &EducationForm) -> Result<i32, ServiceError>;
    async fn update_education(&self, id: i32, form: &EducationForm) -> Result<u64, ServiceError>;
    async fn delete_education(&self, id: i32) -> Result<u64, ServiceError>;

    async fn list_certifications(&self) -> Result<Vec<Certification>, ServiceError>;
    async fn create_certification(&self, form: &CertificationForm) -> Result<i32, ServiceError>;
    async fn update_certification(
        &self,
        id: i32,
        form: &CertificationForm,
    ) -> Result<u64, ServiceError>;
    async fn delete_certification(&self, id: i32) -> Result<u64, ServiceError>;

    async fn list_experience(&self) -> Result<Vec<Experience>, ServiceError>;
    async fn create_experience(&self, form: &ExperienceForm) -> Result<i32, ServiceError>;
    async fn update_experience(&self, id: i32, form: &ExperienceForm)
        -> Result<u64, ServiceError>;
    async fn delete_experience(&self, id: i32) -> Result<u64, ServiceError>;
}

pub struct MySqlResumeRepository {
    pool: MySqlPool,
}

impl MySqlResumeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for MySqlResumeRepository {
    async fn get_summary(&self) -> Result<ResumeSummary, ServiceError> {
        let summary = sqlx::query_as::<_, ResumeSummary>("SELECT * FROM resume_summary LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        if let Some(summary) = summary {
            return Ok(summary);
        }

        sqlx::query(
            "INSERT INTO resume_summary (name, profession, bio, city, phone, email) VALUES ('', '', '', '', '', '')",
        )
        .execute(&self.pool)
        .await?;

        let summary = sqlx::query_as::<_, ResumeSummary>("SELECT * FROM resume_summary LIMIT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(summary)
    }

    async fn update_summary(&self, form: &ResumeSummaryForm) -> Result<(), ServiceError> {
        let result = sqlx::query(
            "UPDATE resume_summary SET name = ?, profession = ?, bio = ?, city = ?, phone = ?, email = ? WHERE id = 1",
        )
        .bind(&form.name)
        .bind(&form.profession)
        .bind(&form.bio)
        .bind(&form.city)
        .bind(&form.phone)
        .bind(&form.email)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            sqlx::query(
                "INSERT INTO resume_summary (id, name, profession, bio, city, phone, email) VALUES (1, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&form.name)
            .bind(&form.profession)
            .bind(&form.bio)
            .bind(&form.city)
            .bind(&form.phone)
            .bind(&form.email)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    async fn list_education(&self) -> Result<Vec<Education>, ServiceError> {
        let rows =
            sqlx::query_as::<_, Education>("SELECT * FROM education ORDER BY start_year DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn create_education(&self, form: &EducationForm) -> Result<i32, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO education (degree, start_year, end_year, institution, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&form.degree)
        .bind(&form.start_year)
        .bind(&form.end_year)
        .bind(&form.institution)
        .bind(&form.description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update_education(&self, id: i32, form: &EducationForm) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "UPDATE education SET degree = ?, start_year = ?, end_year = ?, institution = ?, description = ? WHERE id = ?",
        )
        .bind(&form.degree)
        .bind(&form.start_year)
        .bind(&form.end_year)
        .bind(&form.institution)
        .bind(&form.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_education(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM education WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, ServiceError> {
        let rows = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications ORDER BY issue_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_certification(&self, form: &CertificationForm) -> Result<i32, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO certifications (title, issuer, issue_date, description) VALUES (?, ?, ?, ?)",
        )
        .bind(&form.title)
        .bind(&form.issuer)
        .bind(&form.issue_date)
        .bind(&form.description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update_certification(
        &self,
        id: i32,
        form: &CertificationForm,
    ) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "UPDATE certifications SET title = ?, issuer = ?, issue_date = ?, description = ? WHERE id = ?",
        )
        .bind(&form.title)
        .bind(&form.issuer)
        .bind(&form.issue_date)
        .bind(&form.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_certification(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, ServiceError> {
        let rows =
            sqlx::query_as::<_, Experience>("SELECT * FROM experience ORDER BY start_year DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn create_experience(&self, form: &ExperienceForm) -> Result<i32, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO experience (title, company, start_year, end_year, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&form.title)
        .bind(&form.company)
        .bind(&form.start_year)
        .bind(&form.end_year)
        .bind(&form.description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i32)
    }

    async fn update_experience(
        &self,
        id: i32,
        form: &ExperienceForm,
    ) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "UPDATE experience SET title = ?, company = ?, start_year = ?, end_year = ?, description = ? WHERE id = ?",
        )
        .bind(&form.title)
        .bind(&form.company)
        .bind(&form.start_year)
        .bind(&form.end_year)
        .bind(&form.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_experience(&self, id: i32) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
