use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{Admin, ServiceError};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_admin_id(&self, admin_id: &str) -> Result<Option<Admin>, ServiceError>;
    async fn update_password(&self, admin_id: &str, password_hash: &str)
        -> Result<u64, ServiceError>;
}

pub struct MySqlAdminRepository {
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn find_by_admin_id(&self, admin_id: &str) -> Result<Option<Admin>, ServiceError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE admin_id = ?")
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    async fn update_password(
        &self,
        admin_id: &str,
        password_hash: &str,
    ) -> Result<u64, ServiceError> {
        let result = sqlx::query("UPDATE admins SET password = ? WHERE admin_id = ?")
            .bind(password_hash)
            .bind(admin_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
