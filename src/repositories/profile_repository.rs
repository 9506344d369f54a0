use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{Profile, ProfileUpdateForm, ServiceError, SocialLink, SocialLinkUpdateForm};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_profile(&self) -> Result<Option<Profile>, ServiceError>;
    /// Updates the profile row and any submitted social links in one
    /// transaction, so a partial failure cannot leave the two out of sync.
    async fn update_profile(&self, id: i32, form: &ProfileUpdateForm)
        -> Result<u64, ServiceError>;
    async fn find_social_links(&self, user_id: i32) -> Result<Vec<SocialLink>, ServiceError>;
    async fn update_social_link(
        &self,
        id: i32,
        form: &SocialLinkUpdateForm,
    ) -> Result<u64, ServiceError>;
}

pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_profile(&self) -> Result<Option<Profile>, ServiceError> {
        let profile =
            sqlx::query_as::<_, Profile>("SELECT * FROM user_profile WHERE id = 1 LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn update_profile(
        &self,
        id: i32,
        form: &ProfileUpdateForm,
    ) -> Result<u64, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE user_profile
            SET name = ?, bio = ?, header_profile_picture = ?, about_profile_picture = ?,
                email = ?, phone = ?, location = ?, linkedin = ?, age = ?, about_footer = ?
            WHERE id = ?
            "#,
        )
        .bind(&form.name)
        .bind(&form.bio)
        .bind(&form.header_profile_picture)
        .bind(&form.about_profile_picture)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.location)
        .bind(&form.linkedin)
        .bind(form.age)
        .bind(&form.about_footer)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if let Some(links) = &form.social_links {
            for link in links {
                sqlx::query(
                    "UPDATE social_links SET platform = ?, url = ? WHERE id = ? AND user_id = ?",
                )
                .bind(&link.platform)
                .bind(&link.url)
                .bind(link.id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    async fn find_social_links(&self, user_id: i32) -> Result<Vec<SocialLink>, ServiceError> {
        let links = sqlx::query_as::<_, SocialLink>(
            "SELECT * FROM social_links WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn update_social_link(
        &self,
        id: i32,
        form: &SocialLinkUpdateForm,
    ) -> Result<u64, ServiceError> {
        let result =
            sqlx::query("UPDATE social_links SET user_id = ?, platform = ?, url = ? WHERE id = ?")
                .bind(form.user_id)
                .bind(&form.platform)
                .bind(&form.url)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }
}
