use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Singleton row (id = 1) backing the About and Header sections.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub header_profile_picture: String,
    pub about_profile_picture: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub age: i32,
    pub about_footer: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SocialLink {
    pub id: i32,
    pub user_id: i32,
    pub platform: String,
    pub url: String,
}

/// Singleton row (id = 1) heading the resume section.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResumeSummary {
    pub id: i32,
    pub name: String,
    pub profession: String,
    pub bio: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Education {
    pub id: i32,
    pub degree: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub institution: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Certification {
    pub id: i32,
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub proficiency: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub skill_type: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github: String,
    pub demo: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ServiceEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub id: i32,
    pub content: String,
    pub author: String,
    pub role: String,
}

/// Singleton row (id = 1) for the contact section.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ContactInfo {
    pub id: i32,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "mapUrl")]
    #[sqlx(rename = "mapUrl")]
    pub map_url: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Admin credential row; never serialized out, the hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i32,
    pub admin_id: String,
    pub password: String,
}
