use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use utoipa::ToSchema;

use crate::models::errors::ServiceError;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}$").expect("year regex"))
}

fn issue_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}$").expect("issue date regex"))
}

pub fn is_valid_year(value: &str) -> bool {
    year_re().is_match(value)
}

/// End years may be a 4-digit year or the literal "Present" for ongoing entries.
pub fn is_valid_end_year(value: &str) -> bool {
    value == "Present" || year_re().is_match(value)
}

pub fn is_valid_issue_date(value: &str) -> bool {
    issue_date_re().is_match(value)
}

/// Profile fields are not individually required; absent fields fall back to
/// empty strings the same way the admin form submits them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileUpdateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub header_profile_picture: String,
    #[serde(default)]
    pub about_profile_picture: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub about_footer: String,
    /// When present, applied in the same transaction as the profile row.
    #[serde(default)]
    pub social_links: Option<Vec<SocialLinkItem>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SocialLinkItem {
    pub id: i32,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SocialLinkUpdateForm {
    pub user_id: i32,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

impl SocialLinkUpdateForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.platform.is_empty() {
            return Err(ServiceError::ValidationError(
                "Platform is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResumeSummaryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ResumeSummaryForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let all_present = !self.name.is_empty()
            && !self.profession.is_empty()
            && !self.bio.is_empty()
            && !self.city.is_empty()
            && !self.phone.is_empty()
            && !self.email.is_empty();
        if !all_present {
            return Err(ServiceError::ValidationError(
                "All summary fields are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EducationForm {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub description: String,
}

impl EducationForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.degree.is_empty()
            || self.start_year.is_empty()
            || self.institution.is_empty()
            || self.description.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Degree, start year, institution, and description are required".to_string(),
            ));
        }
        validate_year_range(&self.start_year, self.end_year.as_deref())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CertificationForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub description: String,
}

impl CertificationForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.is_empty()
            || self.issuer.is_empty()
            || self.issue_date.is_empty()
            || self.description.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Title, issuer, issue date, and description are required".to_string(),
            ));
        }
        if !is_valid_issue_date(&self.issue_date) {
            return Err(ServiceError::ValidationError(
                "Issue date must be in YYYY-MM format".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExperienceForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ExperienceForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.is_empty()
            || self.company.is_empty()
            || self.start_year.is_empty()
            || self.description.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Title, company, start year, and description are required".to_string(),
            ));
        }
        validate_year_range(&self.start_year, self.end_year.as_deref())
    }
}

fn validate_year_range(start_year: &str, end_year: Option<&str>) -> Result<(), ServiceError> {
    let end_ok = match end_year {
        Some(end) if !end.is_empty() => is_valid_end_year(end),
        _ => true,
    };
    if !is_valid_year(start_year) || !end_ok {
        return Err(ServiceError::ValidationError(
            "Start year and end year must be valid years or \"Present\"".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillForm {
    #[serde(default)]
    pub name: String,
    pub proficiency: Option<i32>,
    #[serde(default, rename = "type")]
    pub skill_type: String,
}

impl SkillForm {
    pub fn validate(&self) -> Result<i32, ServiceError> {
        let type_ok = matches!(self.skill_type.as_str(), "technical" | "soft");
        if self.name.is_empty() || self.proficiency.is_none() || !type_ok {
            return Err(ServiceError::ValidationError(
                "Name, proficiency (0-100), and type (technical/soft) are required".to_string(),
            ));
        }
        let proficiency = self.proficiency.unwrap_or(0);
        if !(0..=100).contains(&proficiency) {
            return Err(ServiceError::ValidationError(
                "Proficiency must be between 0 and 100".to_string(),
            ));
        }
        Ok(proficiency)
    }
}

/// Project fields are not individually required; absent fields are stored as
/// empty strings, matching the admin dashboard's draft-then-edit flow.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.is_empty() || self.description.is_empty() {
            return Err(ServiceError::ValidationError(
                "Title and description are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TestimonialForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub role: String,
}

impl TestimonialForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.content.is_empty() || self.author.is_empty() || self.role.is_empty() {
            return Err(ServiceError::ValidationError(
                "Content, author, and role are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactInfoForm {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "mapUrl")]
    pub map_url: String,
}

impl ContactInfoForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.address.is_empty()
            || self.phone.is_empty()
            || self.email.is_empty()
            || self.map_url.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Address, phone, email, and mapUrl are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactSubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmissionForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Name, email, subject, and message are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VisitorIncrementForm {
    #[serde(default)]
    pub increment: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub password: String,
}

impl AdminLoginForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.admin_id.is_empty() || self.password.is_empty() {
            return Err(ServiceError::ValidationError(
                "Admin ID and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PasswordChangeForm {
    #[serde(default)]
    pub admin_id: String,
    #[serde(default, rename = "currentPassword")]
    pub current_password: String,
    #[serde(default, rename = "newPassword")]
    pub new_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.admin_id.is_empty()
            || self.current_password.is_empty()
            || self.new_password.is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Admin ID, current password, and new password are required".to_string(),
            ));
        }
        if self.new_password.len() < 8 {
            return Err(ServiceError::ValidationError(
                "New password must be at least 8 characters long".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_pattern_accepts_four_digits_only() {
        assert!(is_valid_year("2020"));
        assert!(!is_valid_year("20"));
        assert!(!is_valid_year("20201"));
        assert!(!is_valid_year("202a"));
        assert!(!is_valid_year("Present"));
    }

    #[test]
    fn end_year_accepts_present_literal() {
        assert!(is_valid_end_year("Present"));
        assert!(is_valid_end_year("2023"));
        assert!(!is_valid_end_year("present"));
        assert!(!is_valid_end_year("ongoing"));
    }

    #[test]
    fn issue_date_requires_zero_padded_month() {
        assert!(is_valid_issue_date("2022-06"));
        assert!(!is_valid_issue_date("2022-6"));
        assert!(!is_valid_issue_date("2022/06"));
        assert!(!is_valid_issue_date("202206"));
    }

    #[test]
    fn education_rejects_bad_years() {
        let form = EducationForm {
            degree: "B.Tech".into(),
            start_year: "16".into(),
            end_year: Some("2020".into()),
            institution: "XYZ University".into(),
            description: "desc".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn education_accepts_present_end_year() {
        let form = EducationForm {
            degree: "B.Tech".into(),
            start_year: "2016".into(),
            end_year: Some("Present".into()),
            institution: "XYZ University".into(),
            description: "desc".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn skill_accepts_boundary_proficiency() {
        for p in [0, 100] {
            let form = SkillForm {
                name: "HTML".into(),
                proficiency: Some(p),
                skill_type: "technical".into(),
            };
            assert_eq!(form.validate().unwrap(), p);
        }
    }

    #[test]
    fn skill_rejects_out_of_range_proficiency() {
        for p in [-1, 101, 150] {
            let form = SkillForm {
                name: "HTML".into(),
                proficiency: Some(p),
                skill_type: "technical".into(),
            };
            assert!(form.validate().is_err());
        }
    }

    #[test]
    fn skill_rejects_unknown_type() {
        let form = SkillForm {
            name: "HTML".into(),
            proficiency: Some(50),
            skill_type: "hard".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn password_change_enforces_minimum_length() {
        let form = PasswordChangeForm {
            admin_id: "admin".into(),
            current_password: "oldpassword".into(),
            new_password: "short".into(),
        };
        assert!(form.validate().is_err());
    }
}
