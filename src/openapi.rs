use std::collections::BTreeMap;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    AdminLoginForm, ApiResponse, Certification, CertificationForm, ContactInfo, ContactInfoForm,
    ContactSubmission, ContactSubmissionForm, Education, EducationForm, ErrorResponse, Experience,
    ExperienceForm, LoginResponse, PasswordChangeForm, Profile, ProfileUpdateForm, Project,
    ProjectForm, ResumeSummary, ResumeSummaryForm, ServiceEntry, ServiceForm, Skill, SkillForm,
    SocialLink, SocialLinkItem, SocialLinkUpdateForm, Testimonial, TestimonialForm,
    VisitorCountResponse, VisitorIncrementForm,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        handlers::profile::get_social_links,
        handlers::profile::update_social_link,
        handlers::resume::get_resume_summary,
        handlers::resume::update_resume_summary,
        handlers::resume::get_education,
        handlers::resume::create_education,
        handlers::resume::update_education,
        handlers::resume::delete_education,
        handlers::resume::get_certifications,
        handlers::resume::create_certification,
        handlers::resume::update_certification,
        handlers::resume::delete_certification,
        handlers::resume::get_experience,
        handlers::resume::create_experience,
        handlers::resume::update_experience,
        handlers::resume::delete_experience,
        handlers::skills::get_skills,
        handlers::skills::create_skill,
        handlers::skills::update_skill,
        handlers::skills::delete_skill,
        handlers::projects::get_projects,
        handlers::projects::get_project,
        handlers::projects::create_project,
        handlers::projects::update_project,
        handlers::projects::delete_project,
        handlers::services::get_services,
        handlers::services::create_service,
        handlers::services::update_service,
        handlers::services::delete_service,
        handlers::testimonials::get_testimonials,
        handlers::testimonials::create_testimonial,
        handlers::testimonials::update_testimonial,
        handlers::testimonials::delete_testimonial,
        handlers::contact::get_contact_info,
        handlers::contact::update_contact_info,
        handlers::contact::get_contact_submissions,
        handlers::contact::create_contact_submission,
        handlers::contact::delete_contact_submission,
        handlers::visitor::get_visitor_count,
        handlers::visitor::increment_visitor_count,
        handlers::uploads::upload_header_picture,
        handlers::uploads::upload_about_picture,
        handlers::uploads::upload_project_image,
        handlers::admin::login,
        handlers::admin::change_password,
    ),
    components(schemas(
        Profile,
        ProfileUpdateForm,
        SocialLink,
        SocialLinkItem,
        SocialLinkUpdateForm,
        ResumeSummary,
        ResumeSummaryForm,
        Education,
        EducationForm,
        Certification,
        CertificationForm,
        Experience,
        ExperienceForm,
        Skill,
        SkillForm,
        Project,
        ProjectForm,
        ServiceEntry,
        ServiceForm,
        Testimonial,
        TestimonialForm,
        ContactInfo,
        ContactInfoForm,
        ContactSubmission,
        ContactSubmissionForm,
        VisitorCountResponse,
        VisitorIncrementForm,
        AdminLoginForm,
        PasswordChangeForm,
        ApiResponse,
        ErrorResponse,
        LoginResponse,
    )),
    info(
        title = "Portfolio Content API",
        description = "REST backend for the portfolio SPA: content CRUD, visitor counter, and admin session endpoints"
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: utoipa::openapi::OpenApi) -> utoipa::openapi::OpenApi {
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(
        "bearer_auth".to_string(),
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some("Admin session token from /api/admin/login"))
                .build(),
        ),
    );

    if let Some(components) = openapi.components.as_mut() {
        components.security_schemes = security_schemes;
    }

    // Global requirement; public endpoints opt out with security() overrides.
    openapi.security = Some(vec![utoipa::openapi::security::SecurityRequirement::new(
        "bearer_auth",
        Vec::<String>::new(),
    )]);

    openapi
}
