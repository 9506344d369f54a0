use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::handlers;
use crate::repositories::{
    AdminRepository, ContactRepository, MySqlAdminRepository, MySqlContactRepository,
    MySqlProfileRepository, MySqlProjectRepository, MySqlResumeRepository, MySqlServiceRepository,
    MySqlSkillRepository, MySqlTestimonialRepository, MySqlVisitorRepository, ProfileRepository,
    ProjectRepository, ResumeRepository, ServiceRepository, SkillRepository, TestimonialRepository,
    VisitorRepository,
};

/// Registers one `web::Data<dyn Trait>` per repository so handlers stay
/// decoupled from the concrete MySQL implementations.
pub fn configure_repositories(cfg: &mut web::ServiceConfig, pool: &MySqlPool) {
    let profile: Arc<dyn ProfileRepository> = Arc::new(MySqlProfileRepository::new(pool.clone()));
    let resume: Arc<dyn ResumeRepository> = Arc::new(MySqlResumeRepository::new(pool.clone()));
    let skills: Arc<dyn SkillRepository> = Arc::new(MySqlSkillRepository::new(pool.clone()));
    let projects: Arc<dyn ProjectRepository> = Arc::new(MySqlProjectRepository::new(pool.clone()));
    let services: Arc<dyn ServiceRepository> = Arc::new(MySqlServiceRepository::new(pool.clone()));
    let testimonials: Arc<dyn TestimonialRepository> =
        Arc::new(MySqlTestimonialRepository::new(pool.clone()));
    let contact: Arc<dyn ContactRepository> = Arc::new(MySqlContactRepository::new(pool.clone()));
    let visitor: Arc<dyn VisitorRepository> = Arc::new(MySqlVisitorRepository::new(pool.clone()));
    let admin: Arc<dyn AdminRepository> = Arc::new(MySqlAdminRepository::new(pool.clone()));

    cfg.app_data(web::Data::from(profile))
        .app_data(web::Data::from(resume))
        .app_data(web::Data::from(skills))
        .app_data(web::Data::from(projects))
        .app_data(web::Data::from(services))
        .app_data(web::Data::from(testimonials))
        .app_data(web::Data::from(contact))
        .app_data(web::Data::from(visitor))
        .app_data(web::Data::from(admin));
}

/// Full API route table. Shared between the server binary and the test
/// harness so the two never drift apart.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/profile", web::get().to(handlers::get_profile))
        .route("/api/profile/{id}", web::put().to(handlers::update_profile))
        .route(
            "/api/social-links/{user_id}",
            web::get().to(handlers::get_social_links),
        )
        .route(
            "/api/social-links/{id}",
            web::put().to(handlers::update_social_link),
        )
        .route("/api/resume", web::get().to(handlers::get_resume_summary))
        .route("/api/resume", web::put().to(handlers::update_resume_summary))
        .route("/api/education", web::get().to(handlers::get_education))
        .route("/api/education", web::post().to(handlers::create_education))
        .route(
            "/api/education/{id}",
            web::put().to(handlers::update_education),
        )
        .route(
            "/api/education/{id}",
            web::delete().to(handlers::delete_education),
        )
        .route(
            "/api/certifications",
            web::get().to(handlers::get_certifications),
        )
        .route(
            "/api/certifications",
            web::post().to(handlers::create_certification),
        )
        .route(
            "/api/certifications/{id}",
            web::put().to(handlers::update_certification),
        )
        .route(
            "/api/certifications/{id}",
            web::delete().to(handlers::delete_certification),
        )
        .route("/api/experience", web::get().to(handlers::get_experience))
        .route("/api/experience", web::post().to(handlers::create_experience))
        .route(
            "/api/experience/{id}",
            web::put().to(handlers::update_experience),
        )
        .route(
            "/api/experience/{id}",
            web::delete().to(handlers::delete_experience),
        )
        .route("/api/skills", web::get().to(handlers::get_skills))
        .route("/api/skills", web::post().to(handlers::create_skill))
        .route("/api/skills/{id}", web::put().to(handlers::update_skill))
        .route("/api/skills/{id}", web::delete().to(handlers::delete_skill))
        .route("/api/projects", web::get().to(handlers::get_projects))
        .route("/api/projects", web::post().to(handlers::create_project))
        .route("/api/projects/{id}", web::get().to(handlers::get_project))
        .route("/api/projects/{id}", web::put().to(handlers::update_project))
        .route(
            "/api/projects/{id}",
            web::delete().to(handlers::delete_project),
        )
        .route("/api/services", web::get().to(handlers::get_services))
        .route("/api/services", web::post().to(handlers::create_service))
        .route("/api/services/{id}", web::put().to(handlers::update_service))
        .route(
            "/api/services/{id}",
            web::delete().to(handlers::delete_service),
        )
        .route(
            "/api/testimonials",
            web::get().to(handlers::get_testimonials),
        )
        .route(
            "/api/testimonials",
            web::post().to(handlers::create_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            web::put().to(handlers::update_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            web::delete().to(handlers::delete_testimonial),
        )
        .route("/api/contact-info", web::get().to(handlers::get_contact_info))
        .route(
            "/api/contact-info",
            web::put().to(handlers::update_contact_info),
        )
        .route(
            "/api/contact-submissions",
            web::get().to(handlers::get_contact_submissions),
        )
        .route(
            "/api/contact-submissions",
            web::post().to(handlers::create_contact_submission),
        )
        .route(
            "/api/contact-submissions/{id}",
            web::delete().to(handlers::delete_contact_submission),
        )
        .route(
            "/api/visitor-count",
            web::get().to(handlers::get_visitor_count),
        )
        .route(
            "/api/visitor-count",
            web::post().to(handlers::increment_visitor_count),
        )
        .route(
            "/api/upload-header-picture",
            web::post().to(handlers::upload_header_picture),
        )
        .route(
            "/api/upload-about-picture",
            web::post().to(handlers::upload_about_picture),
        )
        .route(
            "/api/upload-project-image",
            web::post().to(handlers::upload_project_image),
        )
        .route("/api/admin/login", web::post().to(handlers::login))
        .route(
            "/api/admin/change-password",
            web::post().to(handlers::change_password),
        );
}
