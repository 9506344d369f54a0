pub mod admin_repository;
pub mod contact_repository;
pub mod profile_repository;
pub mod project_repository;
pub mod resume_repository;
pub mod service_repository;
pub mod skill_repository;
pub mod testimonial_repository;
pub mod visitor_repository;

pub use admin_repository::{AdminRepository, MySqlAdminRepository};
pub use contact_repository::{ContactRepository, MySqlContactRepository};
pub use profile_repository::{MySqlProfileRepository, ProfileRepository};
pub use project_repository::{MySqlProjectRepository, ProjectRepository};
pub use resume_repository::{MySqlResumeRepository, ResumeRepository};
pub use service_repository::{MySqlServiceRepository, ServiceRepository};
pub use skill_repository::{MySqlSkillRepository, SkillRepository};
pub use testimonial_repository::{MySqlTestimonialRepository, TestimonialRepository};
pub use visitor_repository::{MySqlVisitorRepository, VisitorRepository};
