pub mod admin;
pub mod contact;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod services;
pub mod skills;
pub mod testimonials;
pub mod uploads;
pub mod visitor;

// Re-export all handler functions for easy importing
pub use admin::*;
pub use contact::*;
pub use profile::*;
pub use projects::*;
pub use resume::*;
pub use services::*;
pub use skills::*;
pub use testimonials::*;
pub use uploads::*;
pub use visitor::*;
