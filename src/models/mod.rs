// Re-export all models organized by domain
pub mod entities;
pub mod errors;
pub mod request;
pub mod response;

pub use entities::*;
pub use errors::*;
pub use request::*;
pub use response::*;
