use serde::Serialize;
use utoipa::ToSchema;

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Authentication responses
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub admin_id: String,
    pub token: String,
    pub expires_in: i64,
}

#[derive(Serialize, ToSchema)]
pub struct VisitorCountResponse {
    pub count: i32,
}
