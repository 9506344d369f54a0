use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::{hash_password, verify_password, JwtManager, TOKEN_TTL_SECONDS};
use crate::middleware::auth::require_admin;
use crate::models::{
    AdminLoginForm, ApiResponse, ErrorResponse, LoginResponse, PasswordChangeForm, ServiceError,
};
use crate::repositories::AdminRepository;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginForm,
    responses(
        (status = 200, description = "Login successful, JWT returned", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = ErrorResponse),
        (status = 401, description = "Invalid admin ID or password", body = ErrorResponse)
    ),
    security()
)]
pub async fn login(
    repo: web::Data<dyn AdminRepository>,
    form: web::Json<AdminLoginForm>,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;

    let admin = repo.find_by_admin_id(&form.admin_id).await?;
    let admin = match admin {
        Some(admin) if verify_password(&form.password, &admin.password) => admin,
        _ => {
            return Err(ServiceError::AuthenticationError(
                "Invalid admin ID or password".to_string(),
            ));
        }
    };

    let token = jwt_manager
        .generate_token(&admin.admin_id)
        .map_err(|_| ServiceError::InternalError("Failed to generate token".to_string()))?;

    tracing::info!(admin_id = %admin.admin_id, "admin login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        admin_id: admin.admin_id,
        token,
        expires_in: TOKEN_TTL_SECONDS,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/change-password",
    request_body = PasswordChangeForm,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse),
        (status = 400, description = "Invalid input or wrong current password", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn change_password(
    repo: web::Data<dyn AdminRepository>,
    form: web::Json<PasswordChangeForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let admin = repo
        .find_by_admin_id(&form.admin_id)
        .await?
        .ok_or_else(|| ServiceError::AuthenticationError("Admin not found".to_string()))?;

    // Wrong current password is a caller mistake, not an auth failure; the
    // stored hash must stay untouched.
    if !verify_password(&form.current_password, &admin.password) {
        return Err(ServiceError::ValidationError(
            "Current password is incorrect".to_string(),
        ));
    }

    let new_hash = hash_password(&form.new_password)
        .map_err(|_| ServiceError::InternalError("Failed to hash new password".to_string()))?;
    repo.update_password(&form.admin_id, &new_hash).await?;

    tracing::info!(admin_id = %form.admin_id, "admin password changed");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Password changed successfully"
    })))
}
