use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::config::AppConfig;
use crate::middleware::auth::require_admin;
use crate::models::{ErrorResponse, ServiceError};

#[derive(MultipartForm)]
pub struct HeaderPictureForm {
    #[multipart(rename = "header_profile_picture", limit = "10MB")]
    pub file: TempFile,
}

#[derive(MultipartForm)]
pub struct AboutPictureForm {
    #[multipart(rename = "about_profile_picture", limit = "10MB")]
    pub file: TempFile,
}

#[derive(MultipartForm)]
pub struct ProjectImageForm {
    #[multipart(rename = "project_image", limit = "10MB")]
    pub file: TempFile,
}

/// Validates the upload against the jpeg/jpg/png allow-list (extension and
/// declared content type both have to agree) and stores it under a
/// millisecond-timestamp filename. Returns the public path.
fn persist_image(file: TempFile, upload_dir: &str) -> Result<String, ServiceError> {
    let original_name = file.file_name.clone().unwrap_or_default();
    let extension = std::path::Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let extension_ok = matches!(extension.as_str(), "jpeg" | "jpg" | "png");
    let mime_ok = file
        .content_type
        .as_ref()
        .map(|m| {
            let essence = m.essence_str();
            essence == "image/jpeg" || essence == "image/png"
        })
        .unwrap_or(false);

    if !extension_ok || !mime_ok {
        return Err(ServiceError::ValidationError(
            "Only images (jpeg, jpg, png) are allowed".to_string(),
        ));
    }

    std::fs::create_dir_all(upload_dir)
        .map_err(|e| ServiceError::InternalError(format!("Failed to create upload dir: {}", e)))?;

    let stored_name = format!("{}.{}", chrono::Utc::now().timestamp_millis(), extension);
    let destination = std::path::Path::new(upload_dir).join(&stored_name);

    // copy instead of persist: the temp file may live on another filesystem
    std::fs::copy(file.file.path(), &destination)
        .map_err(|e| ServiceError::InternalError(format!("Failed to store upload: {}", e)))?;

    tracing::info!(file = %stored_name, "image uploaded");
    Ok(format!("/Uploads/{}", stored_name))
}

#[utoipa::path(
    post,
    path = "/api/upload-header-picture",
    responses(
        (status = 200, description = "Stored path for the header picture"),
        (status = 400, description = "No file uploaded or invalid file type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn upload_header_picture(
    MultipartForm(form): MultipartForm<HeaderPictureForm>,
    config: web::Data<AppConfig>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    let path = persist_image(form.file, &config.upload_dir)?;
    Ok(HttpResponse::Ok().json(json!({ "header_profile_picture": path })))
}

#[utoipa::path(
    post,
    path = "/api/upload-about-picture",
    responses(
        (status = 200, description = "Stored path for the about picture"),
        (status = 400, description = "No file uploaded or invalid file type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn upload_about_picture(
    MultipartForm(form): MultipartForm<AboutPictureForm>,
    config: web::Data<AppConfig>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    let path = persist_image(form.file, &config.upload_dir)?;
    Ok(HttpResponse::Ok().json(json!({ "about_profile_picture": path })))
}

#[utoipa::path(
    post,
    path = "/api/upload-project-image",
    responses(
        (status = 200, description = "Stored path for the project image"),
        (status = 400, description = "No file uploaded or invalid file type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn upload_project_image(
    MultipartForm(form): MultipartForm<ProjectImageForm>,
    config: web::Data<AppConfig>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    let path = persist_image(form.file, &config.upload_dir)?;
    Ok(HttpResponse::Ok().json(json!({ "project_image": path })))
}
