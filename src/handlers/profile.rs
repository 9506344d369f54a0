use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{
    ErrorResponse, Profile, ProfileUpdateForm, ServiceError, SocialLink, SocialLinkUpdateForm,
};
use crate::repositories::ProfileRepository;

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile singleton, or an empty object when unseeded", body = Profile)
    ),
    security()
)]
pub async fn get_profile(
    repo: web::Data<dyn ProfileRepository>,
) -> Result<HttpResponse, ServiceError> {
    match repo.find_profile().await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

#[utoipa::path(
    put,
    path = "/api/profile/{id}",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = ProfileUpdateForm,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    repo: web::Data<dyn ProfileRepository>,
    path: web::Path<i32>,
    form: web::Json<ProfileUpdateForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let id = path.into_inner();
    let affected = repo.update_profile(id, &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Profile not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Profile updated successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/social-links/{user_id}",
    params(("user_id" = i32, Path, description = "Owning profile ID")),
    responses(
        (status = 200, description = "Social links for the profile", body = [SocialLink])
    ),
    security()
)]
pub async fn get_social_links(
    repo: web::Data<dyn ProfileRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let links = repo.find_social_links(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(links))
}

#[utoipa::path(
    put,
    path = "/api/social-links/{id}",
    params(("id" = i32, Path, description = "Social link ID")),
    request_body = SocialLinkUpdateForm,
    responses(
        (status = 200, description = "Social link updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Social link not found", body = ErrorResponse)
    )
)]
pub async fn update_social_link(
    repo: web::Data<dyn ProfileRepository>,
    path: web::Path<i32>,
    form: web::Json<SocialLinkUpdateForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    form.validate()?;

    let id = path.into_inner();
    let affected = repo.update_social_link(id, &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Social link not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Social link updated successfully"
    })))
}
