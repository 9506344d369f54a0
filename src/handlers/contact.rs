use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{
    ContactInfo, ContactInfoForm, ContactSubmission, ContactSubmissionForm, ErrorResponse,
    ServiceError,
};
use crate::repositories::ContactRepository;

#[utoipa::path(
    get,
    path = "/api/contact-info",
    responses(
        (status = 200, description = "Contact info singleton", body = ContactInfo),
        (status = 404, description = "Contact info not found", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_contact_info(
    repo: web::Data<dyn ContactRepository>,
) -> Result<HttpResponse, ServiceError> {
    match repo.find_info().await? {
        Some(info) => Ok(HttpResponse::Ok().json(info)),
        None => Err(ServiceError::NotFound("Contact info not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/api/contact-info",
    request_body = ContactInfoForm,
    responses(
        (status = 200, description = "Contact info updated", body = ContactInfo),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn update_contact_info(
    repo: web::Data<dyn ContactRepository>,
    form: web::Json<ContactInfoForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    repo.upsert_info(&form).await?;

    Ok(HttpResponse::Ok().json(json!({
        "id": 1,
        "address": form.address,
        "phone": form.phone,
        "email": form.email,
        "mapUrl": form.map_url
    })))
}

#[utoipa::path(
    get,
    path = "/api/contact-submissions",
    responses(
        (status = 200, description = "Contact form submissions, newest first", body = [ContactSubmission])
    ),
    security()
)]
pub async fn get_contact_submissions(
    repo: web::Data<dyn ContactRepository>,
) -> Result<HttpResponse, ServiceError> {
    let submissions = repo.list_submissions().await?;
    Ok(HttpResponse::Ok().json(submissions))
}

#[utoipa::path(
    post,
    path = "/api/contact-submissions",
    request_body = ContactSubmissionForm,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, description = "Missing fields", body = ErrorResponse)
    ),
    security()
)]
pub async fn create_contact_submission(
    repo: web::Data<dyn ContactRepository>,
    form: web::Json<ContactSubmissionForm>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;

    let id = repo.create_submission(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "name": form.name,
        "email": form.email,
        "subject": form.subject,
        "message": form.message,
        "created_at": chrono::Utc::now()
    })))
}

#[utoipa::path(
    delete,
    path = "/api/contact-submissions/{id}",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Submission not found", body = ErrorResponse)
    )
)]
pub async fn delete_contact_submission(
    repo: web::Data<dyn ContactRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete_submission(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Submission not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Submission deleted successfully"
    })))
}
