use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{ErrorResponse, ServiceEntry, ServiceError, ServiceForm};
use crate::repositories::ServiceRepository;

#[utoipa::path(
    get,
    path = "/api/services",
    responses((status = 200, description = "All offered services", body = [ServiceEntry])),
    security()
)]
pub async fn get_services(
    repo: web::Data<dyn ServiceRepository>,
) -> Result<HttpResponse, ServiceError> {
    let services = repo.list().await?;
    Ok(HttpResponse::Ok().json(services))
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = ServiceForm,
    responses(
        (status = 201, description = "Service created", body = ServiceEntry),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_service(
    repo: web::Data<dyn ServiceRepository>,
    form: web::Json<ServiceForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let id = repo.create(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "title": form.title,
        "description": form.description
    })))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = ServiceForm,
    responses(
        (status = 200, description = "Service updated", body = ServiceEntry),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse)
    )
)]
pub async fn update_service(
    repo: web::Data<dyn ServiceRepository>,
    path: web::Path<i32>,
    form: web::Json<ServiceForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let id = path.into_inner();
    let affected = repo.update(id, &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Service not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "title": form.title,
        "description": form.description
    })))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse)
    )
)]
pub async fn delete_service(
    repo: web::Data<dyn ServiceRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Service not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Service deleted successfully"
    })))
}
