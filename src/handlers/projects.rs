use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{ErrorResponse, Project, ProjectForm, ServiceError};
use crate::repositories::ProjectRepository;

#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, description = "All projects", body = [Project])),
    security()
)]
pub async fn get_projects(
    repo: web::Data<dyn ProjectRepository>,
) -> Result<HttpResponse, ServiceError> {
    let projects = repo.list().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project by id, or an empty object when absent", body = Project)
    ),
    security()
)]
pub async fn get_project(
    repo: web::Data<dyn ProjectRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    match repo.find_by_id(path.into_inner()).await? {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectForm,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_project(
    repo: web::Data<dyn ProjectRepository>,
    form: web::Json<ProjectForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let id = repo.create(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "title": form.title,
        "description": form.description,
        "image": form.image,
        "github": form.github,
        "demo": form.demo
    })))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project updated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
pub async fn update_project(
    repo: web::Data<dyn ProjectRepository>,
    path: web::Path<i32>,
    form: web::Json<ProjectForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.update(path.into_inner(), &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Project not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Project updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
pub async fn delete_project(
    repo: web::Data<dyn ProjectRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Project not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Project deleted successfully"
    })))
}
