use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{ErrorResponse, ServiceError, Skill, SkillForm};
use crate::repositories::SkillRepository;

#[utoipa::path(
    get,
    path = "/api/skills",
    responses((status = 200, description = "All skills", body = [Skill])),
    security()
)]
pub async fn get_skills(repo: web::Data<dyn SkillRepository>) -> Result<HttpResponse, ServiceError> {
    let skills = repo.list().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[utoipa::path(
    post,
    path = "/api/skills",
    request_body = SkillForm,
    responses(
        (status = 201, description = "Skill created", body = Skill),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_skill(
    repo: web::Data<dyn SkillRepository>,
    form: web::Json<SkillForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    let proficiency = form.validate()?;

    let id = repo.create(&form.name, proficiency, &form.skill_type).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "name": form.name,
        "proficiency": proficiency,
        "type": form.skill_type
    })))
}

#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    params(("id" = i32, Path, description = "Skill ID")),
    request_body = SkillForm,
    responses(
        (status = 200, description = "Skill updated", body = Skill),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
pub async fn update_skill(
    repo: web::Data<dyn SkillRepository>,
    path: web::Path<i32>,
    form: web::Json<SkillForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    let proficiency = form.validate()?;

    let id = path.into_inner();
    let affected = repo.update(id, &form.name, proficiency, &form.skill_type).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Skill not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "name": form.name,
        "proficiency": proficiency,
        "type": form.skill_type
    })))
}

#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    params(("id" = i32, Path, description = "Skill ID")),
    responses(
        (status = 200, description = "Skill deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
pub async fn delete_skill(
    repo: web::Data<dyn SkillRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Skill not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Skill deleted successfully"
    })))
}
