use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{
    Certification, CertificationForm, Education, EducationForm, ErrorResponse, Experience,
    ExperienceForm, ResumeSummary, ResumeSummaryForm, ServiceError,
};
use crate::repositories::ResumeRepository;

#[utoipa::path(
    get,
    path = "/api/resume",
    responses((status = 200, description = "Resume summary singleton", body = ResumeSummary)),
    security()
)]
pub async fn get_resume_summary(
    repo: web::Data<dyn ResumeRepository>,
) -> Result<HttpResponse, ServiceError> {
    let summary = repo.get_summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[utoipa::path(
    put,
    path = "/api/resume",
    request_body = ResumeSummaryForm,
    responses(
        (status = 200, description = "Summary updated"),
        (status = 400, description = "Missing summary fields", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn update_resume_summary(
    repo: web::Data<dyn ResumeRepository>,
    form: web::Json<ResumeSummaryForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;
    repo.update_summary(&form).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Resume summary updated successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/education",
    responses((status = 200, description = "Education entries, newest first", body = [Education])),
    security()
)]
pub async fn get_education(
    repo: web::Data<dyn ResumeRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = repo.list_education().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/education",
    request_body = EducationForm,
    responses(
        (status = 201, description = "Education entry created", body = Education),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_education(
    repo: web::Data<dyn ResumeRepository>,
    form: web::Json<EducationForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;
    let id = repo.create_education(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "degree": form.degree,
        "start_year": form.start_year,
        "end_year": form.end_year,
        "institution": form.institution,
        "description": form.description
    })))
}

#[utoipa::path(
    put,
    path = "/api/education/{id}",
    params(("id" = i32, Path, description = "Education entry ID")),
    request_body = EducationForm,
    responses(
        (status = 200, description = "Education entry updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn update_education(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    form: web::Json<EducationForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let affected = repo.update_education(path.into_inner(), &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Education not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Education updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/education/{id}",
    params(("id" = i32, Path, description = "Education entry ID")),
    responses(
        (status = 200, description = "Education entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn delete_education(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete_education(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Education not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Education deleted successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/certifications",
    responses((status = 200, description = "Certifications, newest first", body = [Certification])),
    security()
)]
pub async fn get_certifications(
    repo: web::Data<dyn ResumeRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = repo.list_certifications().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/certifications",
    request_body = CertificationForm,
    responses(
        (status = 201, description = "Certification created", body = Certification),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_certification(
    repo: web::Data<dyn ResumeRepository>,
    form: web::Json<CertificationForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;
    let id = repo.create_certification(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "title": form.title,
        "issuer": form.issuer,
        "issue_date": form.issue_date,
        "description": form.description
    })))
}

#[utoipa::path(
    put,
    path = "/api/certifications/{id}",
    params(("id" = i32, Path, description = "Certification ID")),
    request_body = CertificationForm,
    responses(
        (status = 200, description = "Certification updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse)
    )
)]
pub async fn update_certification(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    form: web::Json<CertificationForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let affected = repo.update_certification(path.into_inner(), &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound(
            "Certification not found".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Certification updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/certifications/{id}",
    params(("id" = i32, Path, description = "Certification ID")),
    responses(
        (status = 200, description = "Certification deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse)
    )
)]
pub async fn delete_certification(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete_certification(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound(
            "Certification not found".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Certification deleted successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/experience",
    responses((status = 200, description = "Experience entries, newest first", body = [Experience])),
    security()
)]
pub async fn get_experience(
    repo: web::Data<dyn ResumeRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = repo.list_experience().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/experience",
    request_body = ExperienceForm,
    responses(
        (status = 201, description = "Experience entry created", body = Experience),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_experience(
    repo: web::Data<dyn ResumeRepository>,
    form: web::Json<ExperienceForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;
    let id = repo.create_experience(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "title": form.title,
        "company": form.company,
        "start_year": form.start_year,
        "end_year": form.end_year,
        "description": form.description
    })))
}

#[utoipa::path(
    put,
    path = "/api/experience/{id}",
    params(("id" = i32, Path, description = "Experience entry ID")),
    request_body = ExperienceForm,
    responses(
        (status = 200, description = "Experience entry updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn update_experience(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    form: web::Json<ExperienceForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let affected = repo.update_experience(path.into_inner(), &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Experience not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Experience updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/experience/{id}",
    params(("id" = i32, Path, description = "Experience entry ID")),
    responses(
        (status = 200, description = "Experience entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn delete_experience(
    repo: web::Data<dyn ResumeRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete_experience(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Experience not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Experience deleted successfully"
    })))
}
