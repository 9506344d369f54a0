use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{ErrorResponse, ServiceError, Testimonial, TestimonialForm};
use crate::repositories::TestimonialRepository;

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses((status = 200, description = "All testimonials", body = [Testimonial])),
    security()
)]
pub async fn get_testimonials(
    repo: web::Data<dyn TestimonialRepository>,
) -> Result<HttpResponse, ServiceError> {
    let testimonials = repo.list().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = TestimonialForm,
    responses(
        (status = 201, description = "Testimonial created", body = Testimonial),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_testimonial(
    repo: web::Data<dyn TestimonialRepository>,
    form: web::Json<TestimonialForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let id = repo.create(&form).await?;

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "content": form.content,
        "author": form.author,
        "role": form.role
    })))
}

#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    params(("id" = i32, Path, description = "Testimonial ID")),
    request_body = TestimonialForm,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse)
    )
)]
pub async fn update_testimonial(
    repo: web::Data<dyn TestimonialRepository>,
    path: web::Path<i32>,
    form: web::Json<TestimonialForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;
    form.validate()?;

    let id = path.into_inner();
    let affected = repo.update(id, &form).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Testimonial not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "content": form.content,
        "author": form.author,
        "role": form.role
    })))
}

#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(("id" = i32, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse)
    )
)]
pub async fn delete_testimonial(
    repo: web::Data<dyn TestimonialRepository>,
    path: web::Path<i32>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let affected = repo.delete(path.into_inner()).await?;
    if affected == 0 {
        return Err(ServiceError::NotFound("Testimonial not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Testimonial deleted successfully"
    })))
}
