use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{ErrorResponse, ServiceError, VisitorCountResponse, VisitorIncrementForm};
use crate::repositories::VisitorRepository;

#[utoipa::path(
    get,
    path = "/api/visitor-count",
    responses(
        (status = 200, description = "Current visitor count", body = VisitorCountResponse),
        (status = 404, description = "Counter row missing", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_visitor_count(
    repo: web::Data<dyn VisitorRepository>,
) -> Result<HttpResponse, ServiceError> {
    match repo.get_count().await? {
        Some(count) => Ok(HttpResponse::Ok().json(VisitorCountResponse { count })),
        None => Err(ServiceError::NotFound(
            "Visitor count not found".to_string(),
        )),
    }
}

/// Increments unconditionally for every truthy request; deduplication is the
/// client's concern (the SPA fires one increment per page load).
#[utoipa::path(
    post,
    path = "/api/visitor-count",
    request_body = VisitorIncrementForm,
    responses(
        (status = 200, description = "Count incremented", body = VisitorCountResponse),
        (status = 400, description = "Missing increment flag", body = ErrorResponse),
        (status = 404, description = "Counter row missing", body = ErrorResponse)
    ),
    security()
)]
pub async fn increment_visitor_count(
    repo: web::Data<dyn VisitorRepository>,
    form: web::Json<VisitorIncrementForm>,
) -> Result<HttpResponse, ServiceError> {
    if !form.increment {
        return Err(ServiceError::ValidationError(
            "Invalid request: increment field required".to_string(),
        ));
    }

    match repo.increment().await? {
        Some(count) => Ok(HttpResponse::Ok().json(VisitorCountResponse { count })),
        None => Err(ServiceError::NotFound(
            "Visitor count not found".to_string(),
        )),
    }
}
