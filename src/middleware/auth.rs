use crate::auth::{verify_jwt, Claims, JwtManager};
use crate::models::ServiceError;

/// Admin gate for mutating endpoints. Returns the verified claims so handlers
/// can log which admin performed a change.
pub fn authenticate_request(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
) -> Result<Claims, actix_web::Error> {
    verify_jwt(req, jwt_manager)
}

/// Same gate, mapped into the service error taxonomy (401).
pub fn require_admin(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
) -> Result<Claims, ServiceError> {
    authenticate_request(req, jwt_manager).map_err(|_| {
        ServiceError::AuthenticationError(
            "Unauthorized access: missing or invalid token".to_string(),
        )
    })
}
