use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_admin_put_without_token_is_unauthorized() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/resume")
        .set_json(json!({
            "name": "Abhay",
            "profession": "Developer",
            "bio": "b",
            "city": "Delhi",
            "phone": "123",
            "email": "a@b.c"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Unauthorized access"));
}

#[actix_web::test]
async fn test_admin_post_with_garbage_token_is_unauthorized() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .set_json(json!({
            "name": "Rust",
            "proficiency": 90,
            "type": "technical"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let foreign = portfolio_api::auth::JwtManager::new("some-other-secret");
    let token = foreign.generate_token("admin").unwrap();

    let req = test::TestRequest::delete()
        .uri("/api/projects/1")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_identity_headers_alone_do_not_authenticate() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::delete()
        .uri("/api/testimonials/1")
        .insert_header(("x-admin-logged-in", "true"))
        .insert_header(("x-admin-id", "admin"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_with_missing_fields_is_bad_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "admin_id": "admin" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_change_password_requires_token_before_validation() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // Short password would be a 400, but the gate runs first.
    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .set_json(json!({
            "admin_id": "admin",
            "currentPassword": "admin123!",
            "newPassword": "short"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_change_password_rejects_short_password_with_valid_token() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "admin_id": "admin",
            "currentPassword": "admin123!",
            "newPassword": "short"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("at least 8 characters"));
}

#[actix_web::test]
async fn test_public_read_endpoints_do_not_require_token() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // Lazy pool with no server behind it: a public route that reaches the
    // database must fail with a 500, never a 401.
    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
