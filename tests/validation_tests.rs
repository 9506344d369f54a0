use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

async fn put_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::put()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

async fn post_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn test_resume_summary_rejects_blank_field() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = put_json(
        &app,
        "/api/resume",
        &token,
        json!({
            "name": "",
            "profession": "Developer",
            "bio": "b",
            "city": "Delhi",
            "phone": "123",
            "email": "a@b.c"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "All summary fields are required");
}

#[actix_web::test]
async fn test_education_rejects_missing_institution() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/education",
        &token,
        json!({
            "degree": "BSc",
            "start_year": "2015",
            "description": "studied things"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Degree, start year, institution, and description are required"
    );
}

#[actix_web::test]
async fn test_education_rejects_malformed_year() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/education",
        &token,
        json!({
            "degree": "BSc",
            "start_year": "15",
            "end_year": "2019",
            "institution": "University",
            "description": "studied things"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Start year and end year must be valid years or \"Present\""
    );
}

#[actix_web::test]
async fn test_education_accepts_present_as_end_year() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    // Passing validation means the handler reaches the unreachable database,
    // so a 500 here proves "Present" got through the year check.
    let resp = post_json(
        &app,
        "/api/education",
        &token,
        json!({
            "degree": "BSc",
            "start_year": "2021",
            "end_year": "Present",
            "institution": "University",
            "description": "studying things"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_certification_rejects_malformed_issue_date() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/certifications",
        &token,
        json!({
            "title": "Cert",
            "issuer": "Org",
            "issue_date": "March 2024",
            "description": "certified"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Issue date must be in YYYY-MM format");
}

#[actix_web::test]
async fn test_skill_accepts_zero_proficiency() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/skills",
        &token,
        json!({
            "name": "Patience",
            "proficiency": 0,
            "type": "soft"
        }),
    )
    .await;

    // 0 is a legal boundary value; only the unreachable database fails.
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_skill_rejects_out_of_range_proficiency() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/skills",
        &token,
        json!({
            "name": "Rust",
            "proficiency": 101,
            "type": "technical"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Proficiency must be between 0 and 100");
}

#[actix_web::test]
async fn test_skill_rejects_unknown_type() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/skills",
        &token,
        json!({
            "name": "Rust",
            "proficiency": 90,
            "type": "wizardry"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Name, proficiency (0-100), and type (technical/soft) are required"
    );
}

#[actix_web::test]
async fn test_contact_submission_requires_all_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // Public endpoint, no token needed.
    let req = test::TestRequest::post()
        .uri("/api/contact-submissions")
        .set_json(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "subject": "Hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Name, email, subject, and message are required"
    );
}

#[actix_web::test]
async fn test_visitor_increment_requires_flag() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/visitor-count")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Invalid request: increment field required"
    );
}

#[actix_web::test]
async fn test_testimonial_rejects_blank_author() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = post_json(
        &app,
        "/api/testimonials",
        &token,
        json!({
            "content": "Great work",
            "author": "",
            "role": "CEO"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Content, author, and role are required");
}

#[actix_web::test]
async fn test_contact_info_requires_map_url() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    let resp = put_json(
        &app,
        "/api/contact-info",
        &token,
        json!({
            "address": "Somewhere 1",
            "phone": "+1234567890",
            "email": "me@example.com"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Address, phone, email, and mapUrl are required"
    );
}
