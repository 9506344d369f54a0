use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

// Schema initialization drops and recreates the resume and projects tables,
// so everything runs in one sequential test to keep the database consistent.
#[actix_web::test]
async fn test_crud_cycle_against_database() {
    let Some(test_app) = TestApp::with_database().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping database tests");
        return;
    };
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token();

    // Seeded profile is readable without a token.
    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: serde_json::Value = test::read_body_json(resp).await;
    assert!(profile["name"].is_string());
    assert!(profile["email"].is_string());

    // Login against the seeded admin account.
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "admin_id": "admin", "password": "admin123!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(login["success"], true);
    assert!(login["token"].is_string());

    // Wrong password against the stored hash is rejected.
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "admin_id": "admin", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid admin ID or password");

    // Change-password with a wrong current password is a 400 and leaves the
    // stored hash untouched: the original password still logs in.
    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "admin_id": "admin",
            "currentPassword": "not-the-password",
            "newPassword": "newpassword123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Current password is incorrect");

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "admin_id": "admin", "password": "admin123!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Visitor counter increments by exactly one.
    let req = test::TestRequest::get()
        .uri("/api/visitor-count")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let before: serde_json::Value = test::read_body_json(resp).await;
    let before = before["count"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/visitor-count")
        .set_json(json!({ "increment": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let after: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(after["count"].as_i64().unwrap(), before + 1);

    // Skill create, update, delete.
    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "name": "Rust", "proficiency": 90, "type": "technical" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let skill_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/skills/{}", skill_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "name": "Rust", "proficiency": 95, "type": "technical" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["proficiency"].as_i64().unwrap(), 95);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{}", skill_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Deleting the same row again is a 404.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{}", skill_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Project create then fetch by id.
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "title": "Test Project",
            "description": "Built for the integration suite",
            "image": "/Uploads/test.png",
            "github": "https://github.com/example/test",
            "demo": "https://example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let project_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", project_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched["title"], "Test Project");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/projects/{}", project_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Education create with "Present", then update and delete.
    let req = test::TestRequest::post()
        .uri("/api/education")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "degree": "MSc",
            "start_year": "2023",
            "end_year": "Present",
            "institution": "Test University",
            "description": "ongoing"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let education_id = created["id"].as_i64().unwrap();
    assert_eq!(created["end_year"], "Present");

    let req = test::TestRequest::put()
        .uri(&format!("/api/education/{}", education_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "degree": "MSc",
            "start_year": "2023",
            "end_year": "2025",
            "institution": "Test University",
            "description": "finished"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/education/{}", education_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Resume summary upserts onto the single row.
    let req = test::TestRequest::put()
        .uri("/api/resume")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "name": "Abhay Chaudhary",
            "profession": "Backend Engineer",
            "bio": "Ships things",
            "city": "Delhi",
            "phone": "+911234567890",
            "email": "abhay@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/resume").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let summary: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(summary["profession"], "Backend Engineer");

    // Contact submission from a visitor, then admin cleanup.
    let req = test::TestRequest::post()
        .uri("/api/contact-submissions")
        .set_json(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "subject": "Hi",
            "message": "Nice site"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let submission_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/contact-submissions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let submissions: serde_json::Value = test::read_body_json(resp).await;
    assert!(submissions
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_i64() == Some(submission_id)));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/contact-submissions/{}", submission_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Profile update carries the social links in the same request.
    let req = test::TestRequest::get()
        .uri("/api/social-links/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let links: serde_json::Value = test::read_body_json(resp).await;
    let first_link = &links.as_array().unwrap()[0];

    let req = test::TestRequest::put()
        .uri("/api/profile/1")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "name": profile["name"],
            "bio": "Updated bio",
            "header_profile_picture": profile["header_profile_picture"],
            "about_profile_picture": profile["about_profile_picture"],
            "email": profile["email"],
            "phone": profile["phone"],
            "location": profile["location"],
            "linkedin": profile["linkedin"],
            "age": profile["age"],
            "about_footer": profile["about_footer"],
            "social_links": [{
                "id": first_link["id"],
                "platform": first_link["platform"],
                "url": "https://example.com/updated"
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["success"], true);

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;
    let reread: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(reread["bio"], "Updated bio");

    let req = test::TestRequest::get()
        .uri("/api/social-links/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let links: serde_json::Value = test::read_body_json(resp).await;
    assert!(links
        .as_array()
        .unwrap()
        .iter()
        .any(|l| l["url"] == "https://example.com/updated"));
}
