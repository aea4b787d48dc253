// tests/e2e_contact_and_dashboard.rs
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use showcase_cms::domain::user::Role;

mod support;

use support::{request, send, token_for};

async fn submit(router: &axum::Router, name: &str, email: &str) -> (StatusCode, Value) {
    send(
        router,
        request(
            Method::POST,
            "/api/v1/contact",
            None,
            Some(json!({
                "name": name,
                "email": email,
                "subject": "New project",
                "message": "We would like a new website."
            })),
        ),
    )
    .await
}

#[tokio::test]
async fn visitors_can_submit_and_admins_triage() {
    let app = support::build_test_app().await;

    let (status, receipt) = submit(&app.router, "Ada", "Ada@Example.com").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(!receipt["reference"].as_str().unwrap().is_empty());
    submit(&app.router, "Grace", "grace@example.org").await;

    let admin = token_for(Role::Admin).await;
    let (status, inbox) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/contact-messages", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inbox["total_count"], 2);
    // Newest first.
    assert_eq!(inbox["items"][0]["name"], "Grace");
    assert_eq!(inbox["items"][1]["email"], "ada@example.com");

    let ada_id = inbox["items"][1]["id"].as_i64().unwrap();
    let (status, marked) = send(
        &app.router,
        request(
            Method::POST,
            &format!("/api/v1/admin/contact-messages/{ada_id}/read"),
            Some(&admin),
            Some(json!({ "read": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(marked["is_read"], true);

    let (_, unread) = send(
        &app.router,
        request(
            Method::GET,
            "/api/v1/admin/contact-messages?unread_only=true",
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(unread["total_count"], 1);
    assert_eq!(unread["items"][0]["name"], "Grace");
}

#[tokio::test]
async fn invalid_contact_submissions_are_rejected() {
    let app = support::make_test_router().await;
    let (status, body) = submit(&app, "Ada", "not-an-email").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));

    let (status, _) = submit(&app, "   ", "ada@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inbox_needs_contacts_permissions() {
    let app = support::build_test_app().await;
    submit(&app.router, "Ada", "ada@example.com").await;

    let viewer = token_for(Role::Viewer).await;
    let (status, _) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/contact-messages", Some(&viewer), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Editors read the inbox but cannot delete from it.
    let editor = token_for(Role::Editor).await;
    let (status, _) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/contact-messages/1", Some(&editor), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app.router,
        request(Method::DELETE, "/api/v1/admin/contact-messages/1", Some(&editor), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = token_for(Role::Admin).await;
    let (status, _) = send(
        &app.router,
        request(Method::DELETE, "/api/v1/admin/contact-messages/1", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/contact-messages/1", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_sections_follow_permissions() {
    let app = support::build_test_app().await;
    let admin = token_for(Role::Admin).await;
    support::create_content(
        &app.router,
        &admin,
        json!({ "kind": "service", "title": "Draft Service" }),
    )
    .await;
    support::create_content(
        &app.router,
        &admin,
        json!({ "kind": "service", "title": "Live Service", "publish": true }),
    )
    .await;
    submit(&app.router, "Ada", "ada@example.com").await;
    app.settle().await;

    let (status, dashboard) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/dashboard", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["greeting"], "Welcome back, admin-tester");
    let services = dashboard["summary"]["content"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["kind"] == "service")
        .cloned()
        .unwrap();
    assert_eq!(services["total"], 2);
    assert_eq!(services["drafts"], 1);
    assert_eq!(dashboard["summary"]["unread_contact_messages"], 1);

    let section_keys: Vec<&str> = dashboard["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(section_keys, ["content", "contact-messages"]);
    assert_eq!(dashboard["quick_actions"].as_array().unwrap().len(), 3);

    let viewer = token_for(Role::Viewer).await;
    let (status, limited) = send(
        &app.router,
        request(Method::GET, "/api/v1/admin/dashboard", Some(&viewer), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(limited["sections"].as_array().unwrap().len(), 1);
    assert!(limited["quick_actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn first_account_becomes_admin_and_can_log_in() {
    let app = support::make_test_router().await;

    let (status, user) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "username": "owner", "password": "correct horse" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["role"], "admin");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "username": "intruder", "password": "correct horse" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "owner", "password": "wrong password" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, login) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "owner", "password": "correct horse" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"]["token"].as_str().unwrap().to_string();

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/auth/register",
            Some(&token),
            Some(json!({ "username": "writer", "password": "pen and paper", "role": "editor" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "editor");
}
