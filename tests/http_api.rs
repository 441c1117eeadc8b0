mod common;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use streamview_server::server::http::configure_routes;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn register_then_me_roundtrip() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": "Pw1!"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["subscription_plan"], "free");
    // The credential hash never leaves the server
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn duplicate_registration_is_a_conflict() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": "Pw1!"}))
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": "Other1!"}))
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body["detail"], "Email already registered");
}

#[actix_web::test]
async fn login_failures_share_status_and_body() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": "Pw1!"}))
            .to_request(),
    )
    .await;

    let wrong_password = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "a@x.com", "password": "nope"}))
            .to_request(),
    )
    .await;
    let unknown_email = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "b@x.com", "password": "nope"}))
            .to_request(),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let body_a: Value = test::read_body_json(wrong_password).await;
    let body_b: Value = test::read_body_json(unknown_email).await;
    assert_eq!(body_a, body_b);
}

#[actix_web::test]
async fn protected_routes_require_a_token() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/auth/me").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", "Bearer not-a-real-token"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn invalid_registration_payload_is_rejected() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "not-an-email", "password": "Pw1!"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": ""}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn profile_and_watchlist_flow() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"email": "a@x.com", "password": "Pw1!"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    let auth = ("Authorization", format!("Bearer {}", token));

    // Create a profile
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/profiles")
            .insert_header(auth.clone())
            .set_json(json!({"name": "Kids", "is_kids": true}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: Value = test::read_body_json(resp).await;
    let profile_id = profile["id"].as_str().unwrap().to_string();
    assert_eq!(profile["is_kids"], true);

    // Listing shows it
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profiles")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    let profiles: Value = test::read_body_json(resp).await;
    assert_eq!(profiles.as_array().unwrap().len(), 1);

    // Add to watchlist, twice; second add reports the duplicate
    let add_uri = format!("/api/watchlist?profile_id={}", profile_id);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&add_uri)
            .insert_header(auth.clone())
            .set_json(json!({"tmdb_id": 550, "media_type": "movie"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Added to watchlist");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&add_uri)
            .insert_header(auth.clone())
            .set_json(json!({"tmdb_id": 550, "media_type": "movie"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Already in watchlist");

    // Record and read back watch history
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/watch-history?profile_id={}", profile_id))
            .insert_header(auth.clone())
            .set_json(json!({
                "tmdb_id": 550,
                "media_type": "movie",
                "position": 1200,
                "duration": 8340
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/watch-history?profile_id={}", profile_id))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    let history: Value = test::read_body_json(resp).await;
    assert_eq!(history[0]["position"], 1200);

    // Remove from watchlist
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/watchlist/550?profile_id={}", profile_id))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&add_uri)
            .insert_header(auth)
            .to_request(),
    )
    .await;
    let items: Value = test::read_body_json(resp).await;
    assert!(items.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn health_endpoint_serves() {
    let state = common::app_state_with_memory();
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "SERVING");
}
