#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use pointage_api::auth::session::SessionConfig;
use pointage_api::config::{AdminCredentials, ServerConfig};
use pointage_api::router::build_app_router;
use pointage_api::state::AppState;
use pointage_core::references::ReferencePolicy;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "1234";

/// Build a test `ServerConfig` with safe defaults.
///
/// Any CORS origin is allowed and references are not enforced, matching
/// the production defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path: ":memory:".to_string(),
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "integration-test-secret".to_string(),
            ttl_mins: 60,
        },
        admin: AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
        reference_policy: ReferencePolicy::Permissive,
    }
}

/// Build the full application router over `pool` with the default config.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_config(pool, test_config())
}

/// A second pool over the test database with foreign key enforcement off,
/// the way `pointage_db::create_pool` opens production stores.
pub fn soft_pool(pool: &SqlitePool) -> SqlitePool {
    let options = (*pool.connect_options()).clone().foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}

/// Build the full application router over the test database with a custom
/// config.
pub fn build_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    build_app_on(soft_pool(&pool), config)
}

/// Build the full application router over exactly `pool`.
pub fn build_app_on(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone()).expect("admin password should hash");
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_bearer(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// The `name=value` pair of the response's `Set-Cookie` header.
pub fn cookie_pair(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().trim().to_string()
}

/// Log in as the test admin and return `(cookie pair, token)`.
pub async fn login(app: Router) -> (String, String) {
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let cookie = cookie_pair(&response);
    let json = body_json(response).await;
    let token = json["token"].as_str().unwrap().to_string();
    (cookie, token)
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn employee_json(id: &str, nom: &str, prenom: &str) -> Value {
    serde_json::json!({
        "id": id,
        "nom": nom,
        "prenom": prenom,
        "type": "hourly",
        "tauxHoraire": 1500.0,
        "createdAt": 1_700_000_000_000_i64,
    })
}

pub fn pointage_json(id: &str, employee_id: &str, timestamp: i64) -> Value {
    serde_json::json!({
        "id": id,
        "employeeId": employee_id,
        "employeeName": format!("Employee {employee_id}"),
        "type": "ARRIVEE",
        "timestamp": timestamp,
        "date": "2024-03-05",
    })
}

pub fn salary_json(id: &str, employee_id: &str, date: i64) -> Value {
    serde_json::json!({
        "id": id,
        "employeeId": employee_id,
        "employeeName": format!("Employee {employee_id}"),
        "type": "salaire",
        "amount": 250000.0,
        "hoursWorked": 160.0,
        "period": "2024-03",
        "date": date,
    })
}
