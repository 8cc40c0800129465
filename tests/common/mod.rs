#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;
use std::sync::Arc;

use taskdesk::auth::{AuthMiddleware, TokenService};
use taskdesk::error::AppError;
use taskdesk::repository::memory::{MemoryTaskRepository, MemoryUserRepository};
use taskdesk::routes;
use taskdesk::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// App state backed by the in-memory repositories, with direct handles kept
/// so tests can inspect storage.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<MemoryUserRepository>,
    pub tasks: Arc<MemoryTaskRepository>,
}

pub fn test_context() -> TestContext {
    test_context_with_ttl(30)
}

pub fn test_context_with_ttl(ttl_minutes: i64) -> TestContext {
    let users = Arc::new(MemoryUserRepository::new());
    let tasks = Arc::new(MemoryTaskRepository::new());
    let state = AppState {
        users: users.clone(),
        tasks: tasks.clone(),
        tokens: TokenService::with_secret(TEST_SECRET, ttl_minutes),
    };
    TestContext {
        state,
        users,
        tasks,
    }
}

/// Builds the app the same way `main.rs` does, minus CORS and request
/// logging.
pub async fn init_app(
    state: &AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            ),
    )
    .await
}

/// Drives a request through the service and collapses the outcome to
/// `(status, json body)`. Middleware rejections surface as `Err` from the
/// service under `init_service`, so they are converted through the error's
/// response here.
pub async fn send(
    app: &impl Service<
        Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    req: Request,
) -> (StatusCode, serde_json::Value) {
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status();
            let body = test::read_body(resp).await;
            let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
            (status, json)
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = actix_web::body::to_bytes(resp.into_body())
                .await
                .expect("error response body");
            let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
            (status, json)
        }
    }
}

pub async fn register_user(
    app: &impl Service<
        Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    email: &str,
    password: &str,
) -> (StatusCode, serde_json::Value) {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": username,
            "email": email,
            "password": password
        }))
        .to_request();
    send(app, req).await
}

pub async fn login_user(
    app: &impl Service<
        Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> (StatusCode, serde_json::Value) {
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username": username,
            "password": password
        }))
        .to_request();
    send(app, req).await
}

/// Registers and logs in, returning the bearer token.
pub async fn register_and_login(
    app: &impl Service<
        Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    email: &str,
    password: &str,
) -> String {
    let (status, body) = register_user(app, username, email, password).await;
    assert!(
        status.is_success(),
        "registration failed: {} {:?}",
        status,
        body
    );
    let (status, body) = login_user(app, username, password).await;
    assert!(status.is_success(), "login failed: {} {:?}", status, body);
    body["access_token"]
        .as_str()
        .expect("access_token in login response")
        .to_string()
}
