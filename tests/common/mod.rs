//! Common test utilities

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tavola_core::config::{Config, JwtConfig, ValidationConfig};
use tavola_core::server::{build_router, build_state, AppState};
use tower::ServiceExt;

/// A router over fresh in-memory state, driven with `oneshot` requests.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let config = Config {
            http_host: "127.0.0.1".to_string(),
            http_port: 0,
            jwt: JwtConfig {
                secret: "test-secret-key-for-jwt-signing-must-be-long".to_string(),
                access_token_ttl_secs: 3600,
            },
            validation: ValidationConfig::default(),
        };
        let state = build_state(config);
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Send a request and return (status, parsed JSON body).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Register a user and return the created user JSON.
    #[allow(dead_code)]
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/register",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["data"].clone()
    }

    /// Log in and return the bearer token.
    #[allow(dead_code)]
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Register + login in one go.
    #[allow(dead_code)]
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        self.register(email, password).await;
        self.login(email, password).await
    }

    /// Change a user's role via the admin endpoint.
    #[allow(dead_code)]
    pub async fn change_role(&self, admin_token: &str, user_id: &str, role: &str) {
        let (status, body) = self
            .request(
                "POST",
                &format!("/Users/changeRole/{user_id}"),
                Some(admin_token),
                Some(json!({ "role": role })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "changeRole failed: {body}");
    }
}
