//! Shared integration test fixtures
//!
//! Spins up the real router against an in-memory SQLite database and
//! provides request helpers plus user seeding utilities.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

use notekeeper::auth::{Identity, Role, TokenCodec};
use notekeeper::routes::create_router;
use notekeeper::server::init::connect_database;
use notekeeper::server::state::AppState;
use notekeeper::users::model::create_user;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Low bcrypt cost to keep seeding fast; registration through the API
/// still uses the production cost.
const TEST_BCRYPT_COST: u32 = 4;

/// A running application over an in-memory database
pub struct TestApp {
    router: Router,
    /// Direct pool access for seeding and assertions
    pub pool: SqlitePool,
    /// Codec sharing the app's secret, for issuing and verifying tokens
    pub codec: TokenCodec,
}

/// Buffered response: status, headers, parsed JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed body; `Value::Null` when empty or not JSON
    pub body: Value,
}

impl TestResponse {
    /// The `error` field of an error body
    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// A seeded user with a valid token
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestApp {
    /// Build a fresh app over its own in-memory database
    pub async fn spawn() -> Self {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let codec = TokenCodec::new(TEST_SECRET, 3600);
        let state = AppState::new(pool.clone(), codec.clone());

        Self {
            router: create_router(state),
            pool,
            codec,
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, path, token, None).await
    }

    /// Seed a regular user directly in the database
    pub async fn seed_user(&self, name: &str, email: &str, password: &str) -> TestUser {
        let hash = bcrypt::hash(password, TEST_BCRYPT_COST).unwrap();
        let user = create_user(&self.pool, name, email, &hash).await.unwrap();
        let token = self
            .codec
            .issue(&Identity {
                id: user.id,
                role: Role::User,
            })
            .unwrap();

        TestUser {
            id: user.id,
            email: user.email,
            token,
        }
    }

    /// Seed an admin user directly in the database
    pub async fn seed_admin(&self, name: &str, email: &str, password: &str) -> TestUser {
        let hash = bcrypt::hash(password, TEST_BCRYPT_COST).unwrap();
        let user = create_user(&self.pool, name, email, &hash).await.unwrap();

        sqlx::query("UPDATE users SET role = 'admin' WHERE id = ?")
            .bind(user.id)
            .execute(&self.pool)
            .await
            .unwrap();

        let token = self
            .codec
            .issue(&Identity {
                id: user.id,
                role: Role::Admin,
            })
            .unwrap();

        TestUser {
            id: user.id,
            email: user.email,
            token,
        }
    }
}
