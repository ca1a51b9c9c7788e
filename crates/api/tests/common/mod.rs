#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use kotsadm_api::config::ServerConfig;
use kotsadm_api::router::build_app_router;
use kotsadm_api::state::AppState;
use kotsadm_core::endpoints::EndpointConfig;
use sqlx::PgPool;
use tower::ServiceExt;

pub const SHIP_API_ENDPOINT: &str = "http://kotsadm-api:3000";
pub const API_ADVERTISE_ENDPOINT: &str = "https://kotsadm.example.com";

/// Build a test `ServerConfig` with both preflight endpoints set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        endpoints: EndpointConfig::new(SHIP_API_ENDPOINT, API_ADVERTISE_ENDPOINT),
    }
}

/// Build the full application router over `pool` with the given config.
pub fn build_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState::new(pool, config))
}

/// Build the full application router over `pool` with [`test_config`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with(pool, test_config())
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert one app, one cluster and a downstream version with `status`.
pub async fn seed_version(
    pool: &PgPool,
    app_slug: &str,
    cluster_slug: &str,
    sequence: i32,
    status: &str,
    ignore_permissions: bool,
) {
    sqlx::query(
        "INSERT INTO app (id, name, slug) VALUES ($1, $1, $1)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(app_slug)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO cluster (id, title, slug) VALUES ($1, $1, $1)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(cluster_slug)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO app_downstream_version
            (app_id, cluster_id, sequence, status, preflight_ignore_permissions)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(app_slug)
    .bind(cluster_slug)
    .bind(sequence)
    .bind(status)
    .bind(ignore_permissions)
    .execute(pool)
    .await
    .unwrap();
}
