//! Store-backed health endpoint, served at `/health` outside `/api`.

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use std::time::Duration;

use crate::state::AppState;

const MONGO_PING_TIMEOUT: Duration = Duration::from_secs(3);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

/// 200 when MongoDB answers a ping within the timeout, otherwise 503.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let client = state.mongo_client.clone();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            let status = check_health_detailed(&client, MONGO_PING_TIMEOUT).await;
            tracing::debug!(
                healthy = status.healthy,
                response_time_ms = status.response_time_ms,
                "MongoDB ping"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "unhealthy".to_string()))
            }
        }),
    )];

    run_health_checks(&state.config.app, checks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use mongodb::Client;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unreachable_store_reports_503() {
        // Nothing listens on port 1; server selection gives up quickly.
        let url = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";
        let mongo_client = Client::with_uri_str(url).await.unwrap();
        let state = AppState {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::new(url),
                server: ServerConfig::default(),
                environment: Environment::Development,
                items_collection: "items".to_string(),
            },
            db: mongo_client.database("health_test"),
            mongo_client,
        };

        let response = router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
        assert_eq!(body["name"], "items_api");
    }
}
