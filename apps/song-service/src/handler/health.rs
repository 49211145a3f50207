//! # ヘルスチェックハンドラ
//!
//! - `GET /health` - プロセスの稼働確認（liveness）
//! - `GET /health/ready` - データベース疎通を含む稼働確認（readiness）

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use songbook_infra::db;
use songbook_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::PgPool;

/// Readiness Check の共有状態
pub struct ReadinessState {
    pub pool: PgPool,
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check エンドポイント
///
/// データベースに到達できなければ `503 Service Unavailable`。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database = match db::ping(&state.pool).await {
        Ok(()) => CheckStatus::Ok,
        Err(_) => CheckStatus::Error,
    };

    let response = ReadinessResponse::from_checks(HashMap::from([(
        "database".to_string(),
        database,
    )]));
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{Router, body::Body, http::Request, routing::get};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use tower::ServiceExt;

    use super::*;

    /// 接続を拒否するポートを指す遅延プール（接続は acquire 時まで行わない）
    fn unreachable_pool() -> PgPool {
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("songbook")
            .database("songbook");
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(options)
    }

    #[tokio::test]
    async fn test_readiness_check_dbに到達できなければ503() {
        // Given
        let state = Arc::new(ReadinessState {
            pool: unreachable_pool(),
        });
        let sut = Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(state);

        // When
        let response = sut
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            json!({
                "status": "not_ready",
                "checks": { "database": "error" }
            })
        );
    }
}
