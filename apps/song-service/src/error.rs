//! # Song Service エラー定義
//!
//! Song Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | HTTP ステータス | ログ |
//! |-----------|----------------|------|
//! | `BadRequest` / `Validation` | 400 | なし（クライアント起因） |
//! | `NotFound` | 404 | なし |
//! | `Database` | 500 | `error` レベル |
//!
//! すべての失敗はハンドラ境界でこの型に変換され、HTTP ステータスを持たないまま
//! 外に漏れることはない。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use songbook_domain::DomainError;
use songbook_infra::InfraError;
use songbook_shared::ErrorResponse;
use thiserror::Error;

/// Song Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 不正なリクエスト（JSON 構文、数値として解釈できないパラメータ等）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 入力値の検証エラー（必須フィールド欠落・空文字）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CoreError::Validation(msg),
            err @ DomainError::NotFound { .. } => CoreError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            CoreError::Validation(msg) => ErrorResponse::validation_error(msg.clone()),
            CoreError::Database(e) => {
                tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
