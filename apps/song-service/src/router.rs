//! # ルーター
//!
//! 楽曲 API とヘルスチェックのルートを登録する。
//! データベースを必要とする readiness ルートとトレースレイヤーは `main` で追加する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::handler::{
    SongState,
    create_song,
    delete_song,
    get_song_text,
    health_check,
    list_songs,
    update_song,
};

/// 楽曲 API のルーターを構築する
pub fn build_router(song_state: Arc<SongState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/songs", get(list_songs).post(create_song))
        .route("/songs/{id}/text", get(get_song_text))
        .route("/songs/{id}", put(update_song).delete(delete_song))
        .with_state(song_state)
}
