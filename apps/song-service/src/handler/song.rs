//! # 楽曲ハンドラ
//!
//! 楽曲 CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /songs` - 楽曲一覧（`page`, `limit`）
//! - `GET /songs/{id}/text` - 歌詞の節（`page`, `limit`）
//! - `POST /songs` - 楽曲作成
//! - `PUT /songs/{id}` - 楽曲更新（全フィールド上書き）
//! - `DELETE /songs/{id}` - 楽曲削除
//!
//! 抽出器の失敗（JSON 構文、数値でないクエリ・パス）は axum の既定の
//! ステータスではなく、すべて `400 Bad Request` の Problem Details にする。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use songbook_domain::{
    pagination::Pagination,
    song::{NewSong, Song, SongId},
};
use songbook_shared::MessageResponse;
use validator::Validate;

use crate::{error::CoreError, usecase::SongUseCaseImpl};


/// 楽曲 API の共有状態
pub struct SongState {
    pub usecase: SongUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ページネーションクエリパラメータ
///
/// 未指定・空文字（`?page=`）・0 以下はデフォルト値に解決される（[`Pagination::resolve`]）。
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page:  Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

impl PaginationQuery {
    fn resolve(&self) -> Pagination {
        Pagination::resolve(self.page, self.limit)
    }
}

/// 空文字のクエリ値を未指定として読む
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// 楽曲作成・更新リクエスト
///
/// 必須フィールドが欠けている場合は空文字として受け取り、検証で弾く。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "タイトルは必須です"))]
    pub title:        String,
    #[serde(default)]
    #[validate(length(min = 1, message = "アーティストは必須です"))]
    pub artist:       String,
    #[serde(default)]
    #[validate(length(min = 1, message = "リリース日は必須です"))]
    pub release_date: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "歌詞は必須です"))]
    pub text:         String,
    #[serde(default)]
    #[validate(length(min = 1, message = "リンクは必須です"))]
    pub link:         String,
    #[serde(default)]
    pub group_name:   Option<String>,
}

impl SongRequest {
    /// 検証してドメインの楽曲データに変換する
    fn into_new_song(self) -> Result<NewSong, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(NewSong::new(
            self.title,
            self.artist,
            self.release_date,
            self.text,
            self.link,
            self.group_name,
        )?)
    }
}

/// 楽曲 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id:           i64,
    pub title:        String,
    pub artist:       String,
    pub release_date: String,
    pub text:         String,
    pub link:         String,
    pub group_name:   Option<String>,
}

impl From<&Song> for SongDto {
    fn from(song: &Song) -> Self {
        Self {
            id:           song.id().as_i64(),
            title:        song.title().to_string(),
            artist:       song.artist().to_string(),
            release_date: song.release_date().to_string(),
            text:         song.text().to_string(),
            link:         song.link().to_string(),
            group_name:   song.group_name().map(str::to_string),
        }
    }
}

// --- ハンドラ ---

/// GET /songs
///
/// 楽曲一覧を ID 昇順で返す。該当なしでも `200` と空配列。
///
/// ## レスポンス
///
/// - `200 OK`: 楽曲の配列
/// - `400 Bad Request`: `page` / `limit` が整数でない
/// - `500 Internal Server Error`: ストアエラー
#[tracing::instrument(skip_all)]
pub async fn list_songs(
    State(state): State<Arc<SongState>>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(query) = query?;

    let songs = state.usecase.list_songs(query.resolve()).await?;

    let items: Vec<SongDto> = songs.iter().map(SongDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /songs/{id}/text
///
/// 歌詞を空行で節に分割し、指定ページの節を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 節（文字列）の配列。範囲外のページは空配列
/// - `400 Bad Request`: `id` / `page` / `limit` が整数でない
/// - `404 Not Found`: 楽曲が存在しない、または歌詞が空
#[tracing::instrument(skip_all)]
pub async fn get_song_text(
    State(state): State<Arc<SongState>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = id?;
    let Query(query) = query?;

    let verses = state
        .usecase
        .get_song_verses(SongId::from_i64(id), query.resolve())
        .await?;

    Ok((StatusCode::OK, Json(verses)))
}

/// POST /songs
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む楽曲
/// - `400 Bad Request`: JSON 不正、必須フィールド欠落
/// - `500 Internal Server Error`: ストアエラー
#[tracing::instrument(skip_all)]
pub async fn create_song(
    State(state): State<Arc<SongState>>,
    payload: Result<Json<SongRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = payload?;
    let song = req.into_new_song()?;

    let created = state.usecase.create_song(song).await?;

    Ok((StatusCode::CREATED, Json(SongDto::from(&created))))
}

/// PUT /songs/{id}
///
/// 識別子以外の全フィールドを上書きする。
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `400 Bad Request`: JSON 不正、必須フィールド欠落
/// - `404 Not Found`: 楽曲が存在しない
/// - `500 Internal Server Error`: ストアエラー
#[tracing::instrument(skip_all)]
pub async fn update_song(
    State(state): State<Arc<SongState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SongRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let song = req.into_new_song()?;

    state
        .usecase
        .update_song(SongId::from_i64(id), song)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("楽曲を更新しました")),
    ))
}

/// DELETE /songs/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `404 Not Found`: 楽曲が存在しない
/// - `500 Internal Server Error`: ストアエラー
#[tracing::instrument(skip_all)]
pub async fn delete_song(
    State(state): State<Arc<SongState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = id?;

    state.usecase.delete_song(SongId::from_i64(id)).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("楽曲を削除しました")),
    ))
}
