//! # SongRepository
//!
//! `songs` テーブルへのアクセスを担当するリポジトリ。
//!
//! | メソッド | ステートメント | 戻り値 |
//! |---------|---------------|--------|
//! | `find_page` | `SELECT ... ORDER BY id LIMIT/OFFSET` | 行の列 |
//! | `find_text` | `SELECT text ... WHERE id = $1` | 歌詞（行が無ければ `None`） |
//! | `insert` | `INSERT ... RETURNING id` | 採番済みの楽曲 |
//! | `update` | `UPDATE ... WHERE id = $1` | 影響行数 |
//! | `delete` | `DELETE ... WHERE id = $1` | 影響行数 |
//!
//! 一覧は ID 昇順で安定させる。ページ間で挿入が起きた場合に結果がずれるのは許容する。

use async_trait::async_trait;
use songbook_domain::{
    pagination::Pagination,
    song::{NewSong, Song, SongId},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 楽曲リポジトリトレイト
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// ID 昇順で 1 ページ分の楽曲を取得する
    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Song>, InfraError>;

    /// 楽曲の歌詞テキストを取得する
    ///
    /// 行が存在しない場合は `None`。空文字の歌詞は `Some("")` として返す。
    async fn find_text(&self, id: SongId) -> Result<Option<String>, InfraError>;

    /// 楽曲を挿入し、ストアが採番した ID 付きで返す
    async fn insert(&self, song: NewSong) -> Result<Song, InfraError>;

    /// 識別子以外の全フィールドを上書きし、影響行数を返す
    async fn update(&self, id: SongId, song: &NewSong) -> Result<u64, InfraError>;

    /// 楽曲を削除し、影響行数を返す
    async fn delete(&self, id: SongId) -> Result<u64, InfraError>;
}

/// PostgreSQL 実装の SongRepository
#[derive(Debug, Clone)]
pub struct PostgresSongRepository {
    pool: PgPool,
}

impl PostgresSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `songs` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct SongRow {
    id:           i64,
    title:        String,
    artist:       String,
    release_date: String,
    text:         String,
    link:         String,
    group_name:   Option<String>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song::from_db(
            SongId::from_i64(row.id),
            row.title,
            row.artist,
            row.release_date,
            row.text,
            row.link,
            row.group_name,
        )
    }
}

#[async_trait]
impl SongRepository for PostgresSongRepository {
    #[tracing::instrument(skip_all, fields(page = pagination.page(), limit = pagination.limit()))]
    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Song>, InfraError> {
        let rows = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, title, artist, release_date, text, link, group_name
            FROM songs
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Song::from).collect())
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn find_text(&self, id: SongId) -> Result<Option<String>, InfraError> {
        let text = sqlx::query_scalar::<_, String>(
            r#"
            SELECT text
            FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(text)
    }

    #[tracing::instrument(skip_all)]
    async fn insert(&self, song: NewSong) -> Result<Song, InfraError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO songs (title, artist, release_date, text, link, group_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(song.title().as_str())
        .bind(song.artist().as_str())
        .bind(song.release_date().as_str())
        .bind(song.text().as_str())
        .bind(song.link().as_str())
        .bind(song.group_name())
        .fetch_one(&self.pool)
        .await?;

        Ok(song.with_id(SongId::from_i64(id)))
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn update(&self, id: SongId, song: &NewSong) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET title = $2, artist = $3, release_date = $4, text = $5, link = $6, group_name = $7
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(song.title().as_str())
        .bind(song.artist().as_str())
        .bind(song.release_date().as_str())
        .bind(song.text().as_str())
        .bind(song.link().as_str())
        .bind(song.group_name())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn delete(&self, id: SongId) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
