//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use songbook_domain::song::{NewSong, SongId};
use sqlx::PgPool;

/// デフォルト値で NewSong を作成
pub fn new_song(title: &str) -> NewSong {
    NewSong::new(
        title,
        "Muse",
        "16.07.2006",
        "Ooh baby, don't you know I suffer?\n\nOoh you set my soul alight",
        "https://www.youtube.com/watch?v=Xsp3_a-PMTw",
        None,
    )
    .unwrap()
}

/// 検証を経ずに行を直接挿入する（空の歌詞など API 経由では作れないデータ用）
pub async fn insert_raw_song(pool: &PgPool, title: &str, text: &str) -> SongId {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO songs (title, artist, release_date, text, link)
        VALUES ($1, 'Artist', '2022-01-01', $2, 'x.com')
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(text)
    .fetch_one(pool)
    .await
    .expect("楽曲の直接挿入に失敗");
    SongId::from_i64(id)
}

/// songs テーブルの行数
pub async fn count_songs(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .expect("行数の取得に失敗")
}
