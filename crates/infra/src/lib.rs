//! # Songbook インフラ層
//!
//! リレーショナルストアとの I/O を担当する唯一の層（Storage Gateway）。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理（[`db`]）
//! - **リポジトリ実装**: `songs` テーブルへのパラメータ化クエリ（[`repository`]）
//! - **エラー**: ストア起因の失敗を [`InfraError`] に集約（[`error`]）
//!
//! ## 依存関係
//!
//! ```text
//! song-service → infra → domain
//! ```
//!
//! 接続プールはプロセス内のグローバル変数にせず、起動時に作成して
//! リポジトリに渡す。リクエスト間で共有される可変状態はプールのみで、
//! 整合性（ID の一意性、行単位の原子性）はストア自身に委ねる。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use songbook_infra::{db, repository::PostgresSongRepository};
//!
//! let pool = db::create_pool(&database_config).await?;
//! let songs = PostgresSongRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
