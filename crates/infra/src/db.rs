//! # PostgreSQL データベース接続管理
//!
//! データベース接続プールの作成と管理を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 起動時に一度だけ作成し、リポジトリに渡して共有する
//! - **タイムアウト**: 接続取得とステートメント実行の両方に上限を設ける。
//!   ストア呼び出しが無期限にブロックすることはない
//! - **リトライなし**: 失敗はそのまま呼び出し元に返す
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use songbook_infra::db::{self, DatabaseConfig};
//!
//! let config = DatabaseConfig {
//!     host:     "localhost".to_string(),
//!     port:     5432,
//!     user:     "songbook".to_string(),
//!     password: "songbook".to_string(),
//!     name:     "songbook".to_string(),
//! };
//! let pool = db::create_pool(&config).await?;
//! db::ping(&pool).await?;
//! ```

use std::{fmt, time::Duration};

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::error::InfraError;

/// 最大接続数
const MAX_CONNECTIONS: u32 = 10;

/// プールからの接続取得タイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// 1 ステートメントの実行上限（PostgreSQL の `statement_timeout`）
const STATEMENT_TIMEOUT: &str = "5s";

/// データベース接続パラメータ
///
/// 環境変数 `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME` から組み立てられる。
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host:     String,
    pub port:     u16,
    pub user:     String,
    pub password: String,
    pub name:     String,
}

impl DatabaseConfig {
    /// sqlx の接続オプションに変換する
    ///
    /// SSL は無効（`sslmode=disable`）。
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
            .options([("statement_timeout", STATEMENT_TIMEOUT)])
    }
}

// パスワードをログに出さない
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

/// プール設定を返す
pub fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出す。
/// 接続失敗・認証エラーは `sqlx::Error` として返す（パニックしない）。
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options().connect_with(config.connect_options()).await
}

/// データベースマイグレーションを実行する
///
/// `migrations/` の SQL を埋め込み、未適用のものだけを順に適用する。
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// データベースへの疎通を確認する
#[tracing::instrument(skip_all, err)]
pub async fn ping(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}
