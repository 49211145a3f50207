//! # Song Service 設定
//!
//! 環境変数から Song Service サーバーの設定を読み込む。
//! 読み込みに失敗した場合は起動を中止する（`main` で致命的エラーとして扱う）。

use std::{env, str::FromStr};

use songbook_infra::db::DatabaseConfig;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Song Service サーバーの設定
#[derive(Debug, Clone)]
pub struct SongServiceConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続パラメータ
    pub database:       DatabaseConfig,
    /// 起動時にマイグレーションを適用するか
    pub run_migrations: bool,
}

impl SongServiceConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 必須 | デフォルト |
    /// |--------|------|-----------|
    /// | `SONG_SERVICE_HOST` | No | `0.0.0.0` |
    /// | `SONG_SERVICE_PORT` | No | `8080` |
    /// | `DB_HOST` | **Yes** | |
    /// | `DB_PORT` | No | `5432` |
    /// | `DB_USER` | **Yes** | |
    /// | `DB_PASSWORD` | **Yes** | |
    /// | `DB_NAME` | **Yes** | |
    /// | `RUN_MIGRATIONS` | No | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            host:           lookup("SONG_SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:           parse_or(&lookup, "SONG_SERVICE_PORT", 8080)?,
            database:       DatabaseConfig {
                host:     required("DB_HOST")?,
                port:     parse_or(&lookup, "DB_PORT", 5432)?,
                user:     required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                name:     required("DB_NAME")?,
            },
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", false)?,
        })
    }
}

/// 値があればパースし、無ければデフォルト値を返す
fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
