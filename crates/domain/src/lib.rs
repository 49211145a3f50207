//! # Songbook ドメイン層
//!
//! 楽曲カタログのドメインモデルと、歌詞テキストに対する純粋なロジックを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つ楽曲（[`song::Song`]）
//! - **値オブジェクト**: 生成時に検証される必須フィールド（タイトル、アーティスト等）
//! - **純粋関数**: ページネーション解決と歌詞の節分割は I/O を持たない
//!
//! ## 依存関係の方向
//!
//! ```text
//! song-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`song`] - 楽曲エンティティと値オブジェクト
//! - [`pagination`] - ページ番号・件数の正規化とスライス範囲計算
//! - [`verse`] - 歌詞テキストの節分割
//!
//! ## 使用例
//!
//! ```rust
//! use songbook_domain::{pagination::Pagination, verse::verses};
//!
//! let text = "A\n\nB\n\nC";
//! let all: Vec<&str> = verses(text).collect();
//! let page = Pagination::resolve(Some(2), Some(2));
//! assert_eq!(page.slice(&all), ["C"]);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod pagination;
pub mod song;
pub mod verse;

pub use error::DomainError;
