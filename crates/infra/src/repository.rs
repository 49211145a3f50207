//! # リポジトリ実装
//!
//! ハンドラ層が利用する永続化インターフェースとその PostgreSQL 実装。
//!
//! - **1 メソッド = 1 ステートメント**: 複数ステートメントにまたがる
//!   トランザクションは張らない。原子性はストアのステートメント単位の保証に委ねる
//! - **テスタビリティ**: トレイト経由でモック可能

pub mod song_repository;

pub use song_repository::{PostgresSongRepository, SongRepository};
