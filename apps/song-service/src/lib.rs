//! # Song Service ライブラリ
//!
//! 楽曲 CRUD API のユースケース・ハンドラ・ルーターを公開する。
//! バイナリ（`main.rs`）と統合テストの双方から利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod usecase;
