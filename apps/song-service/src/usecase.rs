//! # ユースケース層
//!
//! ハンドラとリポジトリの間で、ページネーション・節分割・
//! 「見つからない」判定を組み立てる。

pub mod song;

pub use song::SongUseCaseImpl;
