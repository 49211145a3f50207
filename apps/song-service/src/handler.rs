//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、入力の解釈とレスポンス整形のみを行う

pub mod health;
pub mod song;

pub use health::{ReadinessState, health_check, readiness_check};
pub use song::{SongState, create_song, delete_song, get_song_text, list_songs, update_song};
