//! # Song Service サーバー
//!
//! 楽曲（タイトル・アーティスト・歌詞など）を管理する REST API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | `GET` | `/health` | liveness |
//! | `GET` | `/health/ready` | readiness（DB 疎通確認） |
//! | `GET` | `/songs` | 楽曲一覧 |
//! | `GET` | `/songs/{id}/text` | 歌詞の節 |
//! | `POST` | `/songs` | 楽曲作成 |
//! | `PUT` | `/songs/{id}` | 楽曲更新 |
//! | `DELETE` | `/songs/{id}` | 楽曲削除 |
//!
//! ## 環境変数
//!
//! 設定項目は [`SongServiceConfig::from_env`] を参照。
//! ログは `RUST_LOG` でフィルタし、`LOG_FORMAT=json` で JSON 出力に切り替える。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! cargo run -p songbook-song-service
//!
//! # 本番環境
//! DB_HOST=db DB_USER=app DB_PASSWORD=... DB_NAME=songbook \
//!     cargo run -p songbook-song-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use songbook_infra::{
    db,
    repository::{PostgresSongRepository, SongRepository},
};
use songbook_shared::observability::{LogFormat, init_tracing};
use songbook_song_service::{
    config::SongServiceConfig,
    handler::{ReadinessState, SongState, readiness_check},
    router::build_router,
    usecase::SongUseCaseImpl,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(LogFormat::from_env());
    let _span = tracing::info_span!("app", service = "song-service").entered();

    // 設定読み込み
    let config = SongServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Song Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool)
            .await
            .context("マイグレーションの適用に失敗しました")?;
        tracing::info!("マイグレーションを適用しました");
    }

    // 依存コンポーネントを初期化
    let song_repository: Arc<dyn SongRepository> =
        Arc::new(PostgresSongRepository::new(pool.clone()));
    let song_state = Arc::new(SongState {
        usecase: SongUseCaseImpl::new(song_repository),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    // ルーター構築
    let app = build_router(song_state)
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Song Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await.context("サーバーが異常終了しました")?;

    Ok(())
}
