//! # Observability 基盤
//!
//! tracing subscriber の初期化。出力形式は環境変数 `LOG_FORMAT`（`json` / `pretty`）、
//! レベルは `RUST_LOG` で切り替える。

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON（ログ収集基盤向け）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値からログ形式を決める
    ///
    /// 未設定は `Pretty`。不明な値も `Pretty` にするが、subscriber 初期化前なので
    /// 警告は stderr に直接書く。
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            None | Some("pretty") => Self::Pretty,
            Some(other) => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// グローバル subscriber を登録する
///
/// `RUST_LOG` 未設定時のフィルタは `info,songbook=debug`。
/// `ErrorLayer` を重ねるので `InfraError` の `SpanTrace` に呼び出し経路が残る。
#[cfg(feature = "observability")]
pub fn init_tracing(log_format: LogFormat) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,songbook=debug"));

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
