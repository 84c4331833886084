use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitalog::api::routes::create_router;
use vitalog::api::AppState;
use vitalog::config::Config;
use vitalog::db::{Database, DatabaseBackend, LibSqlBackend};
use vitalog::llm::LlmProvider;

#[derive(Parser)]
#[command(name = "vitalog")]
#[command(about = "Health diary backend with AI metric extraction and weekly analytics")]
struct Args {
    /// Bind host, overriding VITALOG_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding VITALOG_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalog=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.server.api_keys.is_empty() {
        tracing::warn!(
            "VITALOG_API_KEYS is not set - protected endpoints are locked. Set VITALOG_API_KEYS to enable access."
        );
    }

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let db_backend = LibSqlBackend::new(raw_db);
    let db: Arc<dyn DatabaseBackend> = Arc::new(db_backend);

    if let Some(llm_config) = &config.llm {
        tracing::info!("Initializing LLM provider: {}...", llm_config.model);
    }
    let llm = LlmProvider::new(config.llm.as_ref());
    if !llm.is_available() {
        tracing::warn!(
            "LLM unavailable - metric extraction and AI insights will fall back to placeholders"
        );
    }

    let state = AppState::new(config.clone(), db, llm);

    let cancel_token = CancellationToken::new();

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Vitalog starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down...");
    cancel_token.cancel();
}
