use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tacocloud_web::{
    config::{Args, WebConfig},
    create_router,
    session::cleanup_task,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "tacocloud_web={log_filter},tacocloud_core={log_filter},tower_http=info"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: WebConfig = args.into();
    let listen_addr = config.listen_addr();
    let base_url = config.base_url();

    let state = AppState::new(&config)?;

    // Start session cleanup background task
    let cleanup_store = state.sessions.clone();
    let cleanup_interval = config.cleanup_interval;
    tokio::spawn(async move {
        cleanup_task(cleanup_store, cleanup_interval).await;
    });

    let app = create_router(state);
    let listener = TcpListener::bind(&listen_addr).await?;

    tracing::info!("Taco Cloud starting on {}", base_url);
    tracing::info!("Design your taco at {}/design", base_url);
    tracing::info!(
        max_sessions = config.max_sessions,
        session_timeout_secs = config.session_timeout.as_secs(),
        "Session store ready"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
