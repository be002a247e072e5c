use invoice_dashboard::config::Config;
use invoice_dashboard::error::{AppError, AppResult};
use invoice_dashboard::server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoice_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting invoice-dashboard {} on {}",
        invoice_dashboard::VERSION,
        config.address()
    );

    let host = config.host.clone();
    let port = config.port;
    let (_state, app) = server::build_app(config);

    let (actual_port, handle) = server::serve(app, &host, port).await?;
    tracing::info!("Listening on http://{}:{}", host, actual_port);

    handle
        .await
        .map_err(|e| AppError::Internal(format!("Server task failed: {}", e)))??;

    Ok(())
}
