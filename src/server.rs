use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::state::AppState;

/// Build the application state and Axum router from a [`Config`].
pub fn build_app(config: Config) -> (AppState, Router) {
    let body_limit = config.body_limit;
    let state = AppState::new(config);

    let app = Router::new()
        .merge(handlers::routes())
        .fallback(handlers::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (state, app)
}

/// Bind the router to `host:port` and spawn the server as a tokio task.
///
/// Returns the actual port the server bound to (useful when `port` is 0 for
/// OS-assigned ports) and a [`JoinHandle`] for the server task.
pub async fn serve(
    app: Router,
    host: &str,
    port: u16,
) -> std::io::Result<(u16, JoinHandle<std::io::Result<()>>)> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();

    let handle = tokio::spawn(async move { axum::serve(listener, app).await });

    Ok((actual_port, handle))
}
