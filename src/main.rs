use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use stuttee_backend::{
    config::{get_config, init_config},
    routes, AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();
    {
        let provider = app_state.quiz_service.provider();
        info!(
            "Quiz provider: {} (model: {})",
            provider.name(),
            provider.model()
        );
    }

    let app = routes::router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Stuttee backend listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
