pub mod handlers;
pub mod profile;
pub mod response;

use crate::adapters::HttpGateway;
use crate::config::toml_config::ServiceConfig;
use crate::core::service::MeasurementService;
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use profile::RouteProfile;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Mounts one `POST` route per category of `profile`, plus `GET /health`.
pub fn router(service: Arc<MeasurementService>, profile: RouteProfile) -> Router {
    let mut router = Router::new().route("/health", get(handlers::health));

    for &category in profile.categories() {
        let path = profile.path(category);
        tracing::debug!("Mounting POST {}", path);
        router = router.route(
            &path,
            post(move |State(state): State<AppState>, body: Bytes| {
                handlers::measure(state, category, body)
            }),
        );
    }

    router.with_state(AppState { service, profile })
}

/// Wires the HTTP gateway and upstream table from `config` into a ready router.
pub fn build_router(config: &ServiceConfig) -> Result<Router> {
    let gateway = HttpGateway::new(config.upstream.timeout_seconds)?;
    let service = MeasurementService::new(Arc::new(gateway), config.upstream.clone());
    Ok(router(Arc::new(service), config.server.profile))
}

/// Binds `config.server.bind` and serves until `shutdown` resolves.
pub async fn serve<F>(config: &ServiceConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(config)?;
    let listener = TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        "🚀 Listening on {} ({:?} routes)",
        listener.local_addr()?,
        config.server.profile
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
