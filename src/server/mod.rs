pub mod handlers;
pub mod types;

use crate::{Result, config::Config, photos::PhotoResolver};
use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

pub const PHOTOS_ROUTE: &str = "/api/generate-doctor-photos";

pub fn router(state: handlers::AppState, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route(
            PHOTOS_ROUTE,
            get(handlers::list_photos).post(handlers::generate_photos),
        )
        .with_state(state);

    if let Some(dir) = static_dir {
        info!("Serving static pages from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: Config) -> Result<()> {
    let resolver = PhotoResolver::from_config(&config.provider)?;

    let app_state = handlers::AppState {
        resolver: Arc::new(resolver),
    };

    let app = router(app_state, config.server.static_dir.as_deref());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
