mod handlers;
mod state;
mod static_files;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::outlet::OutletClient;
use crate::settings::Settings;

pub fn build_router(settings: &Settings) -> Router {
    let state = Arc::new(AppState {
        client: OutletClient::new(settings.api_base.clone()),
        proximity_radius_km: settings.proximity_radius_km,
    });

    // Every API call refetches upstream; keep browsers from reusing answers.
    let api: Router<Arc<AppState>> = Router::new()
        .route("/api/query", get(handlers::query))
        .route("/api/map", get(handlers::map_view))
        .route("/api/nearby", get(handlers::nearby))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .merge(api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(settings: &Settings) -> std::io::Result<()> {
    let app = build_router(settings);
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Outlet Locator listening on http://{}", addr);
    tracing::info!("Outlet API: {}", settings.api_base);

    axum::serve(listener, app).await
}
