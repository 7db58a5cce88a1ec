use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::map::MapView;
use crate::outlet::{Coordinates, Outlet};
use crate::proximity::{outlets_within, NearbyOutlet};
use crate::query::{answer, Answer};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/query ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AskQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub answer: Answer,
    pub text: String,
    pub answered_at: DateTime<Utc>,
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AskQuery>,
) -> Result<Json<QueryResponse>, ApiError> {
    let start = Instant::now();
    let query = params.q.unwrap_or_default();

    let outlets = fetch(&state).await?;
    let answer = answer(&query, &outlets);
    let text = answer.render_text();

    tracing::info!(
        "GET /api/query q={:?} -> {} outlets ({:.1}ms)",
        query,
        answer.outlets().len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(QueryResponse {
        query,
        answer,
        text,
        answered_at: Utc::now(),
    }))
}

// ─── GET /api/map ────────────────────────────────────────────────

pub async fn map_view(State(state): State<Arc<AppState>>) -> Result<Json<MapView>, ApiError> {
    let start = Instant::now();
    let outlets = fetch(&state).await?;
    let view = MapView::build(&outlets, state.proximity_radius_km);

    tracing::info!(
        "GET /api/map -> {} markers, {} proximity flags ({:.1}ms)",
        view.markers.len(),
        view.proximity.len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(view))
}

// ─── GET /api/nearby ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
}

pub async fn nearby(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyOutlet>>, ApiError> {
    let start = Instant::now();

    let point = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Provide 'lat' and 'lon' parameters",
            ))
        }
    };
    if !point.in_range() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Invalid coordinates. Lat: -90..90, Lon: -180..180",
        ));
    }

    let radius = params.radius.unwrap_or(state.proximity_radius_km);
    if !radius.is_finite() || radius < 0.0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid radius '{}'", radius),
        ));
    }

    let outlets = fetch(&state).await?;
    let found = outlets_within(&outlets, point, radius);

    tracing::info!(
        "GET /api/nearby lat={} lon={} radius={} -> {} outlets ({:.1}ms)",
        point.lat,
        point.lon,
        radius,
        found.len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(found))
}

// ─── Helpers ─────────────────────────────────────────────────────

/// One upstream fetch per request, off the async workers.
async fn fetch(state: &AppState) -> Result<Vec<Outlet>, ApiError> {
    let client = state.client.clone();
    let fetched = tokio::task::spawn_blocking(move || client.fetch_outlets())
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    fetched.map_err(|e| {
        tracing::warn!("Outlet fetch failed: {}", e);
        api_error(StatusCode::BAD_GATEWAY, e.user_message())
    })
}
