//! Figure composition API handlers

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gauss::compose::{ClickSelection, compose_cdf_view, compose_pdf_view};
use gauss::core::CurveSet;
use gauss::dist::{SIGMA_MAX, SIGMA_MIN, SigmaKey};
use gauss::grid::GRID_POINTS;

use crate::AppState;
use crate::error::Result;

/// Build the figures API router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meta", get(meta))
        .route("/figures", post(figures))
}

/// Request body: the current slider value plus the most recent cdf-panel
/// click. The page re-sends both together on every interaction, so the
/// server holds no per-client state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FiguresRequest {
    pub sigma: i64,

    #[serde(default)]
    pub click: Option<ClickSelection>,
}

/// Both panel payloads, recomputed per request
#[derive(Clone, Debug, Serialize)]
pub struct FiguresResponse {
    pub pdf: CurveSet,
    pub cdf: CurveSet,
}

/// Slider metadata for the page
#[derive(Clone, Debug, Serialize)]
pub struct MetaResponse {
    pub sigma_min: i64,
    pub sigma_max: i64,
    pub sigma_default: i64,
    pub grid_points: usize,
    pub marks: Vec<Mark>,
}

/// One labeled tick on the sigma slider
#[derive(Clone, Debug, Serialize)]
pub struct Mark {
    pub value: i64,
    pub label: String,
}

/// GET /api/v1/meta - slider range, default selection and tick marks
async fn meta() -> Json<MetaResponse> {
    let marks = (SIGMA_MIN..=SIGMA_MAX)
        .filter(|v| v % 5 == 0)
        .map(|v| Mark {
            value: v,
            label: format!("{:.1}", v as f64 / 10.0),
        })
        .collect();

    Json(MetaResponse {
        sigma_min: SIGMA_MIN,
        sigma_max: SIGMA_MAX,
        sigma_default: SigmaKey::STANDARD.raw(),
        grid_points: GRID_POINTS,
        marks,
    })
}

/// POST /api/v1/figures - one stateless recomputation per interaction
async fn figures(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<FiguresResponse>> {
    let req: FiguresRequest = serde_json::from_value(body)?;

    // Out-of-range slider values are clamped, never rejected: the view
    // must stay renderable. Irrelevant clicks degrade to "no shading"
    // inside the composer.
    let key = SigmaKey::clamped(req.sigma);
    debug!(
        sigma = key.raw(),
        clicked = req.click.is_some(),
        "composing figures"
    );

    let pdf = compose_pdf_view(&state.cache, key, req.click.as_ref());
    let cdf = compose_cdf_view(&state.cache, key);

    Ok(Json(FiguresResponse { pdf, cdf }))
}
