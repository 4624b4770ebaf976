use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::pricing::{PricingSimulation, SimulatePricingRequest},
    error::AppResult,
    response::ApiResponse,
    services::pricing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/simulate", post(simulate))
}

#[utoipa::path(
    post,
    path = "/api/pricing/simulate",
    request_body = SimulatePricingRequest,
    responses(
        (status = 200, description = "Direct and marketplace prices with per-channel profit", body = ApiResponse<PricingSimulation>),
        (status = 400, description = "Missing or negative input"),
    ),
    tag = "Pricing"
)]
pub async fn simulate(
    State(state): State<AppState>,
    Json(payload): Json<SimulatePricingRequest>,
) -> AppResult<Json<ApiResponse<PricingSimulation>>> {
    let resp = pricing_service::simulate(&state, payload).await?;
    Ok(Json(resp))
}
