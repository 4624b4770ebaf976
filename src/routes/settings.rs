use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::settings::{Settings, UpdateSettingsRequest},
    error::AppResult,
    response::ApiResponse,
    services::settings_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Marketplace fees and default shipping cost", body = ApiResponse<Settings>)
    ),
    tag = "Settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::get_settings(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<Settings>),
        (status = 400, description = "Negative shipping cost"),
        (status = 422, description = "Fee outside [0, 100)"),
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::update_settings(&state, payload).await?;
    Ok(Json(resp))
}
