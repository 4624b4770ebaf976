use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::dashboard::DashboardSummary,
    error::AppResult,
    response::ApiResponse,
    routes::params::DashboardQuery,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(summary))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Catalog, stock and customer overview", body = ApiResponse<DashboardSummary>)
    ),
    tag = "Dashboard"
)]
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<ApiResponse<DashboardSummary>>> {
    let resp = dashboard_service::summary(&state, query).await?;
    Ok(Json(resp))
}
