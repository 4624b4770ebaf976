use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod dashboard;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod pricing;
pub mod products;
pub mod settings;
pub mod suppliers;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/suppliers", suppliers::router())
        .nest("/customers", customers::router())
        .nest("/orders", orders::router())
        .nest("/settings", settings::router())
        .nest("/pricing", pricing::router())
        .nest("/dashboard", dashboard::router())
}
