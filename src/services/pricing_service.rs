use crate::{
    dto::pricing::{PricingSimulation, SimulatePricingRequest},
    error::AppResult,
    pricing::calculate_pricing,
    response::{ApiResponse, Meta},
    services::{non_negative, required},
    state::AppState,
};

pub async fn simulate(
    state: &AppState,
    payload: SimulatePricingRequest,
) -> AppResult<ApiResponse<PricingSimulation>> {
    let cost = non_negative("cost", required("cost", payload.cost)?)?;
    let margin = non_negative("margin", required("margin", payload.margin)?)?;

    let store = state.store.read().await;
    let fees = store.fees;
    let shipping_cost = payload
        .shipping_cost
        .unwrap_or(store.default_shipping_cost);
    drop(store);
    let shipping_cost = non_negative("shippingCost", shipping_cost)?;

    let pricing = calculate_pricing(cost, margin, shipping_cost, &fees)?;
    tracing::debug!(%cost, %margin, %shipping_cost, direct = %pricing.direct_price, "pricing simulated");

    Ok(ApiResponse::success(
        "Pricing",
        PricingSimulation {
            fees,
            shipping_cost,
            pricing: pricing.rounded(2),
        },
        Some(Meta::empty()),
    ))
}
