use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::MarketplaceFees, pricing::PricingResult};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatePricingRequest {
    pub cost: Option<Decimal>,
    pub margin: Option<Decimal>,
    /// Falls back to the configured default shipping cost.
    pub shipping_cost: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingSimulation {
    pub fees: MarketplaceFees,
    pub shipping_cost: Decimal,
    pub pricing: PricingResult,
}
