use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MarketplaceFees;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub fees: MarketplaceFees,
    pub default_shipping_cost: Decimal,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FeesPatch {
    pub shopee: Option<Decimal>,
    pub mercadolivre: Option<Decimal>,
    pub amazon: Option<Decimal>,
}

impl FeesPatch {
    pub fn apply_to(&self, fees: &MarketplaceFees) -> MarketplaceFees {
        MarketplaceFees {
            shopee: self.shopee.unwrap_or(fees.shopee),
            mercadolivre: self.mercadolivre.unwrap_or(fees.mercadolivre),
            amazon: self.amazon.unwrap_or(fees.amazon),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub fees: Option<FeesPatch>,
    pub default_shipping_cost: Option<Decimal>,
}
