use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Supplier;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub delivery_time: Option<String>,
    pub unit_cost: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub delivery_time: Option<String>,
    pub unit_cost: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SupplierList {
    #[schema(value_type = Vec<Supplier>)]
    pub items: Vec<Supplier>,
}
