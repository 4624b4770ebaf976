use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Product, ProductType},
    pricing::PricingResult,
};

/// Missing required fields are rejected by the service with a validation
/// message.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub supplier: Option<String>,
    pub cost: Option<Decimal>,
    pub margin: Option<Decimal>,
    pub stock: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub supplier: Option<String>,
    pub cost: Option<Decimal>,
    pub margin: Option<Decimal>,
    pub stock: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub product: Product,
    pub shipping_cost: Decimal,
    pub pricing: PricingResult,
}
