use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CustomerType, Product, ProductType};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitableProduct {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub profit: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTypeCount {
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_suppliers: usize,
    pub total_customers: usize,
    pub total_stock: u64,
    pub open_orders: usize,
    pub customers_by_type: Vec<CustomerTypeCount>,
    pub most_profitable: Vec<ProfitableProduct>,
    pub low_stock: Vec<Product>,
}
