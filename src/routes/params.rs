use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::{CustomerType, OrderStatus, ProductType};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self { page, per_page }
    }

    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }

    /// Returns the requested page of `items` along with `(page, per_page)`.
    pub fn slice<T>(&self, items: Vec<T>) -> (Vec<T>, i64, i64) {
        let (page, per_page, offset) = self.normalize();
        let page_items = items
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .collect();
        (page_items, page, per_page)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    CreatedAt,
    Name,
    Cost,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Case-insensitive match on product or supplier name.
    pub q: Option<String>,
    #[serde(rename = "type")]
    #[param(inline)]
    pub product_type: Option<ProductType>,
    #[param(inline)]
    pub sort_by: Option<ProductSortBy>,
    #[param(inline)]
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SupplierQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CustomerQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Matches name or email case-insensitively, or a phone substring.
    pub q: Option<String>,
    #[serde(rename = "type")]
    #[param(inline)]
    pub customer_type: Option<CustomerType>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[param(inline)]
    pub status: Option<OrderStatus>,
    pub customer_id: Option<String>,
    #[param(inline)]
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Products with stock at or below this are listed as low stock. Default 5.
    pub threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductPricingQuery {
    #[param(value_type = Option<f64>)]
    pub shipping_cost: Option<Decimal>,
}
