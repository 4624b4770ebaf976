use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Customer, CustomerType, Order};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub customer_type: Option<CustomerType>,
    pub preferences: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Has no order statistics fields; those only move with orders.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub customer_type: Option<CustomerType>,
    pub preferences: Option<Vec<String>>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerList {
    #[schema(value_type = Vec<Customer>)]
    pub items: Vec<Customer>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub total_orders: u32,
    pub total_spent: Decimal,
    pub average_ticket: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerOrderHistory {
    pub customer: Customer,
    pub summary: CustomerSummary,
    pub orders: Vec<Order>,
}
