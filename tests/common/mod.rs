#![allow(dead_code)]

use std::sync::Arc;

use gestor_criativo_api::{
    dto::{
        customers::CreateCustomerRequest, orders::CreateOrderRequest,
        products::CreateProductRequest,
    },
    models::{Customer, OrderItem},
    services::customer_service,
    state::AppState,
    storage::MemoryStorage,
};
use rust_decimal::Decimal;
use serde_json::Value;

pub const PREFIX: &str = "test";

pub async fn memory_state() -> AppState {
    AppState::load(Arc::new(MemoryStorage::new()), PREFIX).await
}

pub async fn create_customer(state: &AppState, name: &str) -> anyhow::Result<Customer> {
    let resp = customer_service::create_customer(
        state,
        CreateCustomerRequest {
            name: Some(name.into()),
            ..Default::default()
        },
    )
    .await?;
    Ok(resp.into_data().expect("customer data"))
}

/// One line item whose subtotal equals `total`.
pub fn order_for(customer_id: Option<&str>, total: Decimal) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.map(str::to_string),
        items: vec![OrderItem {
            product_name: "Caneca personalizada".into(),
            quantity: 1,
            price: total,
        }],
        ..Default::default()
    }
}

pub fn product_request(name: &str, cost: Decimal, margin: Decimal, stock: u32) -> CreateProductRequest {
    CreateProductRequest {
        name: Some(name.into()),
        product_type: None,
        supplier: Some("Sublima Brindes".into()),
        cost: Some(cost),
        margin: Some(margin),
        stock: Some(stock),
    }
}

/// Reads a JSON number back as an exact decimal.
pub fn decimal(value: &Value) -> Decimal {
    value
        .to_string()
        .parse()
        .unwrap_or_else(|_| panic!("not a decimal: {value}"))
}
