use rust_decimal::Decimal;

use crate::{
    dto::customers::{
        CreateCustomerRequest, CustomerList, CustomerOrderHistory, CustomerSummary,
        UpdateCustomerRequest,
    },
    error::{AppError, AppResult},
    models::{Customer, Order},
    persistence::Slot,
    response::{ApiResponse, Meta},
    routes::params::{CustomerQuery, Pagination},
    services::{non_blank, optional_text, removed_json, required_text, search_needle},
    state::AppState,
};

pub async fn list_customers(
    state: &AppState,
    query: CustomerQuery,
) -> AppResult<ApiResponse<CustomerList>> {
    let needle = search_needle(query.q.as_deref());
    let store = state.store.read().await;
    let items: Vec<Customer> = store
        .customers
        .iter()
        .filter(|customer| {
            let matches_search = needle.as_ref().is_none_or(|needle| {
                customer.name.to_lowercase().contains(needle)
                    || customer
                        .email
                        .as_ref()
                        .is_some_and(|email| email.to_lowercase().contains(needle))
                    || customer
                        .phone
                        .as_ref()
                        .is_some_and(|phone| phone.contains(needle.as_str()))
            });
            let matches_type = query
                .customer_type
                .is_none_or(|customer_type| customer.customer_type == customer_type);
            matches_search && matches_type
        })
        .cloned()
        .collect();
    drop(store);

    let total = items.len() as i64;
    let (items, page, per_page) = Pagination::new(query.page, query.per_page).slice(items);
    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success("Customers", CustomerList { items }, Some(meta)))
}

pub async fn get_customer(state: &AppState, id: &str) -> AppResult<ApiResponse<Customer>> {
    let store = state.store.read().await;
    let customer = store.customers.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Customer", customer, None))
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    let name = required_text("name", payload.name)?;

    let mut store = state.store.write().await;
    let customer = store
        .customers
        .insert(|id, created_at| Customer {
            id,
            name,
            email: optional_text(payload.email),
            phone: optional_text(payload.phone),
            address: optional_text(payload.address),
            customer_type: payload.customer_type.unwrap_or_default(),
            preferences: normalize_preferences(payload.preferences.unwrap_or_default()),
            notes: optional_text(payload.notes),
            created_at,
            total_orders: 0,
            total_spent: Decimal::ZERO,
            last_order_date: None,
        })
        .clone();
    state.mirror.persist(&store, &[Slot::Customers]).await;

    tracing::info!(customer_id = %customer.id, "customer created");
    Ok(ApiResponse::success(
        "Customer created",
        customer,
        Some(Meta::empty()),
    ))
}

pub async fn update_customer(
    state: &AppState,
    id: &str,
    payload: UpdateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    let name = payload.name.map(|n| non_blank("name", n)).transpose()?;

    let mut store = state.store.write().await;
    let customer = store
        .customers
        .update(id, |customer| {
            if let Some(name) = name {
                customer.name = name;
            }
            if let Some(email) = payload.email {
                customer.email = optional_text(Some(email));
            }
            if let Some(phone) = payload.phone {
                customer.phone = optional_text(Some(phone));
            }
            if let Some(address) = payload.address {
                customer.address = optional_text(Some(address));
            }
            if let Some(customer_type) = payload.customer_type {
                customer.customer_type = customer_type;
            }
            if let Some(preferences) = payload.preferences {
                customer.preferences = normalize_preferences(preferences);
            }
            if let Some(notes) = payload.notes {
                customer.notes = optional_text(Some(notes));
            }
        })
        .cloned()
        .ok_or(AppError::NotFound)?;
    state.mirror.persist(&store, &[Slot::Customers]).await;

    tracing::info!(customer_id = %customer.id, "customer updated");
    Ok(ApiResponse::success(
        "Updated",
        customer,
        Some(Meta::empty()),
    ))
}

/// Orders referencing a deleted customer are kept and become guest orders.
pub async fn delete_customer(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    let removed = store.customers.remove(id).is_some();
    if removed {
        state.mirror.persist(&store, &[Slot::Customers]).await;
        tracing::info!(customer_id = %id, "customer deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        removed_json(removed),
        Some(Meta::empty()),
    ))
}

pub async fn customer_orders(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<CustomerOrderHistory>> {
    let store = state.store.read().await;
    let customer = store.customers.get(id).cloned().ok_or(AppError::NotFound)?;
    let mut orders: Vec<Order> = store
        .orders
        .iter()
        .filter(|order| order.customer_id.as_deref() == Some(id))
        .cloned()
        .collect();
    drop(store);
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let average_ticket = if customer.total_orders > 0 {
        (customer.total_spent / Decimal::from(customer.total_orders)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    let summary = CustomerSummary {
        total_orders: customer.total_orders,
        total_spent: customer.total_spent,
        average_ticket,
    };

    Ok(ApiResponse::success(
        "Customer orders",
        CustomerOrderHistory {
            customer,
            summary,
            orders,
        },
        Some(Meta::empty()),
    ))
}

/// Trims entries, drops blanks and repeats, keeping first-seen order.
fn normalize_preferences(preferences: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(preferences.len());
    for preference in preferences {
        let preference = preference.trim();
        if !preference.is_empty() && !out.iter().any(|p| p == preference) {
            out.push(preference.to_string());
        }
    }
    out
}
