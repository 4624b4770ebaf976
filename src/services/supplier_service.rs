use rust_decimal::Decimal;

use crate::{
    dto::suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
    error::{AppError, AppResult},
    models::Supplier,
    persistence::Slot,
    response::{ApiResponse, Meta},
    routes::params::{Pagination, SupplierQuery},
    services::{non_blank, non_negative, removed_json, required_text, search_needle},
    state::AppState,
};

pub async fn list_suppliers(
    state: &AppState,
    query: SupplierQuery,
) -> AppResult<ApiResponse<SupplierList>> {
    let needle = search_needle(query.q.as_deref());
    let store = state.store.read().await;
    let items: Vec<Supplier> = store
        .suppliers
        .iter()
        .filter(|supplier| {
            needle.as_ref().is_none_or(|needle| {
                supplier.name.to_lowercase().contains(needle)
                    || supplier.contact.to_lowercase().contains(needle)
            })
        })
        .cloned()
        .collect();
    drop(store);

    let total = items.len() as i64;
    let (items, page, per_page) = Pagination::new(query.page, query.per_page).slice(items);
    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success("Suppliers", SupplierList { items }, Some(meta)))
}

pub async fn get_supplier(state: &AppState, id: &str) -> AppResult<ApiResponse<Supplier>> {
    let store = state.store.read().await;
    let supplier = store.suppliers.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Supplier", supplier, None))
}

pub async fn create_supplier(
    state: &AppState,
    payload: CreateSupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    let name = required_text("name", payload.name)?;
    let unit_cost = non_negative("unitCost", payload.unit_cost.unwrap_or(Decimal::ZERO))?;

    let mut store = state.store.write().await;
    let supplier = store
        .suppliers
        .insert(|id, created_at| Supplier {
            id,
            name,
            contact: payload.contact.unwrap_or_default(),
            delivery_time: payload.delivery_time.unwrap_or_default(),
            unit_cost,
            created_at,
        })
        .clone();
    state.mirror.persist(&store, &[Slot::Suppliers]).await;

    tracing::info!(supplier_id = %supplier.id, "supplier created");
    Ok(ApiResponse::success(
        "Supplier created",
        supplier,
        Some(Meta::empty()),
    ))
}

pub async fn update_supplier(
    state: &AppState,
    id: &str,
    payload: UpdateSupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    let name = payload.name.map(|n| non_blank("name", n)).transpose()?;
    let unit_cost = payload
        .unit_cost
        .map(|c| non_negative("unitCost", c))
        .transpose()?;

    let mut store = state.store.write().await;
    let supplier = store
        .suppliers
        .update(id, |supplier| {
            if let Some(name) = name {
                supplier.name = name;
            }
            if let Some(contact) = payload.contact {
                supplier.contact = contact;
            }
            if let Some(delivery_time) = payload.delivery_time {
                supplier.delivery_time = delivery_time;
            }
            if let Some(unit_cost) = unit_cost {
                supplier.unit_cost = unit_cost;
            }
        })
        .cloned()
        .ok_or(AppError::NotFound)?;
    state.mirror.persist(&store, &[Slot::Suppliers]).await;

    tracing::info!(supplier_id = %supplier.id, "supplier updated");
    Ok(ApiResponse::success(
        "Updated",
        supplier,
        Some(Meta::empty()),
    ))
}

pub async fn delete_supplier(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    let removed = store.suppliers.remove(id).is_some();
    if removed {
        state.mirror.persist(&store, &[Slot::Suppliers]).await;
        tracing::info!(supplier_id = %id, "supplier deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        removed_json(removed),
        Some(Meta::empty()),
    ))
}
