use chrono::Utc;
use crate::{
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    models::{Order, OrderItem, OrderStatus, items_total},
    persistence::Slot,
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, Pagination, SortOrder},
    services::{non_blank, non_negative, optional_text, removed_json},
    state::AppState,
    stats::{OrderDelta, apply_order_delta},
};

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let customer_id = optional_text(query.customer_id);
    let store = state.store.read().await;
    let mut orders: Vec<Order> = store
        .orders
        .iter()
        .filter(|order| query.status.is_none_or(|status| order.status == status))
        .filter(|order| {
            customer_id
                .as_deref()
                .is_none_or(|id| order.customer_id.as_deref() == Some(id))
        })
        .cloned()
        .collect();
    drop(store);

    match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => orders.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Desc => orders.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    let total = orders.len() as i64;
    let (items, page, per_page) = Pagination::new(query.page, query.per_page).slice(orders);
    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<Order>> {
    let store = state.store.read().await;
    let order = store.orders.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

/// Records a new pending order and folds its total into the referenced
/// customer's statistics in the same write.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let items = validate_items(payload.items)?;
    let total = match payload.total {
        Some(total) => non_negative("total", total)?,
        None => items_total(&items)
            .ok_or_else(|| AppError::bad_request("order total is too large"))?,
    };
    let customer_id = optional_text(payload.customer_id);

    let mut store = state.store.write().await;
    let order = store
        .orders
        .insert(|id, created_at| Order {
            id,
            customer_id,
            items,
            total,
            status: OrderStatus::Pending,
            notes: optional_text(payload.notes),
            created_at,
        })
        .clone();
    let customer =
        match apply_order_delta(&mut store, &order, OrderDelta::Created, order.created_at) {
            Ok(customer) => customer,
            Err(err) => {
                store.orders.remove(&order.id);
                tracing::warn!(order_id = %order.id, error = %err, "order rejected");
                return Err(err.into());
            }
        };

    if customer.is_some() {
        state
            .mirror
            .persist(&store, &[Slot::Orders, Slot::Customers])
            .await;
    } else {
        state.mirror.persist(&store, &[Slot::Orders]).await;
    }

    tracing::info!(
        order_id = %order.id,
        customer_id = order.customer_id.as_deref().unwrap_or("-"),
        total = %order.total,
        "order created"
    );
    Ok(ApiResponse::success(
        "Order created",
        order,
        Some(Meta::empty()),
    ))
}

/// Field-level merge. Customer statistics are not touched, even when the
/// total or customer changes.
pub async fn update_order(
    state: &AppState,
    id: &str,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let items = payload.items.map(validate_items).transpose()?;
    let total = payload
        .total
        .map(|t| non_negative("total", t))
        .transpose()?;

    let mut store = state.store.write().await;
    let order = store
        .orders
        .update(id, |order| {
            if let Some(customer_id) = payload.customer_id {
                order.customer_id = optional_text(Some(customer_id));
            }
            if let Some(items) = items {
                order.items = items;
            }
            if let Some(total) = total {
                order.total = total;
            }
            if let Some(status) = payload.status {
                order.status = status;
            }
            if let Some(notes) = payload.notes {
                order.notes = optional_text(Some(notes));
            }
        })
        .cloned()
        .ok_or(AppError::NotFound)?;
    state.mirror.persist(&store, &[Slot::Orders]).await;

    if order.items_total() != Some(order.total) {
        tracing::warn!(order_id = %order.id, total = %order.total, "order total differs from its items");
    }
    tracing::info!(order_id = %order.id, "order updated");
    Ok(ApiResponse::success(
        "Updated",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let mut store = state.store.write().await;
    let mut previous = None;
    let order = store
        .orders
        .update(id, |order| {
            previous = Some(order.status);
            order.status = payload.status;
        })
        .cloned()
        .ok_or(AppError::NotFound)?;
    state.mirror.persist(&store, &[Slot::Orders]).await;

    tracing::info!(
        order_id = %order.id,
        from = ?previous,
        to = ?order.status,
        "order status updated"
    );
    Ok(ApiResponse::success(
        "Order status updated",
        order,
        Some(Meta::empty()),
    ))
}

/// Removes the order and takes its stored total back out of the customer's
/// statistics. The customer's last order date is left as it was.
pub async fn delete_order(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    let order = match store.orders.get(id) {
        Some(order) => order.clone(),
        None => {
            return Ok(ApiResponse::success(
                "Deleted",
                removed_json(false),
                Some(Meta::empty()),
            ));
        }
    };
    let customer = apply_order_delta(&mut store, &order, OrderDelta::Removed, Utc::now())?;
    store.orders.remove(id);

    if customer.is_some() {
        state
            .mirror
            .persist(&store, &[Slot::Orders, Slot::Customers])
            .await;
    } else {
        state.mirror.persist(&store, &[Slot::Orders]).await;
    }

    tracing::info!(order_id = %order.id, total = %order.total, "order deleted");
    Ok(ApiResponse::success(
        "Deleted",
        removed_json(true),
        Some(Meta::empty()),
    ))
}

fn validate_items(items: Vec<OrderItem>) -> AppResult<Vec<OrderItem>> {
    if items.is_empty() {
        return Err(AppError::bad_request("order must have at least one item"));
    }
    items
        .into_iter()
        .map(|item| {
            if item.quantity == 0 {
                return Err(AppError::bad_request("item quantity must be at least 1"));
            }
            let item = OrderItem {
                product_name: non_blank("productName", item.product_name)?,
                quantity: item.quantity,
                price: non_negative("price", item.price)?,
            };
            if item.subtotal().is_none() {
                return Err(AppError::bad_request("item subtotal is too large"));
            }
            Ok(item)
        })
        .collect()
}
