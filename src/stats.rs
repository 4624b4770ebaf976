//! Customer aggregate maintenance.
//!
//! `total_orders`, `total_spent` and `last_order_date` on a customer are only
//! ever changed here, as a side effect of creating or deleting an order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    models::{Customer, Order},
    store::Store,
};

/// Direction of an order mutation. A created order always counts as one more
/// order, whatever its total (zero included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDelta {
    Created,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("total spent by customer {customer_id} would overflow")]
    Overflow { customer_id: String },
}

/// Folds `order` into (or out of) the statistics of the customer it
/// references, stamping `now` as the last order date on creation.
///
/// Orders without a customer, or whose customer no longer exists, are guest
/// orders: nothing is updated and `Ok(None)` is returned. Removal leaves
/// `last_order_date` untouched. On overflow the customer is left as it was.
pub fn apply_order_delta(
    store: &mut Store,
    order: &Order,
    delta: OrderDelta,
    now: DateTime<Utc>,
) -> Result<Option<Customer>, StatsError> {
    let Some(customer_id) = order.customer_id.as_deref() else {
        return Ok(None);
    };
    let Some(current) = store.customers.get(customer_id) else {
        tracing::debug!(customer_id, order_id = %order.id, "order references unknown customer, stats skipped");
        return Ok(None);
    };

    let total_spent = match delta {
        OrderDelta::Created => current.total_spent.checked_add(order.total),
        OrderDelta::Removed => current.total_spent.checked_sub(order.total),
    }
    .ok_or_else(|| StatsError::Overflow {
        customer_id: customer_id.to_string(),
    })?;

    let updated = store.customers.update(customer_id, |customer| {
        apply(customer, delta, total_spent, now)
    });
    Ok(updated.cloned())
}

fn apply(customer: &mut Customer, delta: OrderDelta, total_spent: Decimal, now: DateTime<Utc>) {
    customer.total_spent = total_spent;
    match delta {
        OrderDelta::Created => {
            customer.total_orders = customer.total_orders.saturating_add(1);
            customer.last_order_date = Some(now);
        }
        OrderDelta::Removed => {
            customer.total_orders = customer.total_orders.saturating_sub(1);
        }
    }
}
