//! Mirrors the [`Store`] into key-value slots, one slot per collection or
//! setting, and restores it on start-up.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::{
    models::MarketplaceFees,
    pricing::validate_fees,
    storage::KeyValueStorage,
    store::Store,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Products,
    Suppliers,
    Customers,
    Orders,
    Fees,
    Shipping,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Products => "products",
            Slot::Suppliers => "suppliers",
            Slot::Customers => "customers",
            Slot::Orders => "orders",
            Slot::Fees => "fees",
            Slot::Shipping => "shipping",
        }
    }
}

#[derive(Clone)]
pub struct Mirror {
    storage: Arc<dyn KeyValueStorage>,
    prefix: String,
}

impl Mirror {
    pub fn new(storage: Arc<dyn KeyValueStorage>, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, slot: Slot) -> String {
        format!("{}_{}", self.prefix, slot.name())
    }

    /// Rebuild a store from storage. Absent or unparsable slots fall back to
    /// an empty collection, the default fee table, or zero shipping.
    pub async fn load(&self) -> Store {
        let mut store = Store::new();
        store.products = self.read_slot(Slot::Products).await.unwrap_or_default();
        store.suppliers = self.read_slot(Slot::Suppliers).await.unwrap_or_default();
        store.customers = self.read_slot(Slot::Customers).await.unwrap_or_default();
        store.orders = self.read_slot(Slot::Orders).await.unwrap_or_default();

        store.fees = match self.read_slot::<MarketplaceFees>(Slot::Fees).await {
            Some(fees) => match validate_fees(&fees) {
                Ok(()) => fees,
                Err(err) => {
                    tracing::warn!(error = %err, "stored fee table rejected, using defaults");
                    MarketplaceFees::default()
                }
            },
            None => MarketplaceFees::default(),
        };

        store.default_shipping_cost = self
            .read_slot::<Decimal>(Slot::Shipping)
            .await
            .filter(|cost| *cost >= Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);

        tracing::info!(
            products = store.products.len(),
            suppliers = store.suppliers.len(),
            customers = store.customers.len(),
            orders = store.orders.len(),
            "store loaded"
        );
        store
    }

    /// Write the given slots. Failures are logged and never surface to the
    /// caller: the in-memory store stays authoritative.
    pub async fn persist(&self, store: &Store, slots: &[Slot]) {
        for slot in slots {
            if let Err(err) = self.write_slot(store, *slot).await {
                tracing::warn!(slot = slot.name(), error = %err, "persist failed");
            }
        }
    }

    async fn write_slot(&self, store: &Store, slot: Slot) -> anyhow::Result<()> {
        let value = match slot {
            Slot::Products => serde_json::to_string(&store.products)?,
            Slot::Suppliers => serde_json::to_string(&store.suppliers)?,
            Slot::Customers => serde_json::to_string(&store.customers)?,
            Slot::Orders => serde_json::to_string(&store.orders)?,
            Slot::Fees => serde_json::to_string(&store.fees)?,
            Slot::Shipping => serde_json::to_string(&store.default_shipping_cost)?,
        };
        self.storage.set_item(&self.key(slot), &value).await
    }

    async fn read_slot<T: DeserializeOwned>(&self, slot: Slot) -> Option<T> {
        let raw = match self.storage.get_item(&self.key(slot)).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(slot = slot.name(), error = %err, "slot read failed");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(slot = slot.name(), error = %err, "slot unparsable, using default");
                None
            }
        }
    }
}
