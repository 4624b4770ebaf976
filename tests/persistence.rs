mod common;

use std::sync::Arc;

use common::{create_customer, order_for, product_request};
use gestor_criativo_api::{
    dto::settings::{FeesPatch, UpdateSettingsRequest},
    models::MarketplaceFees,
    persistence::{Mirror, Slot},
    services::{order_service, product_service, settings_service},
    state::AppState,
    storage::{FileStorage, KeyValueStorage, MemoryStorage},
};
use rust_decimal_macros::dec;

#[tokio::test]
async fn empty_storage_loads_defaults() {
    let state = AppState::load(Arc::new(MemoryStorage::new()), "gestor_criativo").await;
    let store = state.store.read().await;

    assert!(store.products.is_empty());
    assert!(store.suppliers.is_empty());
    assert!(store.customers.is_empty());
    assert!(store.orders.is_empty());
    assert_eq!(store.fees, MarketplaceFees::default());
    assert_eq!(store.fees.shopee, dec!(12));
    assert_eq!(store.fees.mercadolivre, dec!(16));
    assert_eq!(store.fees.amazon, dec!(15));
    assert_eq!(store.default_shipping_cost, dec!(0));
}

#[tokio::test]
async fn unparsable_or_invalid_slots_fall_back_to_defaults() -> anyhow::Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item("shop_products", "not json").await?;
    storage
        .set_item("shop_fees", r#"{"shopee":150,"mercadolivre":16,"amazon":15}"#)
        .await?;
    storage.set_item("shop_shipping", "-3").await?;
    storage.set_item("shop_customers", "[]").await?;

    let state = AppState::load(storage, "shop").await;
    let store = state.store.read().await;
    assert!(store.products.is_empty());
    assert!(store.customers.is_empty());
    assert_eq!(store.fees, MarketplaceFees::default());
    assert_eq!(store.default_shipping_cost, dec!(0));
    Ok(())
}

#[tokio::test]
async fn slot_keys_carry_the_prefix() {
    let mirror = Mirror::new(Arc::new(MemoryStorage::new()), "gestor_criativo");
    assert_eq!(mirror.key(Slot::Products), "gestor_criativo_products");
    assert_eq!(mirror.key(Slot::Shipping), "gestor_criativo_shipping");
}

#[tokio::test]
async fn mutations_are_mirrored_to_storage() -> anyhow::Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::load(storage.clone(), "shop").await;

    product_service::create_product(&state, product_request("Caneca", dec!(10), dec!(50), 4))
        .await?;
    let customer = create_customer(&state, "Ana").await?;
    order_service::create_order(&state, order_for(Some(&customer.id), dec!(70))).await?;

    let products = storage.get_item("shop_products").await?.expect("products slot");
    assert!(products.contains("Caneca"));
    let customers = storage.get_item("shop_customers").await?.expect("customers slot");
    assert!(customers.contains("\"totalOrders\":1"));
    assert!(storage.get_item("shop_orders").await?.is_some());

    // A second state over the same storage sees everything
    let reloaded = AppState::load(storage, "shop").await;
    let store = reloaded.store.read().await;
    assert_eq!(store.products.len(), 1);
    assert_eq!(store.orders.len(), 1);
    let customer = store.customers.get(&customer.id).expect("customer");
    assert_eq!(customer.total_orders, 1);
    assert_eq!(customer.total_spent, dec!(70));
    Ok(())
}

#[tokio::test]
async fn file_storage_survives_restart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let storage = FileStorage::open(dir.path()).await?;
        let state = AppState::load(Arc::new(storage), "gestor_criativo").await;
        product_service::create_product(&state, product_request("Azulejo", dec!(9), dec!(100), 2))
            .await?;
        settings_service::update_settings(
            &state,
            UpdateSettingsRequest {
                fees: Some(FeesPatch {
                    shopee: Some(dec!(14)),
                    ..Default::default()
                }),
                default_shipping_cost: Some(dec!(8.5)),
            },
        )
        .await?;
    }

    assert!(dir.path().join("gestor_criativo_products.json").exists());
    assert!(!dir.path().join("gestor_criativo_products.json.tmp").exists());

    let storage = FileStorage::open(dir.path()).await?;
    let state = AppState::load(Arc::new(storage), "gestor_criativo").await;
    let store = state.store.read().await;
    assert_eq!(store.products.len(), 1);
    assert_eq!(store.products.list()[0].name, "Azulejo");
    assert_eq!(store.fees.shopee, dec!(14));
    assert_eq!(store.fees.amazon, dec!(15));
    assert_eq!(store.default_shipping_cost, dec!(8.5));
    Ok(())
}

#[tokio::test]
async fn missing_file_reads_as_absent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::open(dir.path().join("nested")).await?;
    assert!(storage.get_item("gestor_criativo_orders").await?.is_none());

    storage.set_item("gestor_criativo_orders", "[]").await?;
    assert_eq!(
        storage.get_item("gestor_criativo_orders").await?.as_deref(),
        Some("[]")
    );
    Ok(())
}

#[tokio::test]
async fn decimals_reload_without_precision_loss() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let precise = dec!(1234567890.123456789012345678);

    let customer_id = {
        let storage = FileStorage::open(dir.path()).await?;
        let state = AppState::load(Arc::new(storage), "gestor_criativo").await;
        let customer = create_customer(&state, "Lia Moura").await?;
        order_service::create_order(&state, order_for(Some(&customer.id), precise)).await?;
        customer.id
    };

    let storage = FileStorage::open(dir.path()).await?;
    let state = AppState::load(Arc::new(storage), "gestor_criativo").await;
    let store = state.store.read().await;
    assert_eq!(store.orders.list()[0].total, precise);
    assert_eq!(
        store.customers.get(&customer_id).expect("customer").total_spent,
        precise
    );
    Ok(())
}
