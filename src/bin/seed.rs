use std::sync::Arc;

use gestor_criativo_api::{
    config::AppConfig,
    dto::{products::CreateProductRequest, suppliers::CreateSupplierRequest},
    models::ProductType,
    services::{product_service, supplier_service},
    state::AppState,
    storage::FileStorage,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let storage = FileStorage::open(&config.data_dir).await?;
    let state = AppState::load(Arc::new(storage), &config.storage_prefix).await;

    seed_suppliers(&state).await?;
    seed_products(&state).await?;

    println!("Seed completed in {}", config.data_dir.display());
    Ok(())
}

async fn seed_suppliers(state: &AppState) -> anyhow::Result<()> {
    let suppliers = vec![
        ("Sublima Brindes", "contato@sublima.example", "5 dias úteis", Decimal::new(1250, 2)),
        ("Estamparia Central", "(11) 4000-1234", "7 dias úteis", Decimal::new(1800, 2)),
    ];

    for (name, contact, delivery_time, unit_cost) in suppliers {
        if state.store.read().await.suppliers.iter().any(|s| s.name == name) {
            continue;
        }
        supplier_service::create_supplier(
            state,
            CreateSupplierRequest {
                name: Some(name.into()),
                contact: Some(contact.into()),
                delivery_time: Some(delivery_time.into()),
                unit_cost: Some(unit_cost),
            },
        )
        .await?;
    }

    println!("Seeded suppliers");
    Ok(())
}

async fn seed_products(state: &AppState) -> anyhow::Result<()> {
    let products = vec![
        ("Caneca Mágica", ProductType::Mug, "Sublima Brindes", Decimal::new(1250, 2), 80, 30),
        ("Ecobag Floral", ProductType::ToteBag, "Estamparia Central", Decimal::new(1800, 2), 60, 12),
        ("Azulejo Foto", ProductType::Tile, "Sublima Brindes", Decimal::new(900, 2), 100, 4),
        ("Camiseta Básica", ProductType::Shirt, "Estamparia Central", Decimal::new(2500, 2), 70, 2),
    ];

    for (name, product_type, supplier, cost, margin, stock) in products {
        if state.store.read().await.products.iter().any(|p| p.name == name) {
            continue;
        }
        product_service::create_product(
            state,
            CreateProductRequest {
                name: Some(name.into()),
                product_type: Some(product_type),
                supplier: Some(supplier.into()),
                cost: Some(cost),
                margin: Some(Decimal::from(margin)),
                stock: Some(stock),
            },
        )
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
