mod common;

use std::collections::HashSet;

use chrono::Utc;
use common::{create_customer, memory_state, order_for, product_request};
use gestor_criativo_api::{
    dto::{
        customers::{CreateCustomerRequest, UpdateCustomerRequest},
        orders::CreateOrderRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        suppliers::CreateSupplierRequest,
    },
    error::AppError,
    models::{CustomerType, OrderItem, Supplier},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    services::{customer_service, order_service, product_service, supplier_service},
    store::Collection,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn collection_generates_unique_ids() {
    let mut suppliers: Collection<Supplier> = Collection::default();
    for i in 0..1000 {
        suppliers.insert(|id, created_at| Supplier {
            id,
            name: format!("Fornecedor {i}"),
            contact: String::new(),
            delivery_time: String::new(),
            unit_cost: Decimal::ZERO,
            created_at,
        });
    }

    let ids: HashSet<&str> = suppliers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), 1000);
    assert_eq!(suppliers.len(), 1000);
}

#[test]
fn collection_keeps_insertion_order_and_ignores_missing_ids() {
    let mut suppliers: Collection<Supplier> = Collection::default();
    for name in ["A", "B", "C"] {
        suppliers.insert(|id, _| Supplier {
            id,
            name: name.into(),
            contact: String::new(),
            delivery_time: String::new(),
            unit_cost: Decimal::ZERO,
            created_at: Utc::now(),
        });
    }

    assert!(suppliers.remove("missing").is_none());
    assert!(suppliers.update("missing", |s| s.name = "Z".into()).is_none());
    let names: Vec<&str> = suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn product_without_cost_is_rejected() -> anyhow::Result<()> {
    let state = memory_state().await;
    let result = product_service::create_product(
        &state,
        CreateProductRequest {
            name: Some("Caneca".into()),
            supplier: Some("Sublima".into()),
            margin: Some(dec!(50)),
            ..Default::default()
        },
    )
    .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("cost")),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(state.store.read().await.products.is_empty());
    Ok(())
}

#[tokio::test]
async fn blank_or_negative_fields_are_rejected() -> anyhow::Result<()> {
    let state = memory_state().await;

    let blank_name = product_request("   ", dec!(10), dec!(50), 1);
    assert!(matches!(
        product_service::create_product(&state, blank_name).await,
        Err(AppError::BadRequest(_))
    ));

    let negative_cost = product_request("Caneca", dec!(-1), dec!(50), 1);
    assert!(matches!(
        product_service::create_product(&state, negative_cost).await,
        Err(AppError::BadRequest(_))
    ));

    let nameless = customer_service::create_customer(&state, CreateCustomerRequest::default()).await;
    assert!(matches!(nameless, Err(AppError::BadRequest(_))));

    let empty_order = order_service::create_order(&state, CreateOrderRequest::default()).await;
    assert!(matches!(empty_order, Err(AppError::BadRequest(_))));

    let zero_quantity = CreateOrderRequest {
        items: vec![OrderItem {
            product_name: "Caneca".into(),
            quantity: 0,
            price: dec!(10),
        }],
        ..Default::default()
    };
    assert!(matches!(
        order_service::create_order(&state, zero_quantity).await,
        Err(AppError::BadRequest(_))
    ));

    let store = state.store.read().await;
    assert!(store.products.is_empty());
    assert!(store.customers.is_empty());
    assert!(store.orders.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_unknown_ids_is_a_no_op() -> anyhow::Result<()> {
    let state = memory_state().await;
    product_service::create_product(&state, product_request("Caneca", dec!(10), dec!(50), 3))
        .await?;
    create_customer(&state, "Ana").await?;
    order_service::create_order(&state, order_for(None, dec!(10))).await?;

    for removed in [
        product_service::delete_product(&state, "nope").await?,
        supplier_service::delete_supplier(&state, "nope").await?,
        customer_service::delete_customer(&state, "nope").await?,
        order_service::delete_order(&state, "nope").await?,
    ] {
        assert_eq!(removed.into_data().expect("payload")["removed"], false);
    }

    let store = state.store.read().await;
    assert_eq!(store.products.len(), 1);
    assert_eq!(store.customers.len(), 1);
    assert_eq!(store.orders.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_merges_only_given_fields() -> anyhow::Result<()> {
    let state = memory_state().await;
    let product = product_service::create_product(
        &state,
        product_request("Caneca Mágica", dec!(12.5), dec!(80), 10),
    )
    .await?
    .into_data()
    .expect("product");

    let updated = product_service::update_product(
        &state,
        &product.id,
        UpdateProductRequest {
            stock: Some(3),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("product");

    assert_eq!(updated.stock, 3);
    assert_eq!(updated.name, product.name);
    assert_eq!(updated.cost, product.cost);
    assert_eq!(updated.margin, product.margin);
    assert_eq!(updated.created_at, product.created_at);

    let missing = product_service::update_product(&state, "nope", UpdateProductRequest::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn customer_update_keeps_statistics_and_normalizes_preferences() -> anyhow::Result<()> {
    let state = memory_state().await;
    let customer = create_customer(&state, "Ana").await?;
    order_service::create_order(&state, order_for(Some(&customer.id), dec!(80))).await?;

    let updated = customer_service::update_customer(
        &state,
        &customer.id,
        UpdateCustomerRequest {
            customer_type: Some(CustomerType::Premium),
            preferences: Some(vec![
                " canecas ".into(),
                "".into(),
                "canecas".into(),
                "azulejos".into(),
            ]),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("customer");

    assert_eq!(updated.customer_type, CustomerType::Premium);
    assert_eq!(updated.preferences, ["canecas", "azulejos"]);
    assert_eq!(updated.total_orders, 1);
    assert_eq!(updated.total_spent, dec!(80));
    assert!(updated.last_order_date.is_some());
    Ok(())
}

#[tokio::test]
async fn product_list_filters_sorts_and_pages() -> anyhow::Result<()> {
    let state = memory_state().await;
    for (name, cost) in [("Caneca", dec!(12)), ("Azulejo", dec!(9)), ("Camiseta", dec!(25))] {
        product_service::create_product(&state, product_request(name, cost, dec!(50), 1)).await?;
    }
    supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: Some("Sublima Brindes".into()),
            ..Default::default()
        },
    )
    .await?;

    let by_cost = product_service::list_products(
        &state,
        ProductQuery {
            sort_by: Some(ProductSortBy::Cost),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        },
    )
    .await?;
    let names: Vec<String> = by_cost
        .into_data()
        .expect("list")
        .items
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Camiseta", "Caneca", "Azulejo"]);

    let search = product_service::list_products(
        &state,
        ProductQuery {
            q: Some("CAN".into()),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("list");
    assert_eq!(search.items.len(), 1);
    assert_eq!(search.items[0].name, "Caneca");

    let page = product_service::list_products(
        &state,
        ProductQuery {
            page: Some(2),
            per_page: Some(2),
            ..Default::default()
        },
    )
    .await?;
    let meta = page.meta.clone().expect("meta");
    assert_eq!(meta.total, Some(3));
    assert_eq!(page.into_data().expect("list").items.len(), 1);
    Ok(())
}
