use rust_decimal::Decimal;

use crate::{
    dto::products::{CreateProductRequest, ProductList, ProductPricing, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    persistence::Slot,
    pricing::calculate_pricing,
    response::{ApiResponse, Meta},
    routes::params::{Pagination, ProductPricingQuery, ProductQuery, ProductSortBy, SortOrder},
    services::{non_blank, non_negative, removed_json, required, required_text, search_needle},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let needle = search_needle(query.q.as_deref());
    let store = state.store.read().await;

    let mut items: Vec<Product> = store
        .products
        .iter()
        .filter(|product| {
            let matches_search = needle.as_ref().is_none_or(|needle| {
                product.name.to_lowercase().contains(needle)
                    || product.supplier.to_lowercase().contains(needle)
            });
            let matches_type = query
                .product_type
                .is_none_or(|product_type| product.product_type == product_type);
            matches_search && matches_type
        })
        .cloned()
        .collect();
    drop(store);

    if let Some(sort_by) = query.sort_by {
        match sort_by {
            ProductSortBy::CreatedAt => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ProductSortBy::Name => {
                items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
            ProductSortBy::Cost => items.sort_by(|a, b| a.cost.cmp(&b.cost)),
        }
    }
    if matches!(query.sort_order, Some(SortOrder::Desc)) {
        items.reverse();
    }

    let total = items.len() as i64;
    let (items, page, per_page) = Pagination::new(query.page, query.per_page).slice(items);
    tracing::debug!(total, page, "products listed");

    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let store = state.store.read().await;
    let product = match store.products.get(id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = required_text("name", payload.name)?;
    let supplier = required_text("supplier", payload.supplier)?;
    let cost = non_negative("cost", required("cost", payload.cost)?)?;
    let margin = non_negative("margin", required("margin", payload.margin)?)?;

    let mut store = state.store.write().await;
    let product = store
        .products
        .insert(|id, created_at| Product {
            id,
            name,
            product_type: payload.product_type.unwrap_or_default(),
            supplier,
            cost,
            margin,
            stock: payload.stock.unwrap_or(0),
            created_at,
        })
        .clone();
    state.mirror.persist(&store, &[Slot::Products]).await;

    tracing::info!(product_id = %product.id, "product created");
    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: &str,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = payload.name.map(|n| non_blank("name", n)).transpose()?;
    let supplier = payload
        .supplier
        .map(|s| non_blank("supplier", s))
        .transpose()?;
    let cost = payload.cost.map(|c| non_negative("cost", c)).transpose()?;
    let margin = payload
        .margin
        .map(|m| non_negative("margin", m))
        .transpose()?;

    let mut store = state.store.write().await;
    let product = store.products.update(id, |product| {
        if let Some(name) = name {
            product.name = name;
        }
        if let Some(product_type) = payload.product_type {
            product.product_type = product_type;
        }
        if let Some(supplier) = supplier {
            product.supplier = supplier;
        }
        if let Some(cost) = cost {
            product.cost = cost;
        }
        if let Some(margin) = margin {
            product.margin = margin;
        }
        if let Some(stock) = payload.stock {
            product.stock = stock;
        }
    });
    let product = match product {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    state.mirror.persist(&store, &[Slot::Products]).await;

    tracing::info!(product_id = %product.id, "product updated");
    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    let removed = store.products.remove(id).is_some();
    if removed {
        state.mirror.persist(&store, &[Slot::Products]).await;
        tracing::info!(product_id = %id, "product deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        removed_json(removed),
        Some(Meta::empty()),
    ))
}

/// Prices a stored product from its cost and margin. Shipping is zero unless
/// given.
pub async fn product_pricing(
    state: &AppState,
    id: &str,
    query: ProductPricingQuery,
) -> AppResult<ApiResponse<ProductPricing>> {
    let shipping_cost = non_negative("shipping_cost", query.shipping_cost.unwrap_or(Decimal::ZERO))?;

    let store = state.store.read().await;
    let product = match store.products.get(id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    let pricing = calculate_pricing(product.cost, product.margin, shipping_cost, &store.fees)?;

    Ok(ApiResponse::success(
        "Product pricing",
        ProductPricing {
            product,
            shipping_cost,
            pricing: pricing.rounded(2),
        },
        Some(Meta::empty()),
    ))
}
