use rust_decimal::Decimal;

use crate::{
    dto::dashboard::{CustomerTypeCount, DashboardSummary, ProfitableProduct},
    error::AppResult,
    models::{CustomerType, Product},
    pricing::direct_pricing,
    response::{ApiResponse, Meta},
    routes::params::DashboardQuery,
    state::AppState,
};

const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;
const TOP_PROFITABLE: usize = 5;

pub async fn summary(
    state: &AppState,
    query: DashboardQuery,
) -> AppResult<ApiResponse<DashboardSummary>> {
    let threshold = query.threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
    let store = state.store.read().await;

    let total_stock = store.products.iter().map(|p| u64::from(p.stock)).sum();
    let open_orders = store
        .orders
        .iter()
        .filter(|order| !order.status.is_terminal())
        .count();
    let customers_by_type = CustomerType::ALL
        .into_iter()
        .map(|customer_type| CustomerTypeCount {
            customer_type,
            count: store
                .customers
                .iter()
                .filter(|c| c.customer_type == customer_type)
                .count(),
        })
        .collect();

    // Per-unit direct profit without shipping.
    let mut most_profitable = Vec::with_capacity(store.products.len());
    for product in store.products.iter() {
        let (landed_cost, direct_price) =
            match direct_pricing(product.cost, product.margin, Decimal::ZERO) {
                Ok(prices) => prices,
                Err(err) => {
                    tracing::warn!(product_id = %product.id, error = %err, "product left out of profit ranking");
                    continue;
                }
            };
        most_profitable.push(ProfitableProduct {
            id: product.id.clone(),
            name: product.name.clone(),
            product_type: product.product_type,
            profit: (direct_price - landed_cost).round_dp(2),
        });
    }
    most_profitable.sort_by(|a, b| b.profit.cmp(&a.profit));
    most_profitable.truncate(TOP_PROFITABLE);

    let mut low_stock: Vec<Product> = store
        .products
        .iter()
        .filter(|p| p.stock <= threshold)
        .cloned()
        .collect();
    low_stock.sort_by_key(|p| p.stock);

    let summary = DashboardSummary {
        total_products: store.products.len(),
        total_suppliers: store.suppliers.len(),
        total_customers: store.customers.len(),
        total_stock,
        open_orders,
        customers_by_type,
        most_profitable,
        low_stock,
    };
    Ok(ApiResponse::success("Dashboard", summary, Some(Meta::empty())))
}
