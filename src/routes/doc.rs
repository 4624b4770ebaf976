use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{
            CreateCustomerRequest, CustomerList, CustomerOrderHistory, CustomerSummary,
            UpdateCustomerRequest,
        },
        dashboard::{CustomerTypeCount, DashboardSummary, ProfitableProduct},
        orders::{CreateOrderRequest, OrderList, UpdateOrderRequest, UpdateOrderStatusRequest},
        pricing::{PricingSimulation, SimulatePricingRequest},
        products::{CreateProductRequest, ProductList, ProductPricing, UpdateProductRequest},
        settings::{FeesPatch, Settings, UpdateSettingsRequest},
        suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
    },
    models::{
        Channel, Customer, CustomerType, MarketplaceFees, Order, OrderItem, OrderStatus, Product,
        ProductType, Supplier,
    },
    pricing::PricingResult,
    response::{ApiResponse, Meta},
    routes::{customers, dashboard, health, orders, pricing, products, settings, suppliers},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        products::product_pricing,
        suppliers::list_suppliers,
        suppliers::create_supplier,
        suppliers::get_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        customers::customer_orders,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::update_order_status,
        orders::delete_order,
        settings::get_settings,
        settings::update_settings,
        pricing::simulate,
        dashboard::summary
    ),
    components(
        schemas(
            Product,
            ProductType,
            Supplier,
            Customer,
            CustomerType,
            Order,
            OrderItem,
            OrderStatus,
            Channel,
            MarketplaceFees,
            PricingResult,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            ProductPricing,
            CreateSupplierRequest,
            UpdateSupplierRequest,
            SupplierList,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            CustomerList,
            CustomerSummary,
            CustomerOrderHistory,
            CreateOrderRequest,
            UpdateOrderRequest,
            UpdateOrderStatusRequest,
            OrderList,
            Settings,
            FeesPatch,
            UpdateSettingsRequest,
            SimulatePricingRequest,
            PricingSimulation,
            ProfitableProduct,
            CustomerTypeCount,
            DashboardSummary,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<Customer>,
            ApiResponse<PricingSimulation>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Settings", description = "Marketplace fees and shipping defaults"),
        (name = "Pricing", description = "Price simulation"),
        (name = "Dashboard", description = "Overview endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
