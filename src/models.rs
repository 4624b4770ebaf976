use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    #[default]
    Mug,
    ToteBag,
    Towel,
    Shirt,
    Tile,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    New,
    Frequent,
    Premium,
    Inactive,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::New,
        CustomerType::Frequent,
        CustomerType::Premium,
        CustomerType::Inactive,
    ];
}

/// Order status. Any status may be written over any other; transitions are
/// not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProduction,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Marketplace a product can be listed on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Shopee,
    MercadoLivre,
    Amazon,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Shopee, Channel::MercadoLivre, Channel::Amazon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Shopee => "shopee",
            Channel::MercadoLivre => "mercadolivre",
            Channel::Amazon => "amazon",
        }
    }
}

/// Commission percent charged by each marketplace on its own sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MarketplaceFees {
    pub shopee: Decimal,
    pub mercadolivre: Decimal,
    pub amazon: Decimal,
}

impl Default for MarketplaceFees {
    fn default() -> Self {
        Self {
            shopee: Decimal::from(12),
            mercadolivre: Decimal::from(16),
            amazon: Decimal::from(15),
        }
    }
}

impl MarketplaceFees {
    pub fn fee(&self, channel: Channel) -> Decimal {
        match channel {
            Channel::Shopee => self.shopee,
            Channel::MercadoLivre => self.mercadolivre,
            Channel::Amazon => self.amazon,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, Decimal)> + '_ {
        Channel::ALL.into_iter().map(|c| (c, self.fee(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub supplier: String,
    pub cost: Decimal,
    pub margin: Decimal,
    #[serde(default)]
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub unit_cost: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type", default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub total_spent: Decimal,
    pub last_order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItem {
    /// `price * quantity`, or `None` when it does not fit a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Sum of the item subtotals, or `None` on overflow.
pub fn items_total(items: &[OrderItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.subtotal()?))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn items_total(&self) -> Option<Decimal> {
        items_total(&self.items)
    }
}
