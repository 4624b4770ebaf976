//! Retail price simulation across direct sale and marketplaces.
//!
//! Margin is applied on the landed cost (purchase cost plus shipping). Each
//! marketplace price is grossed up so that, once the marketplace takes its
//! commission on its own sale price, the seller nets the direct price:
//!
//! ```text
//! landed  = cost + shipping
//! direct  = landed * (1 + margin / 100)
//! price_c = direct / (1 - fee_c / 100)
//! profit_c = price_c - price_c * fee_c / 100 - landed
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{Channel, MarketplaceFees};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("fee for {channel} must be at least 0 and below 100, got {fee}")]
    FeeOutOfRange { channel: &'static str, fee: Decimal },

    #[error("{0} must not be negative")]
    NegativeInput(&'static str),

    #[error("price calculation overflowed")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profits {
    pub direct: Decimal,
    #[serde(flatten)]
    pub channels: BTreeMap<Channel, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub landed_cost: Decimal,
    pub direct_price: Decimal,
    #[schema(value_type = Object)]
    pub market_prices: BTreeMap<Channel, Decimal>,
    #[schema(value_type = Object)]
    pub profits: Profits,
}

impl PricingResult {
    pub fn market_price(&self, channel: Channel) -> Option<Decimal> {
        self.market_prices.get(&channel).copied()
    }

    pub fn profit(&self, channel: Channel) -> Option<Decimal> {
        self.profits.channels.get(&channel).copied()
    }

    /// Copy with every amount rounded to `dp` decimal places, for display.
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |map: &BTreeMap<Channel, Decimal>| {
            map.iter()
                .map(|(channel, value)| (*channel, value.round_dp(dp)))
                .collect()
        };
        Self {
            landed_cost: self.landed_cost.round_dp(dp),
            direct_price: self.direct_price.round_dp(dp),
            market_prices: round(&self.market_prices),
            profits: Profits {
                direct: self.profits.direct.round_dp(dp),
                channels: round(&self.profits.channels),
            },
        }
    }
}

/// Rejects any fee outside `[0, 100)`.
pub fn validate_fees(fees: &MarketplaceFees) -> Result<(), PricingError> {
    for (channel, fee) in fees.iter() {
        if fee < Decimal::ZERO || fee >= Decimal::ONE_HUNDRED {
            return Err(PricingError::FeeOutOfRange {
                channel: channel.as_str(),
                fee,
            });
        }
    }
    Ok(())
}

/// Landed cost and direct sale price. Marketplace fees play no part.
pub fn direct_pricing(
    cost: Decimal,
    margin: Decimal,
    shipping_cost: Decimal,
) -> Result<(Decimal, Decimal), PricingError> {
    if cost < Decimal::ZERO {
        return Err(PricingError::NegativeInput("cost"));
    }
    if margin < Decimal::ZERO {
        return Err(PricingError::NegativeInput("margin"));
    }
    if shipping_cost < Decimal::ZERO {
        return Err(PricingError::NegativeInput("shipping cost"));
    }

    let landed_cost = cost
        .checked_add(shipping_cost)
        .ok_or(PricingError::Overflow)?;
    let markup = margin
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|m| Decimal::ONE.checked_add(m))
        .ok_or(PricingError::Overflow)?;
    let direct_price = landed_cost
        .checked_mul(markup)
        .ok_or(PricingError::Overflow)?;
    Ok((landed_cost, direct_price))
}

pub fn calculate_pricing(
    cost: Decimal,
    margin: Decimal,
    shipping_cost: Decimal,
    fees: &MarketplaceFees,
) -> Result<PricingResult, PricingError> {
    let (landed_cost, direct_price) = direct_pricing(cost, margin, shipping_cost)?;
    validate_fees(fees)?;

    let mut market_prices = BTreeMap::new();
    let mut channel_profits = BTreeMap::new();
    for (channel, fee) in fees.iter() {
        let rate = fee / Decimal::ONE_HUNDRED;
        let price = direct_price
            .checked_div(Decimal::ONE - rate)
            .ok_or(PricingError::Overflow)?;
        let commission = price.checked_mul(rate).ok_or(PricingError::Overflow)?;
        market_prices.insert(channel, price);
        channel_profits.insert(channel, price - commission - landed_cost);
    }

    Ok(PricingResult {
        landed_cost,
        direct_price,
        market_prices,
        profits: Profits {
            direct: direct_price - landed_cost,
            channels: channel_profits,
        },
    })
}
