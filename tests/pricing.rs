use gestor_criativo_api::{
    models::{Channel, MarketplaceFees},
    pricing::{PricingError, calculate_pricing, validate_fees},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn direct_and_marketplace_prices_for_reference_example() {
    let fees = MarketplaceFees::default();
    let result = calculate_pricing(dec!(10), dec!(50), dec!(0), &fees).unwrap();

    assert_eq!(result.landed_cost, dec!(10));
    assert_eq!(result.direct_price, dec!(15));
    assert_eq!(result.profits.direct, dec!(5));

    let shopee = result.market_price(Channel::Shopee).unwrap();
    assert_eq!(shopee.round_dp(2), dec!(17.05));
    assert_eq!(result.profit(Channel::Shopee).unwrap().round_dp(2), dec!(5));

    assert_eq!(
        result.market_price(Channel::MercadoLivre).unwrap().round_dp(2),
        dec!(17.86)
    );
    assert_eq!(
        result.market_price(Channel::Amazon).unwrap().round_dp(2),
        dec!(17.65)
    );
}

#[test]
fn shipping_is_part_of_landed_cost() {
    let fees = MarketplaceFees::default();
    let result = calculate_pricing(dec!(20), dec!(100), dec!(5), &fees).unwrap();

    assert_eq!(result.landed_cost, dec!(25));
    assert_eq!(result.direct_price, dec!(50));
    assert_eq!(result.profits.direct, dec!(25));
}

#[test]
fn every_channel_nets_the_direct_profit() {
    let tolerance = dec!(0.000000001);
    let fee_tables = [
        MarketplaceFees::default(),
        MarketplaceFees {
            shopee: dec!(0),
            mercadolivre: dec!(50),
            amazon: dec!(99.99),
        },
        MarketplaceFees {
            shopee: dec!(33.3),
            mercadolivre: dec!(7.25),
            amazon: dec!(1),
        },
    ];

    for fees in &fee_tables {
        for (cost, margin, shipping) in [
            (dec!(0), dec!(0), dec!(0)),
            (dec!(12.5), dec!(80), dec!(3.2)),
            (dec!(999.99), dec!(15), dec!(0)),
            (dec!(1), dec!(250), dec!(19.9)),
        ] {
            let result = calculate_pricing(cost, margin, shipping, fees).unwrap();
            for channel in Channel::ALL {
                let price = result.market_price(channel).unwrap();
                let fee = fees.fee(channel);
                let net = price * (Decimal::ONE - fee / dec!(100)) - result.landed_cost;
                assert!(
                    (net - result.profits.direct).abs() < tolerance,
                    "{channel:?} nets {net}, direct nets {}",
                    result.profits.direct
                );
                let profit = result.profit(channel).unwrap();
                assert!((profit - result.profits.direct).abs() < tolerance);
            }
        }
    }
}

#[test]
fn calculation_is_deterministic() {
    let fees = MarketplaceFees::default();
    let first = calculate_pricing(dec!(7.3), dec!(42), dec!(1.1), &fees).unwrap();
    let second = calculate_pricing(dec!(7.3), dec!(42), dec!(1.1), &fees).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fee_of_one_hundred_or_more_is_rejected() {
    let mut fees = MarketplaceFees::default();
    fees.amazon = dec!(100);
    let err = calculate_pricing(dec!(10), dec!(50), dec!(0), &fees).unwrap_err();
    assert_eq!(
        err,
        PricingError::FeeOutOfRange {
            channel: "amazon",
            fee: dec!(100)
        }
    );

    fees.amazon = dec!(250);
    assert!(validate_fees(&fees).is_err());
}

#[test]
fn negative_fee_and_inputs_are_rejected() {
    let mut fees = MarketplaceFees::default();
    fees.shopee = dec!(-1);
    assert!(matches!(
        validate_fees(&fees),
        Err(PricingError::FeeOutOfRange { channel: "shopee", .. })
    ));

    let fees = MarketplaceFees::default();
    assert_eq!(
        calculate_pricing(dec!(-1), dec!(10), dec!(0), &fees).unwrap_err(),
        PricingError::NegativeInput("cost")
    );
    assert_eq!(
        calculate_pricing(dec!(1), dec!(-10), dec!(0), &fees).unwrap_err(),
        PricingError::NegativeInput("margin")
    );
    assert_eq!(
        calculate_pricing(dec!(1), dec!(10), dec!(-0.5), &fees).unwrap_err(),
        PricingError::NegativeInput("shipping cost")
    );
}

#[test]
fn rounded_result_uses_two_decimals() {
    let fees = MarketplaceFees::default();
    let result = calculate_pricing(dec!(10), dec!(50), dec!(0), &fees)
        .unwrap()
        .rounded(2);
    assert_eq!(result.market_price(Channel::Shopee), Some(dec!(17.05)));
    assert_eq!(result.profit(Channel::Amazon), Some(dec!(5.00)));
}

#[test]
fn result_serializes_profits_per_channel() {
    let fees = MarketplaceFees::default();
    let result = calculate_pricing(dec!(10), dec!(50), dec!(0), &fees).unwrap();
    let json = serde_json::to_value(result.rounded(2)).unwrap();

    let direct: Decimal = json["directPrice"].to_string().parse().unwrap();
    assert_eq!(direct, dec!(15));
    assert!(json["marketPrices"]["mercadolivre"].is_number());
    assert!(json["profits"]["direct"].is_number());
    assert!(json["profits"]["shopee"].is_number());
}

#[test]
fn direct_pricing_ignores_marketplace_fees() {
    let (landed, direct) =
        gestor_criativo_api::pricing::direct_pricing(dec!(10), dec!(50), dec!(2)).unwrap();
    assert_eq!(landed, dec!(12));
    assert_eq!(direct, dec!(18));

    assert_eq!(
        gestor_criativo_api::pricing::direct_pricing(Decimal::MAX, dec!(50), dec!(0)).unwrap_err(),
        PricingError::Overflow
    );
}
