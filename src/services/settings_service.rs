use crate::{
    dto::settings::{Settings, UpdateSettingsRequest},
    error::AppResult,
    persistence::Slot,
    pricing::validate_fees,
    response::{ApiResponse, Meta},
    services::non_negative,
    state::AppState,
};

pub async fn get_settings(state: &AppState) -> AppResult<ApiResponse<Settings>> {
    let store = state.store.read().await;
    let settings = Settings {
        fees: store.fees,
        default_shipping_cost: store.default_shipping_cost,
    };
    Ok(ApiResponse::success("Settings", settings, None))
}

/// Every fee must stay in `[0, 100)` and shipping must not be negative; on
/// any violation nothing is changed.
pub async fn update_settings(
    state: &AppState,
    payload: UpdateSettingsRequest,
) -> AppResult<ApiResponse<Settings>> {
    let shipping = payload
        .default_shipping_cost
        .map(|cost| non_negative("defaultShippingCost", cost))
        .transpose()?;

    let mut store = state.store.write().await;
    let mut touched = Vec::new();

    let fees = match &payload.fees {
        Some(patch) => {
            let fees = patch.apply_to(&store.fees);
            validate_fees(&fees)?;
            Some(fees)
        }
        None => None,
    };

    if let Some(fees) = fees {
        store.fees = fees;
        touched.push(Slot::Fees);
    }
    if let Some(shipping) = shipping {
        store.default_shipping_cost = shipping;
        touched.push(Slot::Shipping);
    }
    state.mirror.persist(&store, &touched).await;

    let settings = Settings {
        fees: store.fees,
        default_shipping_cost: store.default_shipping_cost,
    };
    tracing::info!(
        shopee = %settings.fees.shopee,
        mercadolivre = %settings.fees.mercadolivre,
        amazon = %settings.fees.amazon,
        shipping = %settings.default_shipping_cost,
        "settings updated"
    );
    Ok(ApiResponse::success(
        "Settings updated",
        settings,
        Some(Meta::empty()),
    ))
}
