use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

pub mod customer_service;
pub mod dashboard_service;
pub mod order_service;
pub mod pricing_service;
pub mod product_service;
pub mod settings_service;
pub mod supplier_service;

pub(crate) fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::bad_request(format!("{field} is required")))
}

pub(crate) fn non_blank(field: &str, value: String) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn required_text(field: &str, value: Option<String>) -> AppResult<String> {
    non_blank(field, required(field, value)?)
}

pub(crate) fn non_negative(field: &str, value: Decimal) -> AppResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(AppError::bad_request(format!("{field} must not be negative")));
    }
    Ok(value)
}

/// Blank strings are stored as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Lower-cased search needle, or `None` when there is nothing to search for.
pub(crate) fn search_needle(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

pub(crate) fn removed_json(removed: bool) -> serde_json::Value {
    serde_json::json!({ "removed": removed })
}
