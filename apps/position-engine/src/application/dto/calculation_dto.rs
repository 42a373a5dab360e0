//! Calculation request/response DTOs.
//!
//! The request carries field contents exactly as the host's text inputs
//! hold them; parsing happens inside the use case so a half-typed number
//! degrades to a status message instead of an error path in the host.

use serde::{Deserialize, Serialize};

/// One calculation request, rebuilt by the host on every edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequestDto {
    /// Catalog symbol of the selected instrument.
    pub symbol: String,
    /// Entry price text.
    pub entry_price: String,
    /// Stop-loss price text.
    pub stop_price: String,
    /// Contract size text (pre-filled with the instrument default).
    pub contract_size: String,
    /// Exchange-rate text; empty when the category needs none or the user
    /// has not typed one yet.
    pub exchange_rate: String,
}

/// Rendered calculation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponseDto {
    /// Recommended lot size with two decimals ("0.20"; "0.00" when the
    /// inputs do not yet yield a number).
    pub lot_size: String,
    /// Margin per lot ("margin per lot: $972.00"; empty when not computable).
    pub margin_per_lot: String,
    /// Limiting-factor explanation or the error hint.
    pub status: String,
}

impl CalculationResponseDto {
    /// Response shown while the inputs do not yet yield a number.
    #[must_use]
    pub fn not_computable(status: impl Into<String>) -> Self {
        Self {
            lot_size: "0.00".to_string(),
            margin_per_lot: String::new(),
            status: status.into(),
        }
    }
}
