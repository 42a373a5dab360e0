//! Core types for lot-size calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::Instrument;

/// Which constraint produced the final lot size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitingFactor {
    /// The fixed-risk budget was the binding constraint.
    Risk,
    /// Available margin was the binding constraint.
    Margin,
}

impl fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Risk => write!(f, "RISK"),
            Self::Margin => write!(f, "MARGIN"),
        }
    }
}

/// Input for one lot-size calculation.
///
/// Built fresh on every host-side edit and discarded after rendering;
/// nothing here is retained between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The selected instrument.
    pub instrument: Instrument,
    /// Intended entry price.
    pub entry_price: Decimal,
    /// Stop-loss price.
    pub stop_price: Decimal,
    /// Contract size for this calculation; seeded from the instrument's
    /// default but independently overridable.
    pub contract_size: Decimal,
    /// User-supplied conversion rate; required only for categories that
    /// cannot reach USD on their own.
    pub exchange_rate: Option<Decimal>,
    /// Account capital in USD.
    pub capital: Decimal,
    /// Risk tolerance as a percentage of capital, in (0, 100].
    pub risk_percent: Decimal,
    /// Account leverage (e.g. 20 for 1:20).
    pub leverage: u32,
}

/// Result of a successful lot-size calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Recommended trade size in lots, floored to the 0.01 grid.
    pub lot_size: Decimal,
    /// Margin locked by one lot, USD, rounded to cents.
    pub margin_per_lot: Decimal,
    /// Which constraint bound the recommendation.
    pub limiting_factor: LimitingFactor,
    /// Lots the margin ceiling alone would allow, unrounded; hosts use it
    /// to explain a margin-limited result.
    pub margin_lots: Decimal,
}
