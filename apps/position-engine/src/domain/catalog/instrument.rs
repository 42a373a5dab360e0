//! Instrument descriptors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an instrument's quote currency relates to USD.
///
/// The category selects the conversion rule that turns a per-lot price move
/// and a per-lot notional value into USD amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteCategory {
    /// USD is the quote currency (EUR/USD). P&L is already USD.
    ForexDirect,
    /// USD is the base currency (USD/JPY). P&L converts at the stop price.
    ForexInverse,
    /// Neither leg is USD (AUD/CAD). Needs the USD/quote rate.
    ForexCross,
    /// USD-denominated CFD (metals, US indices, energy, softs, crypto).
    CfdUsd,
    /// CFD quoted in a non-USD currency (e.g. GER40 in EUR). Needs the
    /// quote/USD rate.
    CfdNonUsd,
}

impl QuoteCategory {
    /// Whether sizing this category needs a user-supplied exchange rate.
    #[must_use]
    pub const fn requires_exchange_rate(self) -> bool {
        matches!(self, Self::ForexCross | Self::CfdNonUsd)
    }
}

impl fmt::Display for QuoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForexDirect => write!(f, "FOREX_DIRECT"),
            Self::ForexInverse => write!(f, "FOREX_INVERSE"),
            Self::ForexCross => write!(f, "FOREX_CROSS"),
            Self::CfdUsd => write!(f, "CFD_USD"),
            Self::CfdNonUsd => write!(f, "CFD_NON_USD"),
        }
    }
}

/// An immutable, catalog-defined instrument descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Display symbol (e.g. "EUR/USD", "XAU/USD").
    pub symbol: String,
    /// Units of the base asset per 1.0 lot. Always positive.
    pub default_contract_size: Decimal,
    /// Quote-currency category driving the conversion rule.
    pub category: QuoteCategory,
    /// Quote currency name; meaningful only for categories that need a
    /// conversion rate.
    pub quote_currency: String,
}

impl Instrument {
    /// Create an instrument quoted in USD.
    #[must_use]
    pub fn new(symbol: &str, default_contract_size: Decimal, category: QuoteCategory) -> Self {
        Self::with_currency(symbol, default_contract_size, category, "USD")
    }

    /// Create an instrument with an explicit quote currency.
    #[must_use]
    pub fn with_currency(
        symbol: &str,
        default_contract_size: Decimal,
        category: QuoteCategory,
        quote_currency: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            default_contract_size,
            category,
            quote_currency: quote_currency.to_string(),
        }
    }

    /// Whether sizing this instrument needs a user-supplied exchange rate.
    #[must_use]
    pub const fn requires_exchange_rate(&self) -> bool {
        self.category.requires_exchange_rate()
    }

    /// The default contract size rendered for a text field.
    ///
    /// Integral sizes drop the fractional part ("100000", not "100000.0")
    /// so a host can seed its contract-size input directly.
    #[must_use]
    pub fn default_contract_size_text(&self) -> String {
        self.default_contract_size.normalize().to_string()
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.category)
    }
}
