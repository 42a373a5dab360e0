//! The built-in instrument catalog.

use rust_decimal_macros::dec;

use super::instrument::{Instrument, QuoteCategory};
use crate::domain::sizing::CalcError;

/// The fixed, ordered instrument list.
///
/// Order is display order. Contract sizes are the common retail-platform
/// defaults; hosts let the user override them per calculation because
/// platforms disagree (index CFDs in particular ship with 1, 10 or 100).
#[derive(Debug, Clone)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    /// Build the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        use QuoteCategory::{CfdNonUsd, CfdUsd, ForexDirect, ForexInverse};

        let instruments = vec![
            // Forex, USD quote
            Instrument::new("EUR/USD", dec!(100000), ForexDirect),
            Instrument::new("GBP/USD", dec!(100000), ForexDirect),
            Instrument::new("AUD/USD", dec!(100000), ForexDirect),
            Instrument::new("NZD/USD", dec!(100000), ForexDirect),
            // Forex, USD base
            Instrument::new("USD/CAD", dec!(100000), ForexInverse),
            Instrument::new("USD/CHF", dec!(100000), ForexInverse),
            Instrument::new("USD/CNH", dec!(100000), ForexInverse),
            Instrument::new("USD/JPY", dec!(100000), ForexInverse),
            Instrument::new("USD/SGD", dec!(100000), ForexInverse),
            // Metals: XAU 100 oz, XAG 5000 oz, XCU 25000 lb, XPT 50 oz, XPD 100 oz
            Instrument::new("XAU/USD", dec!(100), CfdUsd),
            Instrument::new("XAGUSD", dec!(5000), CfdUsd),
            Instrument::new("XCU/USD", dec!(25000), CfdUsd),
            Instrument::new("XPT/USD", dec!(50), CfdUsd),
            Instrument::new("XPD/USD", dec!(100), CfdUsd),
            // US indices
            Instrument::new("US500.cash", dec!(1), CfdUsd),
            Instrument::new("US30.cash", dec!(1), CfdUsd),
            Instrument::new("US100.cash", dec!(1), CfdUsd),
            // Non-USD indices
            Instrument::with_currency("GER40.cash", dec!(1), CfdNonUsd, "EUR"),
            Instrument::with_currency("UK100.cash", dec!(1), CfdNonUsd, "GBP"),
            // Energy: heating oil in gallons, natural gas in mmBtu
            Instrument::new("Heatoil.c", dec!(42000), CfdUsd),
            Instrument::new("NatGas.cash", dec!(10000), CfdUsd),
            // Agriculture: coffee/sugar/cotton in lb, grains in bushels, cocoa in t
            Instrument::new("Coffee.c", dec!(37500), CfdUsd),
            Instrument::new("Wheat.c", dec!(5000), CfdUsd),
            Instrument::new("Corn.c", dec!(5000), CfdUsd),
            Instrument::new("Soybean.c", dec!(5000), CfdUsd),
            Instrument::new("Sugar.c", dec!(112000), CfdUsd),
            Instrument::new("Cotton.c", dec!(50000), CfdUsd),
            Instrument::new("Cocoa.c", dec!(10), CfdUsd),
            // Crypto
            Instrument::new("BTC/USD", dec!(1), CfdUsd),
            Instrument::new("ETH/USD", dec!(1), CfdUsd),
            Instrument::new("SOL/USD", dec!(1), CfdUsd),
        ];

        Self { instruments }
    }

    /// All instruments in display order.
    #[must_use]
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Look up an instrument by its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NotFound`] when no instrument carries the
    /// symbol.
    pub fn select(&self, symbol: &str) -> Result<&Instrument, CalcError> {
        self.instruments
            .iter()
            .find(|instrument| instrument.symbol == symbol)
            .ok_or_else(|| CalcError::NotFound {
                symbol: symbol.to_string(),
            })
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn builtin_catalog_is_ordered() {
        let catalog = InstrumentCatalog::builtin();
        let instruments = catalog.instruments();

        assert_eq!(instruments.len(), 31);
        assert_eq!(instruments[0].symbol, "EUR/USD");
        assert_eq!(instruments[3].symbol, "NZD/USD");
        assert_eq!(instruments.last().unwrap().symbol, "SOL/USD");
    }

    #[test]
    fn every_default_contract_size_is_positive() {
        let catalog = InstrumentCatalog::builtin();
        for instrument in catalog.instruments() {
            assert!(
                instrument.default_contract_size > Decimal::ZERO,
                "{} has non-positive contract size",
                instrument.symbol
            );
        }
    }

    #[test]
    fn select_finds_known_symbols() {
        let catalog = InstrumentCatalog::builtin();

        let gold = catalog.select("XAU/USD").unwrap();
        assert_eq!(gold.default_contract_size, dec!(100));
        assert_eq!(gold.category, QuoteCategory::CfdUsd);

        let yen = catalog.select("USD/JPY").unwrap();
        assert_eq!(yen.category, QuoteCategory::ForexInverse);
    }

    #[test]
    fn select_unknown_symbol_is_not_found() {
        let catalog = InstrumentCatalog::builtin();
        let err = catalog.select("XYZ/ABC").unwrap_err();
        assert_eq!(
            err,
            CalcError::NotFound {
                symbol: "XYZ/ABC".to_string()
            }
        );
    }

    #[test]
    fn rate_requiring_instruments_are_the_non_usd_indices() {
        let catalog = InstrumentCatalog::builtin();
        let needs_rate: Vec<&str> = catalog
            .instruments()
            .iter()
            .filter(|instrument| instrument.requires_exchange_rate())
            .map(|instrument| instrument.symbol.as_str())
            .collect();

        assert_eq!(needs_rate, vec!["GER40.cash", "UK100.cash"]);
    }

    #[test]
    fn non_usd_indices_carry_their_quote_currency() {
        let catalog = InstrumentCatalog::builtin();
        assert_eq!(catalog.select("GER40.cash").unwrap().quote_currency, "EUR");
        assert_eq!(catalog.select("UK100.cash").unwrap().quote_currency, "GBP");
    }
}
