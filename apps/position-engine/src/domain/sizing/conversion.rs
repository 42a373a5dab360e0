//! Quote-currency conversion rules.
//!
//! Each [`QuoteCategory`] maps to a formula that converts a raw
//! price-difference-times-contract-size quantity into USD, and a raw
//! notional quantity into USD. No rounding happens at this stage.

use rust_decimal::Decimal;

use super::error::CalcError;
use crate::domain::catalog::{Instrument, QuoteCategory};

/// USD loss on one lot if price moves from `entry` to `stop`.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] when `entry == stop` (a zero move cannot
///   anchor a risk budget and would divide by zero downstream), when a
///   supplied exchange rate is negative, or when an intermediate quantity
///   exceeds the representable decimal range.
/// - [`CalcError::MissingRate`] when the category needs an exchange rate
///   and none (or a zero one) was supplied.
pub fn loss_per_lot(
    instrument: &Instrument,
    contract_size: Decimal,
    entry: Decimal,
    stop: Decimal,
    exchange_rate: Option<Decimal>,
) -> Result<Decimal, CalcError> {
    let price_diff = entry
        .checked_sub(stop)
        .ok_or_else(|| CalcError::overflow("price difference"))?
        .abs();
    if price_diff.is_zero() {
        return Err(CalcError::InvalidInput {
            field: "stop_price",
            message: "stop price cannot equal entry price".to_string(),
        });
    }

    let raw = contract_size
        .checked_mul(price_diff)
        .ok_or_else(|| CalcError::overflow("loss per lot"))?;
    match instrument.category {
        // Quote currency is already USD (EUR/USD, XAU/USD, US500, BTC/USD).
        QuoteCategory::ForexDirect | QuoteCategory::CfdUsd => Ok(raw),
        // USD listed first (USD/JPY): the move is in quote currency, so
        // convert at the closing (stop) price.
        QuoteCategory::ForexInverse => raw
            .checked_div(stop)
            .ok_or_else(|| CalcError::overflow("loss per lot")),
        // Neither leg is USD (AUD/CAD): divide by the USD/quote rate.
        QuoteCategory::ForexCross => raw
            .checked_div(required_rate(instrument, exchange_rate)?)
            .ok_or_else(|| CalcError::overflow("loss per lot")),
        // Quoted in EUR, GBP, ...: multiply by the quote/USD rate.
        QuoteCategory::CfdNonUsd => raw
            .checked_mul(required_rate(instrument, exchange_rate)?)
            .ok_or_else(|| CalcError::overflow("loss per lot")),
    }
}

/// USD notional value of one lot at the entry price.
///
/// For [`QuoteCategory::ForexCross`] the base-currency value
/// (`contract_size * entry`) stands in for a proper USD conversion; a
/// precise cross notional would need a second rate the host does not
/// collect.
///
/// # Errors
///
/// - [`CalcError::MissingRate`] when the category is
///   [`QuoteCategory::CfdNonUsd`] and no rate was supplied.
/// - [`CalcError::InvalidInput`] for a negative rate or a notional past the
///   representable decimal range.
pub fn notional_per_lot(
    instrument: &Instrument,
    contract_size: Decimal,
    entry: Decimal,
    exchange_rate: Option<Decimal>,
) -> Result<Decimal, CalcError> {
    let overflow = || CalcError::overflow("notional per lot");
    match instrument.category {
        QuoteCategory::ForexDirect | QuoteCategory::CfdUsd => {
            contract_size.checked_mul(entry).ok_or_else(overflow)
        }
        // One lot of USD/JPY is contract_size USD by definition.
        QuoteCategory::ForexInverse => Ok(contract_size),
        // Approximation, see above.
        QuoteCategory::ForexCross => contract_size.checked_mul(entry).ok_or_else(overflow),
        QuoteCategory::CfdNonUsd => {
            let rate = required_rate(instrument, exchange_rate)?;
            contract_size
                .checked_mul(entry)
                .and_then(|notional| notional.checked_mul(rate))
                .ok_or_else(overflow)
        }
    }
}

fn required_rate(
    instrument: &Instrument,
    exchange_rate: Option<Decimal>,
) -> Result<Decimal, CalcError> {
    match exchange_rate {
        Some(rate) if rate > Decimal::ZERO => Ok(rate),
        Some(rate) if rate < Decimal::ZERO => Err(CalcError::InvalidInput {
            field: "exchange_rate",
            message: "must be positive".to_string(),
        }),
        // Absent or zero: the user has not entered one yet.
        _ => Err(CalcError::MissingRate {
            pair: rate_pair(instrument),
        }),
    }
}

/// The pair whose price the user must supply for a conversion.
///
/// Crosses convert through USD/quote (AUD/CAD needs USD/CAD); non-USD CFDs
/// convert through quote/USD (GER40 needs EUR/USD).
fn rate_pair(instrument: &Instrument) -> String {
    match instrument.category {
        QuoteCategory::ForexCross => format!("USD/{}", instrument.quote_currency),
        _ => format!("{}/USD", instrument.quote_currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn instrument(category: QuoteCategory, quote_currency: &str) -> Instrument {
        Instrument::with_currency("TEST", dec!(1), category, quote_currency)
    }

    #[test_case(QuoteCategory::ForexDirect; "forex direct")]
    #[test_case(QuoteCategory::CfdUsd; "usd cfd")]
    fn usd_quoted_loss_is_exact(category: QuoteCategory) {
        let loss = loss_per_lot(
            &instrument(category, "USD"),
            dec!(100000),
            dec!(1.1000),
            dec!(1.0950),
            None,
        )
        .unwrap();
        assert_eq!(loss, dec!(100000) * dec!(0.0050));
    }

    #[test]
    fn inverse_loss_divides_by_stop() {
        let loss = loss_per_lot(
            &instrument(QuoteCategory::ForexInverse, "JPY"),
            dec!(100000),
            dec!(150.00),
            dec!(149.50),
            None,
        )
        .unwrap();
        // loss * stop == contract_size * |entry - stop|
        assert_eq!((loss * dec!(149.50)).round_dp(10), dec!(50000));
    }

    #[test]
    fn cross_loss_divides_by_usd_quote_rate() {
        let loss = loss_per_lot(
            &instrument(QuoteCategory::ForexCross, "CAD"),
            dec!(100000),
            dec!(0.9000),
            dec!(0.8950),
            Some(dec!(1.3500)),
        )
        .unwrap();
        assert_eq!(loss.round_dp(4), (dec!(500) / dec!(1.3500)).round_dp(4));
    }

    #[test]
    fn non_usd_cfd_loss_multiplies_by_quote_usd_rate() {
        let loss = loss_per_lot(
            &instrument(QuoteCategory::CfdNonUsd, "EUR"),
            dec!(1),
            dec!(18000),
            dec!(17950),
            Some(dec!(1.08)),
        )
        .unwrap();
        assert_eq!(loss, dec!(54));
    }

    #[test]
    fn loss_uses_absolute_price_difference() {
        let long_stop_below = loss_per_lot(
            &instrument(QuoteCategory::CfdUsd, "USD"),
            dec!(100),
            dec!(2000),
            dec!(1990),
            None,
        )
        .unwrap();
        let short_stop_above = loss_per_lot(
            &instrument(QuoteCategory::CfdUsd, "USD"),
            dec!(100),
            dec!(1990),
            dec!(2000),
            None,
        )
        .unwrap();
        assert_eq!(long_stop_below, short_stop_above);
    }

    #[test]
    fn equal_entry_and_stop_is_invalid() {
        let err = loss_per_lot(
            &instrument(QuoteCategory::ForexDirect, "USD"),
            dec!(100000),
            dec!(1.2345),
            dec!(1.2345),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test_case(None; "absent")]
    #[test_case(Some(rust_decimal::Decimal::ZERO); "zero")]
    fn cross_without_rate_is_missing_rate(rate: Option<Decimal>) {
        let err = loss_per_lot(
            &instrument(QuoteCategory::ForexCross, "CAD"),
            dec!(100000),
            dec!(0.9000),
            dec!(0.8950),
            rate,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingRate {
                pair: "USD/CAD".to_string()
            }
        );
    }

    #[test]
    fn negative_rate_is_invalid_rather_than_missing() {
        let err = loss_per_lot(
            &instrument(QuoteCategory::ForexCross, "CAD"),
            dec!(100000),
            dec!(0.9000),
            dec!(0.8950),
            Some(dec!(-1.35)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput {
                field: "exchange_rate",
                ..
            }
        ));
    }

    #[test]
    fn overflowing_loss_is_an_invalid_input() {
        let err = loss_per_lot(
            &instrument(QuoteCategory::ForexDirect, "USD"),
            dec!(100000),
            Decimal::MAX,
            dec!(1),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn overflowing_notional_is_an_invalid_input() {
        let err = notional_per_lot(
            &instrument(QuoteCategory::CfdUsd, "USD"),
            dec!(100000),
            Decimal::MAX,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn non_usd_cfd_without_rate_names_quote_usd_pair() {
        let err = loss_per_lot(
            &instrument(QuoteCategory::CfdNonUsd, "EUR"),
            dec!(1),
            dec!(18000),
            dec!(17950),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingRate {
                pair: "EUR/USD".to_string()
            }
        );
    }

    #[test_case(QuoteCategory::ForexDirect; "forex direct")]
    #[test_case(QuoteCategory::CfdUsd; "usd cfd")]
    #[test_case(QuoteCategory::ForexCross; "cross approximation")]
    fn notional_is_contract_times_entry(category: QuoteCategory) {
        let notional = notional_per_lot(
            &instrument(category, "USD"),
            dec!(100000),
            dec!(1.1000),
            Some(dec!(1.3500)),
        )
        .unwrap();
        assert_eq!(notional, dec!(110000));
    }

    #[test]
    fn inverse_notional_is_the_contract_size() {
        let notional = notional_per_lot(
            &instrument(QuoteCategory::ForexInverse, "JPY"),
            dec!(100000),
            dec!(150.00),
            None,
        )
        .unwrap();
        assert_eq!(notional, dec!(100000));
    }

    #[test]
    fn non_usd_cfd_notional_converts_to_usd() {
        let notional = notional_per_lot(
            &instrument(QuoteCategory::CfdNonUsd, "EUR"),
            dec!(1),
            dec!(18000),
            Some(dec!(1.08)),
        )
        .unwrap();
        assert_eq!(notional, dec!(19440));
    }

    #[test]
    fn non_usd_cfd_notional_without_rate_is_missing_rate() {
        let err = notional_per_lot(
            &instrument(QuoteCategory::CfdNonUsd, "GBP"),
            dec!(1),
            dec!(8000),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingRate {
                pair: "GBP/USD".to_string()
            }
        );
    }
}
