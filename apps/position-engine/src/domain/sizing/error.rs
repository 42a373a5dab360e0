//! Error types for the sizing engine.

use thiserror::Error;

/// Error during instrument lookup or lot-size calculation.
///
/// Every variant carries a hint suitable for direct display; the
/// application layer recovers all of them locally and none abort the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Unparseable or out-of-range input value.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// Name of the offending input field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A required exchange rate is absent or zero.
    #[error("exchange rate required: enter the current {pair} price")]
    MissingRate {
        /// The pair whose rate must be supplied (e.g. "USD/CAD").
        pair: String,
    },

    /// A per-lot quantity degenerated to zero, which would poison every
    /// later division.
    #[error("cannot size position: {quantity} is zero")]
    DivisionByZero {
        /// The quantity that came out zero.
        quantity: &'static str,
    },

    /// Unknown instrument symbol.
    #[error("unknown instrument: {symbol}")]
    NotFound {
        /// The symbol that was requested.
        symbol: String,
    },
}

impl CalcError {
    /// Arithmetic left the representable decimal range.
    pub(crate) fn overflow(quantity: &'static str) -> Self {
        Self::InvalidInput {
            field: quantity,
            message: "exceeds the representable range".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rate_names_the_pair() {
        let err = CalcError::MissingRate {
            pair: "EUR/USD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "exchange rate required: enter the current EUR/USD price"
        );
    }

    #[test]
    fn invalid_input_names_the_field() {
        let err = CalcError::InvalidInput {
            field: "stop_price",
            message: "stop price cannot equal entry price".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("stop_price"));
        assert!(msg.contains("cannot equal entry price"));
    }

    #[test]
    fn calc_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::NotFound {
            symbol: "XYZ".to_string(),
        });
        assert!(err.to_string().contains("XYZ"));
    }
}
