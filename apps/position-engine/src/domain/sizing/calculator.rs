//! The two-constraint lot-size calculation.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::conversion;
use super::error::CalcError;
use super::types::{CalculationInput, CalculationResult, LimitingFactor};

const HUNDRED: Decimal = dec!(100);

/// Deterministic lot-size calculator.
///
/// Stateless: [`compute`](Self::compute) is a pure function of its input
/// and can be re-run on every host-side edit. Same input, same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LotSizeCalculator;

impl LotSizeCalculator {
    /// Recommend the largest lot size consistent with both the fixed-risk
    /// rule and the margin ceiling.
    ///
    /// The risk constraint caps the loss at `capital * risk_percent / 100`
    /// if price reaches the stop; the margin constraint caps the notional
    /// the account can collateralize at the given leverage. The smaller of
    /// the two wins, floored to the 0.01-lot grid.
    ///
    /// # Errors
    ///
    /// - [`CalcError::InvalidInput`] for non-positive prices, sizes,
    ///   capital, a risk percentage outside (0, 100], zero leverage,
    ///   `entry == stop`, or an intermediate quantity past the
    ///   representable decimal range.
    /// - [`CalcError::MissingRate`] when the instrument's category needs an
    ///   exchange rate and none was supplied.
    /// - [`CalcError::DivisionByZero`] when the per-lot loss or margin
    ///   degenerates to zero.
    pub fn compute(input: &CalculationInput) -> Result<CalculationResult, CalcError> {
        Self::validate(input)?;

        let risk_budget = input
            .capital
            .checked_mul(input.risk_percent)
            .ok_or_else(|| CalcError::overflow("risk budget"))?
            / HUNDRED;

        let loss_per_lot = conversion::loss_per_lot(
            &input.instrument,
            input.contract_size,
            input.entry_price,
            input.stop_price,
            input.exchange_rate,
        )?;
        if loss_per_lot <= Decimal::ZERO {
            return Err(CalcError::DivisionByZero {
                quantity: "loss per lot",
            });
        }
        let risk_lots = risk_budget
            .checked_div(loss_per_lot)
            .ok_or_else(|| CalcError::overflow("risk lots"))?;

        let notional_per_lot = conversion::notional_per_lot(
            &input.instrument,
            input.contract_size,
            input.entry_price,
            input.exchange_rate,
        )?;
        let margin_per_lot = notional_per_lot / Decimal::from(input.leverage);
        if margin_per_lot <= Decimal::ZERO {
            return Err(CalcError::DivisionByZero {
                quantity: "margin per lot",
            });
        }
        let margin_lots = input
            .capital
            .checked_div(margin_per_lot)
            .ok_or_else(|| CalcError::overflow("margin lots"))?;

        let final_lots = risk_lots.min(margin_lots);
        let limiting_factor = if margin_lots < risk_lots {
            LimitingFactor::Margin
        } else {
            LimitingFactor::Risk
        };

        tracing::debug!(
            symbol = %input.instrument.symbol,
            category = %input.instrument.category,
            %risk_lots,
            %margin_lots,
            %limiting_factor,
            "lot size computed"
        );

        Ok(CalculationResult {
            lot_size: floor_to_lot_step(final_lots),
            margin_per_lot: margin_per_lot.round_dp(2),
            limiting_factor,
            margin_lots,
        })
    }

    fn validate(input: &CalculationInput) -> Result<(), CalcError> {
        for (field, value) in [
            ("entry_price", input.entry_price),
            ("stop_price", input.stop_price),
            ("contract_size", input.contract_size),
            ("capital", input.capital),
        ] {
            if value <= Decimal::ZERO {
                return Err(CalcError::InvalidInput {
                    field,
                    message: "must be positive".to_string(),
                });
            }
        }
        if input.risk_percent <= Decimal::ZERO || input.risk_percent > HUNDRED {
            return Err(CalcError::InvalidInput {
                field: "risk_percent",
                message: "must be in (0, 100]".to_string(),
            });
        }
        if input.leverage == 0 {
            return Err(CalcError::InvalidInput {
                field: "leverage",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Floor to the 0.01-lot grid platforms quantize orders to.
///
/// Rounding up could authorize a position past the risk or margin ceiling,
/// so the fractional remainder is always dropped.
fn floor_to_lot_step(lots: Decimal) -> Decimal {
    // Inputs are validated positive, so truncation and floor agree.
    lots.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}
