//! Compute Lot Size Use Case

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::application::dto::{CalculationRequestDto, CalculationResponseDto};
use crate::application::ports::SettingsStorePort;
use crate::domain::catalog::InstrumentCatalog;
use crate::domain::sizing::{
    CalculationInput, CalculationResult, LimitingFactor, LotSizeCalculator,
};

/// Use case turning raw host input into a rendered sizing recommendation.
///
/// Errors never escape: anything that prevents a number (a half-typed
/// price, a missing rate, an unknown symbol) becomes the response's status
/// text, which is exactly how a live-updating calculator should degrade.
pub struct ComputeLotSizeUseCase<S>
where
    S: SettingsStorePort,
{
    catalog: InstrumentCatalog,
    settings: Arc<S>,
}

impl<S> ComputeLotSizeUseCase<S>
where
    S: SettingsStorePort,
{
    /// Create a new use case over the built-in catalog.
    pub fn new(settings: Arc<S>) -> Self {
        Self {
            catalog: InstrumentCatalog::builtin(),
            settings,
        }
    }

    /// The catalog backing symbol lookups, in display order.
    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    /// Execute one calculation.
    pub fn execute(&self, request: &CalculationRequestDto) -> CalculationResponseDto {
        let instrument = match self.catalog.select(&request.symbol) {
            Ok(instrument) => instrument,
            Err(err) => {
                tracing::warn!(symbol = %request.symbol, "calculation for unknown symbol");
                return CalculationResponseDto::not_computable(err.to_string());
            }
        };

        let (Some(entry_price), Some(stop_price), Some(contract_size)) = (
            parse_positive(&request.entry_price),
            parse_positive(&request.stop_price),
            parse_positive(&request.contract_size),
        ) else {
            return CalculationResponseDto::not_computable(
                "enter the entry price, stop price and contract size",
            );
        };

        let input = CalculationInput {
            instrument: instrument.clone(),
            entry_price,
            stop_price,
            contract_size,
            exchange_rate: parse_positive(&request.exchange_rate),
            capital: self.settings.initial_capital(),
            risk_percent: self.settings.stop_loss_percentage(),
            leverage: self.settings.leverage(),
        };

        match LotSizeCalculator::compute(&input) {
            Ok(result) => render(&result),
            Err(err) => {
                tracing::debug!(symbol = %request.symbol, %err, "calculation not possible");
                CalculationResponseDto::not_computable(err.to_string())
            }
        }
    }
}

/// Parse a text field as a positive decimal; anything else counts as
/// "not entered yet".
fn parse_positive(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim())
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

fn render(result: &CalculationResult) -> CalculationResponseDto {
    let status = match result.limiting_factor {
        LimitingFactor::Risk => "sized by risk limit".to_string(),
        LimitingFactor::Margin => {
            let max_lots = result
                .margin_lots
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("capped by leverage (margin allows at most {max_lots:.2} lots)")
        }
    };

    CalculationResponseDto {
        lot_size: format!("{:.2}", result.lot_size),
        margin_per_lot: format!("margin per lot: ${:.2}", result.margin_per_lot),
        status,
    }
}
