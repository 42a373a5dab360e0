//! Calculator session service.
//!
//! A UI-toolkit-free mirror of a host calculator screen: one selected
//! instrument plus four text fields. Every mutation recomputes the result
//! from scratch (last write wins), so a host can bind each text change
//! directly to a setter and render whatever comes back.

use std::sync::Arc;

use crate::application::dto::{CalculationRequestDto, CalculationResponseDto};
use crate::application::ports::SettingsStorePort;
use crate::application::use_cases::ComputeLotSizeUseCase;
use crate::domain::catalog::Instrument;
use crate::domain::sizing::CalcError;

/// Index of the instrument selected when a session starts (NZD/USD).
const INITIAL_SELECTION: usize = 3;

/// Stateful companion for a host calculator screen.
pub struct CalculatorSession<S>
where
    S: SettingsStorePort,
{
    use_case: ComputeLotSizeUseCase<S>,
    selected: Instrument,
    entry_price: String,
    stop_price: String,
    contract_size: String,
    exchange_rate: String,
}

impl<S> CalculatorSession<S>
where
    S: SettingsStorePort,
{
    /// Start a session with the default selection and empty price fields.
    pub fn new(settings: Arc<S>) -> Self {
        let use_case = ComputeLotSizeUseCase::new(settings);
        let selected = use_case.catalog().instruments()[INITIAL_SELECTION].clone();
        let contract_size = selected.default_contract_size_text();

        Self {
            use_case,
            selected,
            entry_price: String::new(),
            stop_price: String::new(),
            contract_size,
            exchange_rate: String::new(),
        }
    }

    /// Currently selected instrument.
    pub fn selected_instrument(&self) -> &Instrument {
        &self.selected
    }

    /// Current contract-size text (pre-filled on selection).
    pub fn contract_size_text(&self) -> &str {
        &self.contract_size
    }

    /// Current exchange-rate text.
    pub fn exchange_rate_text(&self) -> &str {
        &self.exchange_rate
    }

    /// Select another catalog instrument.
    ///
    /// Resets the contract-size text to the new instrument's default and
    /// clears the exchange rate: a rate entered for one instrument rarely
    /// applies to the next.
    ///
    /// # Errors
    ///
    /// [`CalcError::NotFound`] when the symbol is not in the catalog; the
    /// session keeps its previous state.
    pub fn select_instrument(
        &mut self,
        symbol: &str,
    ) -> Result<CalculationResponseDto, CalcError> {
        let instrument = self.use_case.catalog().select(symbol)?.clone();
        self.contract_size = instrument.default_contract_size_text();
        self.exchange_rate.clear();
        self.selected = instrument;
        Ok(self.recompute())
    }

    /// Update the entry-price text and recompute.
    pub fn set_entry_price(&mut self, text: &str) -> CalculationResponseDto {
        self.entry_price = text.to_string();
        self.recompute()
    }

    /// Update the stop-price text and recompute.
    pub fn set_stop_price(&mut self, text: &str) -> CalculationResponseDto {
        self.stop_price = text.to_string();
        self.recompute()
    }

    /// Update the contract-size text and recompute.
    pub fn set_contract_size(&mut self, text: &str) -> CalculationResponseDto {
        self.contract_size = text.to_string();
        self.recompute()
    }

    /// Update the exchange-rate text and recompute.
    pub fn set_exchange_rate(&mut self, text: &str) -> CalculationResponseDto {
        self.exchange_rate = text.to_string();
        self.recompute()
    }

    /// Recompute from the current field contents.
    pub fn recompute(&self) -> CalculationResponseDto {
        self.use_case.execute(&CalculationRequestDto {
            symbol: self.selected.symbol.clone(),
            entry_price: self.entry_price.clone(),
            stop_price: self.stop_price.clone(),
            contract_size: self.contract_size.clone(),
            exchange_rate: self.exchange_rate.clone(),
        })
    }
}
