//! Settings Store Port (Driven Port)
//!
//! Interface to the persisted trader settings. The engine only ever reads
//! capital, risk tolerance and leverage; writes come from a host settings
//! screen and must persist immediately and independently of each other.

use std::sync::RwLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Capital assumed before the trader saves one: $10,000.
pub const DEFAULT_INITIAL_CAPITAL: Decimal = dec!(10000);

/// Default per-trade risk tolerance: 1% of capital.
pub const DEFAULT_STOP_LOSS_PERCENTAGE: Decimal = dec!(1);

/// Default account leverage: 1:20.
pub const DEFAULT_LEVERAGE: u32 = 20;

/// Failure while persisting or loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying storage failed.
    #[error("settings storage failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be encoded or decoded.
    #[error("settings record malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for reading and writing the persisted trader settings.
///
/// Getters are infallible: a missing value falls back to its documented
/// default. Setters persist before returning.
pub trait SettingsStorePort: Send + Sync {
    /// Account capital in USD.
    fn initial_capital(&self) -> Decimal;

    /// Per-trade risk tolerance as a percentage of capital.
    fn stop_loss_percentage(&self) -> Decimal;

    /// Account leverage.
    fn leverage(&self) -> u32;

    /// Persist a new capital value.
    fn set_initial_capital(&self, value: Decimal) -> Result<(), SettingsError>;

    /// Persist a new risk tolerance.
    fn set_stop_loss_percentage(&self, value: Decimal) -> Result<(), SettingsError>;

    /// Persist a new leverage.
    fn set_leverage(&self, value: u32) -> Result<(), SettingsError>;
}

#[derive(Debug, Clone)]
struct Settings {
    initial_capital: Decimal,
    stop_loss_percentage: Decimal,
    leverage: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            stop_loss_percentage: DEFAULT_STOP_LOSS_PERCENTAGE,
            leverage: DEFAULT_LEVERAGE,
        }
    }
}

/// In-memory implementation for tests and hosts without a data directory.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<Settings>,
}

impl InMemorySettingsStore {
    /// Create a store holding the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn write(&self, apply: impl FnOnce(&mut Settings)) {
        let mut settings = self
            .settings
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut settings);
    }
}

impl SettingsStorePort for InMemorySettingsStore {
    fn initial_capital(&self) -> Decimal {
        self.read().initial_capital
    }

    fn stop_loss_percentage(&self) -> Decimal {
        self.read().stop_loss_percentage
    }

    fn leverage(&self) -> u32 {
        self.read().leverage
    }

    fn set_initial_capital(&self, value: Decimal) -> Result<(), SettingsError> {
        self.write(|settings| settings.initial_capital = value);
        Ok(())
    }

    fn set_stop_loss_percentage(&self, value: Decimal) -> Result<(), SettingsError> {
        self.write(|settings| settings.stop_loss_percentage = value);
        Ok(())
    }

    fn set_leverage(&self, value: u32) -> Result<(), SettingsError> {
        self.write(|settings| settings.leverage = value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_starts_with_defaults() {
        let store = InMemorySettingsStore::new();
        assert_eq!(store.initial_capital(), dec!(10000));
        assert_eq!(store.stop_loss_percentage(), dec!(1));
        assert_eq!(store.leverage(), 20);
    }

    #[test]
    fn in_memory_setters_are_independent() {
        let store = InMemorySettingsStore::new();

        store.set_initial_capital(dec!(25000)).unwrap();
        assert_eq!(store.initial_capital(), dec!(25000));
        assert_eq!(store.stop_loss_percentage(), dec!(1));

        store.set_stop_loss_percentage(dec!(2.5)).unwrap();
        store.set_leverage(100).unwrap();
        assert_eq!(store.stop_loss_percentage(), dec!(2.5));
        assert_eq!(store.leverage(), 100);
        assert_eq!(store.initial_capital(), dec!(25000));
    }
}
