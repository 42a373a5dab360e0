//! JSON-file settings store.
//!
//! The desktop analogue of a mobile key-value preferences file: one small
//! JSON document, rewritten in full on every setter, with per-key defaults
//! when the file or an individual key is missing.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    DEFAULT_INITIAL_CAPITAL, DEFAULT_LEVERAGE, DEFAULT_STOP_LOSS_PERCENTAGE, SettingsError,
    SettingsStorePort,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsRecord {
    #[serde(default = "default_capital")]
    initial_capital: Decimal,
    #[serde(default = "default_stop_loss_percentage")]
    stop_loss_percentage: Decimal,
    #[serde(default = "default_leverage")]
    leverage: u32,
}

fn default_capital() -> Decimal {
    DEFAULT_INITIAL_CAPITAL
}

fn default_stop_loss_percentage() -> Decimal {
    DEFAULT_STOP_LOSS_PERCENTAGE
}

const fn default_leverage() -> u32 {
    DEFAULT_LEVERAGE
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            initial_capital: default_capital(),
            stop_loss_percentage: default_stop_loss_percentage(),
            leverage: default_leverage(),
        }
    }
}

/// File-backed [`SettingsStorePort`] implementation.
///
/// The record is cached in memory; getters never touch the disk after
/// `open`, setters write through before returning.
#[derive(Debug)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    record: RwLock<SettingsRecord>,
}

impl JsonFileSettingsStore {
    /// Open the store at `path`, reading the current record if present.
    ///
    /// A missing file yields the defaults; the file is created on first
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let record = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SettingsRecord::default(),
            Err(err) => return Err(SettingsError::Io(err)),
        };

        Ok(Self {
            path,
            record: RwLock::new(record),
        })
    }

    fn read(&self) -> SettingsRecord {
        self.record
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn update(&self, apply: impl FnOnce(&mut SettingsRecord)) -> Result<(), SettingsError> {
        let mut record = self
            .record
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut record);

        let encoded = serde_json::to_string_pretty(&*record)?;
        fs::write(&self.path, encoded)?;
        tracing::debug!(path = %self.path.display(), "settings persisted");
        Ok(())
    }
}

impl SettingsStorePort for JsonFileSettingsStore {
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
        self.update(|record| record.initial_capital = value)
    }

    fn set_stop_loss_percentage(&self, value: Decimal) -> Result<(), SettingsError> {
        self.update(|record| record.stop_loss_percentage = value)
    }

    fn set_leverage(&self, value: u32) -> Result<(), SettingsError> {
        self.update(|record| record.leverage = value)
    }
}
