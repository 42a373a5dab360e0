//! Application ports (interfaces to externally owned collaborators).

mod settings_store_port;

pub use settings_store_port::{
    DEFAULT_INITIAL_CAPITAL, DEFAULT_LEVERAGE, DEFAULT_STOP_LOSS_PERCENTAGE,
    InMemorySettingsStore, SettingsError, SettingsStorePort,
};
