//! Application Layer
//!
//! Orchestrates the domain engine for a host UI:
//!
//! - **Ports**: Interfaces for externally owned state (`SettingsStorePort`)
//! - **Use Cases**: `ComputeLotSize` (raw text in, formatted strings out)
//! - **Services**: `CalculatorSession` (stateful mirror of a host screen)
//! - **DTOs**: Data transfer objects for the UI boundary

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
