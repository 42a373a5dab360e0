//! Position sizing.
//!
//! Two cooperating pieces implement the engine:
//!
//! - [`conversion`]: per-category rules converting a price move and a
//!   notional value into USD
//! - [`LotSizeCalculator`]: combines a fixed-risk budget with a margin
//!   ceiling and recommends the smaller lot size
//!
//! # Example
//!
//! ```
//! use position_engine::domain::catalog::InstrumentCatalog;
//! use position_engine::domain::sizing::{CalculationInput, LotSizeCalculator};
//! use rust_decimal_macros::dec;
//!
//! let catalog = InstrumentCatalog::builtin();
//! let input = CalculationInput {
//!     instrument: catalog.select("EUR/USD")?.clone(),
//!     entry_price: dec!(1.1000),
//!     stop_price: dec!(1.0950),
//!     contract_size: dec!(100000),
//!     exchange_rate: None,
//!     capital: dec!(10000),
//!     risk_percent: dec!(1),
//!     leverage: 20,
//! };
//!
//! let result = LotSizeCalculator::compute(&input)?;
//! assert_eq!(result.lot_size, dec!(0.20));
//! # Ok::<(), position_engine::domain::sizing::CalcError>(())
//! ```

mod calculator;
pub mod conversion;
mod error;
mod types;

pub use calculator::LotSizeCalculator;
pub use error::CalcError;
pub use types::{CalculationInput, CalculationResult, LimitingFactor};
