//! Instrument catalog.
//!
//! A fixed, ordered list of tradable instrument descriptors. Catalog order
//! is display order; instruments are created once at startup and never
//! mutated.

mod builtin;
mod instrument;

pub use builtin::InstrumentCatalog;
pub use instrument::{Instrument, QuoteCategory};
