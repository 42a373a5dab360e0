//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. Everything here is a pure function or an immutable value:
//!
//! - [`catalog`]: instrument descriptors and the fixed built-in catalog
//! - [`sizing`]: quote-currency conversion rules and the lot-size
//!   calculator that combines the risk and margin constraints

pub mod catalog;
pub mod sizing;
