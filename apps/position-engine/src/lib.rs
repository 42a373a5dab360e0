// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Position Engine - Rust Core Library
//!
//! Deterministic position-sizing engine for leveraged trading instruments
//! (forex pairs, metals, indices, energy, agricultural commodities, crypto).
//!
//! Given a trader's capital, risk tolerance and leverage, plus an
//! instrument's quote convention and contract size, the engine computes the
//! largest trade size (in lots) consistent with both a fixed-risk rule and
//! a margin-availability constraint.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core sizing logic (pure functions over immutable inputs)
//!   - `catalog`: Instrument descriptors and the built-in instrument list
//!   - `sizing`: Quote-currency conversion rules and the two-constraint
//!     lot calculator
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interface to the persisted trader settings
//!     (`SettingsStorePort`)
//!   - `use_cases`: `ComputeLotSize` (raw text in, formatted strings out)
//!   - `services`: `CalculatorSession` (stateful mirror of a host screen)
//!   - `dto`: Data transfer objects for the UI boundary
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: JSON-file settings store
//!
//! The engine is stateless and synchronous: each host-side edit triggers
//! one complete recomputation, and the latest call supersedes any prior
//! result. No shared mutable state exists beyond the read-only catalog and
//! the externally owned settings, which the engine only reads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::catalog::{Instrument, InstrumentCatalog, QuoteCategory};
pub use domain::sizing::{
    CalcError, CalculationInput, CalculationResult, LimitingFactor, LotSizeCalculator,
};

// Application re-exports
pub use application::dto::{CalculationRequestDto, CalculationResponseDto};
pub use application::ports::{InMemorySettingsStore, SettingsError, SettingsStorePort};
pub use application::services::CalculatorSession;
pub use application::use_cases::ComputeLotSizeUseCase;

// Infrastructure re-exports
pub use infrastructure::persistence::JsonFileSettingsStore;
