//! Data transfer objects for the UI boundary.

mod calculation_dto;

pub use calculation_dto::{CalculationRequestDto, CalculationResponseDto};
