//! Application use cases.

mod compute_lot_size;

pub use compute_lot_size::ComputeLotSizeUseCase;
