//! Application services.

mod calculator_session;

pub use calculator_session::CalculatorSession;
