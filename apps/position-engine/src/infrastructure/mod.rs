//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer. The only
//! driven adapter here is settings persistence; the engine has no inbound
//! network or CLI surface of its own.

pub mod persistence;
