//! Core domain types and the capability traits the rest of the crate plugs into.

pub mod order;
pub mod ports;
