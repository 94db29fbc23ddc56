//! support modules shared across the crate

pub mod bits;
pub mod hex;
pub mod securemem;
