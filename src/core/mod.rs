// Shared radio-domain constants (tone tables, mode/duplex/skip label sets).
pub mod constants;

pub use constants::*;
