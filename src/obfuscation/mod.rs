// Obfuscation and checksum primitives.
// Reference: examples/PeterGrace-chirp-rs/src/bitwise (byte-level transform idiom),
// generalized here to the keyed-XOR / chained-XOR families used by clone protocols.

pub mod checksum;
pub mod uv17;
pub mod wouxun;

pub use checksum::ChecksumKind;
