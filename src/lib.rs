// Radio Clone Engine: a descriptor-driven clone-protocol engine and memory
// codec for amateur/commercial radios.
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod codec;
pub mod core;
pub mod descriptors;
pub mod engine;
pub mod image;
pub mod memmap;
pub mod obfuscation;
pub mod transport;

pub use codec::{Channel, ChannelArray, Duplex, DtcsPolarity, Mode, Power, Skip, Tone, ToneMode};
pub use descriptors::{ModelDescriptor, ProtocolDescriptor};
pub use engine::{clone_in, clone_out, ClonedImage, EngineError, Phase, ProgressEvent};
pub use image::RadioImage;
pub use memmap::MemoryMap;
pub use transport::{ByteTransport, MockTransport, SerialSettings, SerialTransport, TransportError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
