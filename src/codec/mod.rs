// Channel model and the data-driven memory codec built on top of it.

pub mod channel;
pub mod memory_codec;

pub use channel::{Channel, ChannelArray, Duplex, DtcsPolarity, Mode, Power, Skip, Tone, ToneMode};
pub use memory_codec::{decode, encode, CodecError};
