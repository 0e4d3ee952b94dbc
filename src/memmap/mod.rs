// Owned raw-byte buffer shared by images and the memory codec.
pub mod memory_map;

pub use memory_map::{MemoryMap, MemoryMapError};
