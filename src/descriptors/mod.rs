// Descriptor-driven radio catalog: immutable data records consumed by the
// clone engine and memory codec, registered through `inventory` instead of
// one driver struct + trait impl per model.

pub mod catalog;
pub mod memory_format;
pub mod model;
pub mod protocol;
pub mod registry;

pub use memory_format::MemoryFormatDescriptor;
pub use model::ModelDescriptor;
pub use protocol::ProtocolDescriptor;
