// Model descriptor: the per-radio record the catalog registers, tying a
// vendor/model name to a protocol and memory format. Adding a radio means
// adding one of these, not a new driver type.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/registry.rs's
// DriverInfo, extended with the protocol/memory-format references that
// let the clone engine and memory codec run generically off this record.

use super::memory_format::MemoryFormatDescriptor;
use super::protocol::ProtocolDescriptor;

#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    pub vendor: &'static str,
    pub model: &'static str,
    pub protocol: &'static ProtocolDescriptor,
    pub memory_format: &'static MemoryFormatDescriptor,
}

impl ModelDescriptor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.vendor, self.model)
    }

    pub fn memsize(&self) -> usize {
        self.memory_format.total_len()
    }
}

inventory::collect!(ModelDescriptor);
