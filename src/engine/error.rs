// Clone engine error taxonomy.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/traits.rs's
// RadioError, generalized from one flat enum per driver family into the
// phase-tagged shape the engine's handshake/transfer loop actually raises.

use crate::codec::CodecError;
use crate::transport::TransportError;
use thiserror::Error;

/// Which stage of a clone operation an error or cancellation occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Handshake,
    BlockRead,
    BlockWrite,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Handshake => "handshake",
            Phase::BlockRead => "block read",
            Phase::BlockWrite => "block write",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported transport: {0}")]
    UnsupportedTransport(String),

    #[error("{model}'s memory format is not marked lossless; refusing to upload")]
    NotLossless { model: String },

    #[error("serial port unavailable: {0}")]
    PortUnavailable(#[from] TransportError),

    #[error("handshake failed: {reason}")]
    HandshakeFailed { reason: String, last_response: Option<Vec<u8>> },

    #[error("protocol error at {address:?}: expected {expected}, observed {observed}")]
    ProtocolError { address: Option<u32>, observed: String, expected: String },

    #[error("timed out during {phase} at {address:?}")]
    Timeout { phase: Phase, address: Option<u32> },

    #[error("write failed at {address:#06x}: ack={ack:?}")]
    WriteFailed { address: u32, ack: Option<u8> },

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("cancelled during {phase} after {bytes_done} bytes")]
    Cancelled { phase: Phase, bytes_done: usize },
}
