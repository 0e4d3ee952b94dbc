// Clone engine: runs a handshake then a block transfer loop off a
// ModelDescriptor, replacing the teacher's per-model CloneModeRadio impl
// with one generic implementation plus data.

pub mod clone;
pub mod error;
pub mod handshake;

pub use clone::ProgressEvent;
pub use error::{EngineError, Phase};

use crate::descriptors::ModelDescriptor;
use crate::transport::ByteTransport;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

/// A freshly downloaded memory image plus the handshake's identification
/// bytes, kept alongside the raw bytes rather than folded into them: the
/// dump file format stores only the bit-exact memory contents, but a
/// caller building a `RadioImage` straight off the wire can still use the
/// header for logging or display.
pub struct ClonedImage {
    pub bytes: Vec<u8>,
    pub header: Vec<u8>,
}

/// Read a complete memory image out of a radio matching `model`.
pub async fn clone_in<T: ByteTransport>(
    transport: &mut T,
    model: &ModelDescriptor,
    progress: Option<UnboundedSender<ProgressEvent>>,
    cancel: Arc<AtomicBool>,
) -> Result<ClonedImage, EngineError> {
    info!(model = %model.full_name(), "starting clone-in");
    let outcome = handshake::run(transport, model.protocol).await?;
    info!(ident = ?outcome.ident, "handshake complete");
    let bytes = clone::read_image(transport, model.protocol, model.memsize(), progress, cancel).await?;
    Ok(ClonedImage { bytes, header: outcome.ident })
}

/// Write a complete memory image into a radio matching `model`.
pub async fn clone_out<T: ByteTransport>(
    transport: &mut T,
    model: &ModelDescriptor,
    image: &[u8],
    progress: Option<UnboundedSender<ProgressEvent>>,
    cancel: Arc<AtomicBool>,
) -> Result<(), EngineError> {
    if !model.memory_format.lossless {
        return Err(EngineError::NotLossless { model: model.full_name() });
    }
    if image.len() != model.memsize() {
        return Err(EngineError::ProtocolError {
            address: None,
            observed: format!("{} byte image", image.len()),
            expected: format!("{} bytes", model.memsize()),
        });
    }

    info!(model = %model.full_name(), "starting clone-out");
    let outcome = handshake::run(transport, model.protocol).await?;
    info!(ident = ?outcome.ident, "handshake complete");
    clone::write_image(transport, model.protocol, image, progress, cancel).await
}
