// Block transfer loop: read an entire memory image out of a radio, or
// write one into it, driven by a ProtocolDescriptor's BlockReadFraming /
// BlockWriteFraming / Obfuscation / checksum instead of a per-model
// read_block/write_block pair.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs's
// read_block/write_block (address-command framing, ACK-per-block,
// echo-tolerant header check) and its use of a closure-based
// ProgressCallback, generalized here into an mpsc progress channel and a
// cooperative `Arc<AtomicBool>` cancel flag so the loop can be driven from
// a UI thread without blocking it.

use crate::descriptors::protocol::{BlockReadFraming, BlockWriteFraming, Obfuscation, ProtocolDescriptor};
use crate::engine::error::{EngineError, Phase};
use crate::obfuscation::{uv17, wouxun};
use crate::transport::ByteTransport;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub phase: Phase,
    pub bytes_done: usize,
    pub bytes_total: usize,
}

fn deobfuscate(data: &[u8], obfuscation: &Obfuscation) -> Vec<u8> {
    match *obfuscation {
        Obfuscation::None => data.to_vec(),
        Obfuscation::Uv17 { symbol_index } => uv17::transform(data, symbol_index),
        Obfuscation::Wouxun { init_xor } => wouxun::reverse(data, init_xor),
    }
}

fn obfuscate(data: &[u8], obfuscation: &Obfuscation) -> Vec<u8> {
    match *obfuscation {
        Obfuscation::None => data.to_vec(),
        Obfuscation::Uv17 { symbol_index } => uv17::transform(data, symbol_index),
        Obfuscation::Wouxun { init_xor } => wouxun::forward(data, init_xor),
    }
}

fn report(progress: &Option<UnboundedSender<ProgressEvent>>, event: ProgressEvent) {
    if let Some(tx) = progress {
        let _ = tx.send(event);
    }
}

fn check_cancelled(cancel: &Arc<AtomicBool>, phase: Phase, bytes_done: usize) -> Result<(), EngineError> {
    if cancel.load(Ordering::Relaxed) {
        return Err(EngineError::Cancelled { phase, bytes_done });
    }
    Ok(())
}

/// Read `memsize` bytes out of the radio, block by block.
pub async fn read_image<T: ByteTransport>(
    transport: &mut T,
    protocol: &ProtocolDescriptor,
    memsize: usize,
    progress: Option<UnboundedSender<ProgressEvent>>,
    cancel: Arc<AtomicBool>,
) -> Result<Vec<u8>, EngineError> {
    let mut image = Vec::with_capacity(memsize);
    let deadline = Duration::from_millis(protocol.read_timeout_ms);

    while image.len() < memsize {
        check_cancelled(&cancel, Phase::BlockRead, image.len())?;

        let address = image.len();
        let remaining = memsize - address;

        let data = match protocol.block_read {
            BlockReadFraming::AddressCommand { read_cmd, resp_cmd, ack_byte, block_size } => {
                let size = remaining.min(block_size);
                let request = [read_cmd, (address >> 8) as u8, (address & 0xFF) as u8, size as u8];
                transport.write(&request).await?;

                let header = transport.read_exact(4, deadline).await.map_err(|_| EngineError::Timeout {
                    phase: Phase::BlockRead,
                    address: Some(address as u32),
                })?;
                if header[0] != resp_cmd || header[3] as usize != size {
                    return Err(EngineError::ProtocolError {
                        address: Some(address as u32),
                        observed: format!("{header:02x?}"),
                        expected: format!("[{resp_cmd:#04x}, .., .., {size:#04x}]"),
                    });
                }

                let raw = transport.read_exact(size, deadline).await.map_err(|_| EngineError::Timeout {
                    phase: Phase::BlockRead,
                    address: Some(address as u32),
                })?;
                transport.write(&[ack_byte]).await?;
                raw
            }
            BlockReadFraming::FixedCommand { command, block_size, strip_prefix } => {
                let size = remaining.min(block_size);
                let index = address / block_size;
                let request = [command, (index >> 8) as u8, (index & 0xFF) as u8, size as u8];
                transport.write(&request).await?;

                let response = transport
                    .read_exact(strip_prefix + size, deadline)
                    .await
                    .map_err(|_| EngineError::Timeout { phase: Phase::BlockRead, address: Some(address as u32) })?;
                response[strip_prefix..].to_vec()
            }
        };

        let plain = deobfuscate(&data, &protocol.obfuscation);
        let plain = match protocol.checksum {
            Some(kind) => {
                if !kind.verify(&plain) {
                    return Err(EngineError::ProtocolError {
                        address: Some(address as u32),
                        observed: "checksum mismatch".into(),
                        expected: "matching checksum".into(),
                    });
                }
                plain[..plain.len() - 1].to_vec()
            }
            None => plain,
        };

        trace!(address, len = plain.len(), "read block");
        image.extend_from_slice(&plain);

        report(&progress, ProgressEvent { phase: Phase::BlockRead, bytes_done: image.len(), bytes_total: memsize });
        tokio::time::sleep(Duration::from_millis(protocol.inter_command_delay_ms)).await;
    }

    debug!(bytes = image.len(), "image read complete");
    image.truncate(memsize);
    Ok(image)
}

/// Write a full memory image into the radio, block by block.
pub async fn write_image<T: ByteTransport>(
    transport: &mut T,
    protocol: &ProtocolDescriptor,
    image: &[u8],
    progress: Option<UnboundedSender<ProgressEvent>>,
    cancel: Arc<AtomicBool>,
) -> Result<(), EngineError> {
    let BlockWriteFraming { write_cmd, ack_byte, block_size } = protocol.block_write;
    let deadline = Duration::from_millis(protocol.read_timeout_ms);
    let mut written = 0usize;

    while written < image.len() {
        check_cancelled(&cancel, Phase::BlockWrite, written)?;

        let address = written;
        let size = (image.len() - address).min(block_size);
        let chunk = &image[address..address + size];

        let obfuscated = obfuscate(chunk, &protocol.obfuscation);
        let payload = match protocol.checksum {
            Some(kind) => kind.append(&obfuscated),
            None => obfuscated,
        };

        let mut request = vec![write_cmd, (address >> 8) as u8, (address & 0xFF) as u8, size as u8];
        request.extend_from_slice(&payload);
        transport.write(&request).await?;

        let ack = transport
            .read_exact(1, deadline)
            .await
            .map_err(|_| EngineError::Timeout { phase: Phase::BlockWrite, address: Some(address as u32) })?;
        if ack[0] != ack_byte {
            return Err(EngineError::WriteFailed { address: address as u32, ack: Some(ack[0]) });
        }

        written += size;
        trace!(address, len = size, "wrote block");
        report(&progress, ProgressEvent { phase: Phase::BlockWrite, bytes_done: written, bytes_total: image.len() });
        tokio::time::sleep(Duration::from_millis(protocol.inter_command_delay_ms)).await;
    }

    debug!(bytes = written, "image write complete");
    Ok(())
}
