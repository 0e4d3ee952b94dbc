// The three clone-protocol handshake state machines, run off a
// ProtocolDescriptor instead of being hand-written per model.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs's
// do_handshake (S0_start -> send magic -> await ACK -> send ident request
// -> read ident -> send ACK -> await final ACK), generalized into the
// magic-handshake branch here and extended with the program-string and
// UV17Pro-ident variants the wider catalog needs.

use crate::descriptors::protocol::{HandshakeVariant, MagicHandshake, ProgramHandshake, ProtocolDescriptor, Uv17Handshake};
use crate::engine::error::{EngineError, Phase};
use crate::transport::ByteTransport;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of a successful handshake: whatever identifying bytes the radio
/// sent back, if any. The magic and UV17Pro variants use this as an
/// 8-byte file header the way CHIRP does; the program-string variant
/// mostly uses it for logging.
pub struct HandshakeOutcome {
    pub ident: Vec<u8>,
}

pub async fn run<T: ByteTransport>(
    transport: &mut T,
    protocol: &ProtocolDescriptor,
) -> Result<HandshakeOutcome, EngineError> {
    match &protocol.handshake {
        HandshakeVariant::Magic(h) => magic_handshake(transport, h).await,
        HandshakeVariant::Program(h) => program_handshake(transport, h).await,
        HandshakeVariant::Uv17(h) => uv17_handshake(transport, h).await,
    }
}

async fn magic_handshake<T: ByteTransport>(
    transport: &mut T,
    h: &MagicHandshake,
) -> Result<HandshakeOutcome, EngineError> {
    let mut last_response = None;

    'candidates: for candidate in h.magic_candidates {
        for &byte in *candidate {
            transport.write(&[byte]).await?;
            tokio::time::sleep(Duration::from_millis(h.inter_byte_delay_ms)).await;
        }

        let ack = match transport.read_exact(1, Duration::from_secs(3)).await {
            Ok(ack) => ack,
            Err(_) => continue 'candidates,
        };
        if ack[0] != h.ack_byte {
            warn!(candidate = ?candidate, got = ack[0], "magic candidate rejected, trying next");
            last_response = Some(ack);
            continue 'candidates;
        }

        transport.write(&[h.ident_request]).await?;

        let mut ident = Vec::new();
        for _ in 0..h.ident_max_len {
            let byte = transport.read_exact(1, Duration::from_secs(1)).await.map_err(|_| {
                EngineError::Timeout { phase: Phase::Handshake, address: None }
            })?;
            ident.push(byte[0]);
            if byte[0] == h.ident_terminator {
                break;
            }
        }
        if ident.len() < h.ident_min_len {
            return Err(EngineError::HandshakeFailed {
                reason: format!("ident too short: got {} bytes, need at least {}", ident.len(), h.ident_min_len),
                last_response: Some(ident),
            });
        }

        if h.ack_after_ident {
            transport.write(&[h.ack_byte]).await?;
        }

        // Trailing byte is read and discarded, not validated against
        // h.post_ack: its value carries no meaning the spec defines.
        let _ = transport.read_exact(1, Duration::from_secs(1)).await.map_err(|_| {
            EngineError::HandshakeFailed {
                reason: "no trailing byte after ident exchange".into(),
                last_response: Some(ident.clone()),
            }
        })?;

        debug!(?candidate, ident = ?ident, "magic handshake complete");
        return Ok(HandshakeOutcome { ident });
    }

    Err(EngineError::HandshakeFailed {
        reason: format!("no magic candidate (of {}) produced an ACK", h.magic_candidates.len()),
        last_response,
    })
}

async fn program_handshake<T: ByteTransport>(
    transport: &mut T,
    h: &ProgramHandshake,
) -> Result<HandshakeOutcome, EngineError> {
    let mut last_seen = None;

    for attempt in 0..=h.max_retries {
        transport.write(h.phrase).await?;
        match transport.read_exact(1, Duration::from_millis(800)).await {
            Ok(ack) if ack[0] == h.ack_byte => {
                let ident = transport.read_exact(h.ident_len, Duration::from_secs(1)).await.unwrap_or_default();

                if let Some(expected) = h.ident_expected_prefix {
                    if !ident.starts_with(expected) {
                        warn!(?ident, expected = ?expected, "ident prefix mismatch, continuing anyway");
                    }
                }

                transport.write(&[h.ack_byte]).await?;
                debug!(attempt, ?ident, "program-string handshake complete");
                return Ok(HandshakeOutcome { ident });
            }
            Ok(other) => last_seen = Some(other),
            Err(_) => {}
        }
    }

    Err(EngineError::HandshakeFailed {
        reason: format!("no ACK after {} attempts at \"PROGRAM\"", h.max_retries + 1),
        last_response: last_seen,
    })
}

async fn uv17_handshake<T: ByteTransport>(
    transport: &mut T,
    h: &Uv17Handshake,
) -> Result<HandshakeOutcome, EngineError> {
    let mut last_response = None;

    for candidate in h.ident_candidates {
        transport.write(candidate).await?;
        match transport.read_exact(h.fingerprint_len, Duration::from_secs(1)).await {
            Ok(fingerprint) => {
                transport.write(&[h.fingerprint_cmd]).await?;

                for follow_up in h.follow_ups {
                    transport.write(follow_up).await?;
                }

                debug!(?candidate, ?fingerprint, "UV17Pro handshake complete");
                return Ok(HandshakeOutcome { ident: fingerprint });
            }
            Err(_) => {
                last_response = None;
                continue;
            }
        }
    }

    Err(EngineError::HandshakeFailed {
        reason: "no ident candidate produced a fingerprint response".into(),
        last_response,
    })
}
