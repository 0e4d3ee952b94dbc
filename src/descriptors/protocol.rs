// Protocol descriptor: handshake shape, block transfer framing, and
// obfuscation for one clone protocol family, as an immutable data record
// instead of a per-model driver struct.
//
// Reference: handshake and block-transfer logic in
// examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs's do_handshake/
// read_block/write_block, generalized into three named handshake shapes
// (magic-bytes, program-string, UV17Pro ident) and two block-framing
// shapes, so the clone engine runs off data instead of branching per model.

use crate::obfuscation::ChecksumKind;

/// Magic-bytes handshake (UV-5R family): send a fixed byte string, expect
/// a single ACK byte, then request and read a terminated ident string.
#[derive(Debug, Clone, Copy)]
pub struct MagicHandshake {
    /// Tried in order; a missing or mismatched ACK moves on to the next
    /// candidate rather than failing the handshake immediately.
    pub magic_candidates: &'static [&'static [u8]],
    pub inter_byte_delay_ms: u64,
    pub ack_byte: u8,
    pub ident_request: u8,
    pub ident_min_len: usize,
    pub ident_max_len: usize,
    pub ident_terminator: u8,
    /// Whether `S5` writes an ACK byte after the ident exchange. No
    /// implicit default: some radios expect it, some don't.
    pub ack_after_ident: bool,
    /// The trailing byte `S5` reads after the (optional) ACK write. Its
    /// value is read and discarded, not validated.
    pub post_ack: u8,
}

/// Program-string handshake (Wouxun family): send a phrase, retry on a
/// missing ACK up to `max_retries` times, and optionally check the ident
/// the radio echoes back against an expected prefix (mismatch is only
/// ever a warning — chirp-style radios tolerate firmware revision drift
/// here).
#[derive(Debug, Clone, Copy)]
pub struct ProgramHandshake {
    pub phrase: &'static [u8],
    pub ack_byte: u8,
    pub max_retries: u8,
    pub ident_len: usize,
    pub ident_expected_prefix: Option<&'static [u8]>,
}

/// UV17Pro-family handshake: try each of several candidate ident strings,
/// then request a fingerprint byte and send any follow-up commands the
/// model needs before block transfer can begin.
#[derive(Debug, Clone, Copy)]
pub struct Uv17Handshake {
    pub ident_candidates: &'static [&'static [u8]],
    pub fingerprint_cmd: u8,
    pub fingerprint_len: usize,
    pub follow_ups: &'static [&'static [u8]],
}

#[derive(Debug, Clone, Copy)]
pub enum HandshakeVariant {
    Magic(MagicHandshake),
    Program(ProgramHandshake),
    Uv17(Uv17Handshake),
}

/// How to pull one block of memory out of the radio.
#[derive(Debug, Clone, Copy)]
pub enum BlockReadFraming {
    /// UV-5R style: send `[read_cmd, addr_hi, addr_lo, size]`, expect back
    /// `[resp_cmd, addr_hi, addr_lo, size, ...data]`, then send `ack_byte`.
    AddressCommand { read_cmd: u8, resp_cmd: u8, ack_byte: u8, block_size: usize },
    /// UV17Pro style: send a fixed `command` byte plus a block index,
    /// receive exactly `block_size` bytes after stripping `strip_prefix`
    /// leading bytes from the response (command/address echo).
    FixedCommand { command: u8, block_size: usize, strip_prefix: usize },
}

/// How to push one block of memory into the radio.
#[derive(Debug, Clone, Copy)]
pub struct BlockWriteFraming {
    pub write_cmd: u8,
    pub ack_byte: u8,
    pub block_size: usize,
}

/// Byte-level obfuscation applied to block payloads in transit.
#[derive(Debug, Clone, Copy)]
pub enum Obfuscation {
    None,
    Uv17 { symbol_index: usize },
    Wouxun { init_xor: u8 },
}

/// Everything the clone engine needs to talk one protocol family, as an
/// immutable, process-long record rather than a trait implementation.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolDescriptor {
    pub name: &'static str,
    pub baud: u32,
    pub handshake: HandshakeVariant,
    pub block_read: BlockReadFraming,
    pub block_write: BlockWriteFraming,
    pub obfuscation: Obfuscation,
    pub checksum: Option<ChecksumKind>,
    pub inter_command_delay_ms: u64,
    pub read_timeout_ms: u64,
}
