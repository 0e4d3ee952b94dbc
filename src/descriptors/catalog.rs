// Built-in model catalog: one entry per handshake variant, covering the
// obfuscation kinds and both memory-format shapes (separate name table
// vs. in-record name) the codec supports.
//
// Grounded on examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs for the
// magic-handshake entry (the model-291 magic bytes, NAME_BASE, MEMORY_BASE
// and channel bit layout are taken directly from that file) and on the
// spec's literal end-to-end scenarios for the program-string and UV17Pro
// entries, since no vendor driver for those families survived retrieval.
// Wherever a byte value isn't given by either source it's documented here
// as fixture data (see DESIGN.md's Open Question resolutions).

use crate::descriptors::memory_format::{
    ChannelAttr, ChannelDefaults, EmptyCheck, FieldKind, FieldSpec, FlagMapping, FlagValue,
    MemoryFormatDescriptor, NameTable,
};
use crate::descriptors::model::ModelDescriptor;
use crate::descriptors::protocol::{
    BlockReadFraming, BlockWriteFraming, HandshakeVariant, MagicHandshake, Obfuscation, ProgramHandshake,
    ProtocolDescriptor, Uv17Handshake,
};
use crate::register_model;

const UV5R_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()+-=[]:\";'<>?,./";

// --- Baofeng UV-5R (Variant M / magic handshake, no obfuscation) ---------

pub static UV5R_PROTOCOL: ProtocolDescriptor = ProtocolDescriptor {
    name: "uv5r-magic",
    baud: 9600,
    handshake: HandshakeVariant::Magic(MagicHandshake {
        magic_candidates: &[b"\x50\xBB\xFF\x20\x12\x07\x25"],
        inter_byte_delay_ms: 10,
        ack_byte: 0x06,
        ident_request: 0x02,
        ident_min_len: 8,
        ident_max_len: 12,
        ident_terminator: 0xDD,
        ack_after_ident: true,
        post_ack: 0x06,
    }),
    block_read: BlockReadFraming::AddressCommand { read_cmd: b'S', resp_cmd: b'X', ack_byte: 0x06, block_size: 0x40 },
    block_write: BlockWriteFraming { write_cmd: b'X', ack_byte: 0x06, block_size: 16 },
    obfuscation: Obfuscation::None,
    checksum: None,
    inter_command_delay_ms: 20,
    read_timeout_ms: 2000,
};

static UV5R_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "rx_freq", offset: 0, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "tx_freq", offset: 4, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "tx_tone", offset: 8, kind: FieldKind::ToneU16Le },
    FieldSpec { name: "rx_tone", offset: 10, kind: FieldKind::ToneU16Le },
];

static UV5R_FLAGS: &[FlagMapping] = &[
    FlagMapping {
        byte_offset: 15,
        mask: 0x40,
        shift: 6,
        target: ChannelAttr::Mode,
        values: &[
            FlagValue { raw: 0, label: "NFM", watts: 0.0 },
            FlagValue { raw: 1, label: "FM", watts: 0.0 },
        ],
    },
    FlagMapping {
        byte_offset: 14,
        mask: 0x03,
        shift: 0,
        target: ChannelAttr::Power,
        values: &[
            FlagValue { raw: 0, label: "High", watts: 4.0 },
            FlagValue { raw: 1, label: "Low", watts: 1.0 },
        ],
    },
    FlagMapping {
        byte_offset: 15,
        mask: 0x04,
        shift: 2,
        target: ChannelAttr::Skip,
        values: &[
            FlagValue { raw: 0, label: "S", watts: 0.0 },
            FlagValue { raw: 1, label: "", watts: 0.0 },
        ],
    },
];

pub static UV5R_MEMORY_FORMAT: MemoryFormatDescriptor = MemoryFormatDescriptor {
    channel_size: 16,
    num_channels: 128,
    start_offset: 0x0008,
    name_table: Some(NameTable { start_offset: 0x1008, stride: 16, max_len: 7, charset: UV5R_CHARSET }),
    fields: UV5R_FIELDS,
    flag_mappings: UV5R_FLAGS,
    empty_check: EmptyCheck::AllBytesEqual { offset: 0, len: 4, value: 0xFF },
    defaults: ChannelDefaults { tuning_step_khz: 5.0, mode: "FM" },
    lossless: true,
};

static UV5R_MODEL: ModelDescriptor = ModelDescriptor {
    vendor: "Baofeng",
    model: "UV-5R",
    protocol: &UV5R_PROTOCOL,
    memory_format: &UV5R_MEMORY_FORMAT,
};
register_model!(UV5R_MODEL);

// --- Wouxun KG-UV9D (Variant P / program-string handshake, chained XOR) --

pub static KG_UV9D_PROTOCOL: ProtocolDescriptor = ProtocolDescriptor {
    name: "kg-uv9d-program",
    baud: 19200,
    handshake: HandshakeVariant::Program(ProgramHandshake {
        phrase: b"PROGRAM",
        ack_byte: 0x06,
        max_retries: 3,
        ident_len: 8,
        ident_expected_prefix: Some(b"KG-UV9D"),
    }),
    block_read: BlockReadFraming::AddressCommand { read_cmd: b'R', resp_cmd: b'W', ack_byte: 0x06, block_size: 32 },
    block_write: BlockWriteFraming { write_cmd: b'W', ack_byte: 0x06, block_size: 32 },
    // init_xor is fixture data: no vendor capture for this family survived
    // retrieval, see DESIGN.md.
    obfuscation: Obfuscation::Wouxun { init_xor: 0x4A },
    checksum: None,
    inter_command_delay_ms: 20,
    read_timeout_ms: 2000,
};

static KG_UV9D_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "rx_freq", offset: 0, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "tx_freq", offset: 4, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "rx_tone", offset: 8, kind: FieldKind::ToneU16Le },
    FieldSpec { name: "tx_tone", offset: 10, kind: FieldKind::ToneU16Le },
    FieldSpec { name: "name", offset: 12, kind: FieldKind::StringField { max_len: 10 } },
];

static KG_UV9D_FLAGS: &[FlagMapping] = &[
    FlagMapping {
        byte_offset: 22,
        mask: 0x03,
        shift: 0,
        target: ChannelAttr::Mode,
        values: &[
            FlagValue { raw: 0, label: "FM", watts: 0.0 },
            FlagValue { raw: 1, label: "NFM", watts: 0.0 },
        ],
    },
    FlagMapping {
        byte_offset: 22,
        mask: 0x0C,
        shift: 2,
        target: ChannelAttr::Power,
        values: &[
            FlagValue { raw: 0, label: "High", watts: 5.0 },
            FlagValue { raw: 1, label: "Mid", watts: 2.5 },
            FlagValue { raw: 2, label: "Low", watts: 1.0 },
        ],
    },
    FlagMapping {
        byte_offset: 22,
        mask: 0x10,
        shift: 4,
        target: ChannelAttr::Skip,
        values: &[
            FlagValue { raw: 0, label: "", watts: 0.0 },
            FlagValue { raw: 1, label: "S", watts: 0.0 },
        ],
    },
];

pub static KG_UV9D_MEMORY_FORMAT: MemoryFormatDescriptor = MemoryFormatDescriptor {
    channel_size: 32,
    num_channels: 200,
    start_offset: 0x0000,
    name_table: None,
    fields: KG_UV9D_FIELDS,
    flag_mappings: KG_UV9D_FLAGS,
    empty_check: EmptyCheck::AllBytesEqual { offset: 0, len: 4, value: 0xFF },
    defaults: ChannelDefaults { tuning_step_khz: 12.5, mode: "FM" },
    lossless: true,
};

static KG_UV9D_MODEL: ModelDescriptor = ModelDescriptor {
    vendor: "Wouxun",
    model: "KG-UV9D",
    protocol: &KG_UV9D_PROTOCOL,
    memory_format: &KG_UV9D_MEMORY_FORMAT,
};
register_model!(KG_UV9D_MODEL);

// --- BF-5R TECH (Variant U / UV17Pro-family handshake, keyed XOR) --------

static SEND_FOLLOW_UP: [u8; 25] = [
    b'S', b'E', b'N', b'D', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static UV17_FOLLOW_UPS: &[&[u8]] = &[b"F", b"M", &SEND_FOLLOW_UP];
static UV17_IDENT_CANDIDATES: &[&[u8]] = &[b"PROGRAMBF5RTECHU"];

pub static BF5R_TECH_PROTOCOL: ProtocolDescriptor = ProtocolDescriptor {
    name: "bf5r-tech-uv17",
    baud: 57600,
    handshake: HandshakeVariant::Uv17(Uv17Handshake {
        ident_candidates: UV17_IDENT_CANDIDATES,
        fingerprint_cmd: 0x06,
        fingerprint_len: 1,
        follow_ups: UV17_FOLLOW_UPS,
    }),
    block_read: BlockReadFraming::FixedCommand { command: 0x52, block_size: 64, strip_prefix: 4 },
    block_write: BlockWriteFraming { write_cmd: 0x57, ack_byte: 0x06, block_size: 64 },
    obfuscation: Obfuscation::Uv17 { symbol_index: 1 },
    checksum: None,
    inter_command_delay_ms: 10,
    read_timeout_ms: 2000,
};

static BF5R_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "rx_freq", offset: 0, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "tx_freq", offset: 4, kind: FieldKind::BcdLe { size: 4, unit: 10 } },
    FieldSpec { name: "rx_tone", offset: 8, kind: FieldKind::ToneU16Le },
    FieldSpec { name: "tx_tone", offset: 10, kind: FieldKind::ToneU16Le },
    FieldSpec { name: "name", offset: 12, kind: FieldKind::StringField { max_len: 10 } },
];

static BF5R_FLAGS: &[FlagMapping] = &[
    FlagMapping {
        byte_offset: 22,
        mask: 0x01,
        shift: 0,
        target: ChannelAttr::Mode,
        values: &[
            FlagValue { raw: 0, label: "NFM", watts: 0.0 },
            FlagValue { raw: 1, label: "FM", watts: 0.0 },
        ],
    },
    FlagMapping {
        byte_offset: 22,
        mask: 0x02,
        shift: 1,
        target: ChannelAttr::Power,
        values: &[
            FlagValue { raw: 0, label: "Low", watts: 1.0 },
            FlagValue { raw: 1, label: "High", watts: 5.0 },
        ],
    },
    FlagMapping {
        byte_offset: 22,
        mask: 0x04,
        shift: 2,
        target: ChannelAttr::Skip,
        values: &[
            FlagValue { raw: 0, label: "", watts: 0.0 },
            FlagValue { raw: 1, label: "S", watts: 0.0 },
        ],
    },
];

pub static BF5R_TECH_MEMORY_FORMAT: MemoryFormatDescriptor = MemoryFormatDescriptor {
    channel_size: 32,
    num_channels: 256,
    start_offset: 0x0000,
    name_table: None,
    fields: BF5R_FIELDS,
    flag_mappings: BF5R_FLAGS,
    empty_check: EmptyCheck::AllBytesEqual { offset: 0, len: 4, value: 0xFF },
    defaults: ChannelDefaults { tuning_step_khz: 12.5, mode: "FM" },
    lossless: true,
};

static BF5R_TECH_MODEL: ModelDescriptor = ModelDescriptor {
    vendor: "BF-5R TECH",
    model: "UV17Pro",
    protocol: &BF5R_TECH_PROTOCOL,
    memory_format: &BF5R_TECH_MEMORY_FORMAT,
};
register_model!(BF5R_TECH_MODEL);
