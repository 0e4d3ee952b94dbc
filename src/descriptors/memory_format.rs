// Memory format descriptor: a data-driven description of how a model's
// channel table is laid out in its raw memory image, consumed by
// codec::memory_codec instead of a decode/encode function pair per model.
//
// Reference: the field-by-field layout comments and bit-twiddling in
// examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs's RawMemory, generalized
// from "one struct with from_bytes/to_bytes per radio" into records a
// single codec can walk.

/// How one field of a channel record is packed into bytes.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Little-endian BCD integer, `size` bytes, scaled by `unit` (e.g. a
    /// frequency stored in tens of Hz has `unit: 10`).
    BcdLe { size: usize, unit: u64 },
    U16Le,
    U16Be,
    U32Le,
    Byte,
    /// Packed CTCSS/DTCS tone field; see `decode_tone_u16`/`encode_tone_u16`.
    ToneU16Le,
    /// Fixed-width in-record name field.
    StringField { max_len: usize },
}

/// One field within a channel record. `name` is matched against the
/// conventional field names the codec looks for (`rx_freq`, `tx_freq`,
/// `rx_tone`, `tx_tone`, `name`); anything else is decoded but otherwise
/// unused by the channel model today.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
}

/// Which part of a `Channel` a `FlagMapping` feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAttr {
    Mode,
    Power,
    Skip,
}

/// One recognized raw value of a bitfield-backed flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagValue {
    pub raw: u8,
    pub label: &'static str,
    /// Meaningful only when the owning `FlagMapping::target` is `Power`.
    pub watts: f32,
}

/// A bitfield within one byte of a channel record, mapped to a closed set
/// of labeled values and written into the decoded `Channel`.
#[derive(Debug, Clone, Copy)]
pub struct FlagMapping {
    pub byte_offset: usize,
    pub mask: u8,
    pub shift: u8,
    pub target: ChannelAttr,
    pub values: &'static [FlagValue],
}

impl FlagMapping {
    pub fn extract(&self, record: &[u8]) -> u8 {
        (record[self.byte_offset] & self.mask) >> self.shift
    }

    pub fn pack(&self, record: &mut [u8], raw: u8) {
        record[self.byte_offset] =
            (record[self.byte_offset] & !self.mask) | ((raw << self.shift) & self.mask);
    }

    pub fn value_for(&self, raw: u8) -> Option<&'static FlagValue> {
        self.values.iter().find(|v| v.raw == raw)
    }

    pub fn raw_for_label(&self, label: &str) -> Option<u8> {
        self.values.iter().find(|v| v.label == label).map(|v| v.raw)
    }
}

/// How to recognize a channel record as unprogrammed.
#[derive(Debug, Clone, Copy)]
pub enum EmptyCheck {
    /// All bytes in `record[offset..offset+len]` equal `value` (e.g. an
    /// all-0xFF frequency field).
    AllBytesEqual { offset: usize, len: usize, value: u8 },
    /// The named field, read as an unsigned integer, equals one of `values`.
    IntSentinel { field: &'static str, values: &'static [u64] },
}

/// Defaults applied to a freshly decoded non-empty channel before fields
/// that have no raw-byte representation (e.g. tuning step on models that
/// don't store it) are filled in.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDefaults {
    pub tuning_step_khz: f32,
    pub mode: &'static str,
}

/// A separate fixed-width name table, for models that keep channel names
/// apart from the rest of the channel record (UV-5R's NAME_BASE block).
#[derive(Debug, Clone, Copy)]
pub struct NameTable {
    pub start_offset: usize,
    pub stride: usize,
    pub max_len: usize,
    pub charset: &'static str,
}

/// The complete, data-driven description of one model's channel table.
#[derive(Debug, Clone, Copy)]
pub struct MemoryFormatDescriptor {
    pub channel_size: usize,
    pub num_channels: usize,
    pub start_offset: usize,
    pub name_table: Option<NameTable>,
    pub fields: &'static [FieldSpec],
    pub flag_mappings: &'static [FlagMapping],
    pub empty_check: EmptyCheck,
    pub defaults: ChannelDefaults,
    /// Whether decode-then-encode is guaranteed to reproduce the original
    /// bytes exactly. `false` for formats that discard information (e.g.
    /// fields shared with undecoded reserved bits).
    pub lossless: bool,
}

impl MemoryFormatDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn total_len(&self) -> usize {
        let channels_end = self.start_offset + self.channel_size * self.num_channels;
        match self.name_table {
            Some(nt) => channels_end.max(nt.start_offset + nt.stride * self.num_channels),
            None => channels_end,
        }
    }
}
