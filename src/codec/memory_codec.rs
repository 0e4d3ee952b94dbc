// Data-driven channel table decode/encode, keyed entirely by a
// MemoryFormatDescriptor rather than a decode/encode function pair written
// per model.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/uv5r.rs's
// decode_memory/encode_memory and RawMemory::from_bytes/to_bytes, whose
// field-at-a-time logic this generalizes into a loop over FieldSpec/
// FlagMapping records.

use crate::bitwise::{bcd_to_int, int_to_bcd};
use crate::codec::channel::{Channel, ChannelArray, DtcsPolarity, Duplex, Mode, Power, Skip, Tone, ToneMode};
use crate::descriptors::memory_format::{ChannelAttr, EmptyCheck, FieldKind, FieldSpec, MemoryFormatDescriptor};
use crate::memmap::MemoryMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("channel {channel_index}: field '{field}': {cause}")]
    Field {
        channel_index: usize,
        field: String,
        cause: String,
    },
    #[error("memory map too small: need at least {needed} bytes, have {available}")]
    MapTooSmall { needed: usize, available: usize },
}

/// `0x8000`: low 12 bits are a DTCS code rather than a CTCSS tenths value.
const TONE_DCS_FLAG: u16 = 0x8000;
/// `0x4000`: DTCS polarity is reversed. Only meaningful alongside `TONE_DCS_FLAG`.
const TONE_DCS_REVERSED_FLAG: u16 = 0x4000;

fn decode_tone_u16(raw: u16) -> Tone {
    if raw == 0x0000 || raw == 0xFFFF {
        return Tone::None;
    }
    if raw & TONE_DCS_FLAG != 0 {
        let code = raw & 0x0FFF;
        let polarity = if raw & TONE_DCS_REVERSED_FLAG != 0 {
            DtcsPolarity::Reversed
        } else {
            DtcsPolarity::Normal
        };
        Tone::Dtcs(code, polarity)
    } else {
        Tone::Ctcss(raw as f32 / 10.0)
    }
}

fn encode_tone_u16(tone: Tone) -> u16 {
    match tone {
        Tone::None => 0x0000,
        Tone::Ctcss(freq) => (freq * 10.0).round() as u16,
        Tone::Dtcs(code, polarity) => {
            let mut raw = TONE_DCS_FLAG | (code & 0x0FFF);
            if polarity == DtcsPolarity::Reversed {
                raw |= TONE_DCS_REVERSED_FLAG;
            }
            raw
        }
    }
}

fn read_field(record: &[u8], field: &FieldSpec) -> Result<u64, String> {
    match field.kind {
        FieldKind::BcdLe { size, unit } => {
            let bytes = &record[field.offset..field.offset + size];
            let value = bcd_to_int(bytes, true).map_err(|e| e.to_string())?;
            Ok(value * unit)
        }
        FieldKind::U16Le => Ok(u16::from_le_bytes([record[field.offset], record[field.offset + 1]]) as u64),
        FieldKind::U16Be => Ok(u16::from_be_bytes([record[field.offset], record[field.offset + 1]]) as u64),
        FieldKind::U32Le => Ok(u32::from_le_bytes([
            record[field.offset],
            record[field.offset + 1],
            record[field.offset + 2],
            record[field.offset + 3],
        ]) as u64),
        FieldKind::Byte => Ok(record[field.offset] as u64),
        FieldKind::ToneU16Le => {
            Ok(u16::from_le_bytes([record[field.offset], record[field.offset + 1]]) as u64)
        }
        FieldKind::StringField { .. } => Err("string field has no integer value".to_string()),
    }
}

fn write_field(record: &mut [u8], field: &FieldSpec, value: u64) -> Result<(), String> {
    match field.kind {
        FieldKind::BcdLe { size, unit } => {
            let bcd = int_to_bcd(value / unit.max(1), size, true).map_err(|e| e.to_string())?;
            record[field.offset..field.offset + size].copy_from_slice(&bcd);
        }
        FieldKind::U16Le | FieldKind::ToneU16Le => {
            record[field.offset..field.offset + 2].copy_from_slice(&(value as u16).to_le_bytes());
        }
        FieldKind::U16Be => {
            record[field.offset..field.offset + 2].copy_from_slice(&(value as u16).to_be_bytes());
        }
        FieldKind::U32Le => {
            record[field.offset..field.offset + 4].copy_from_slice(&(value as u32).to_le_bytes());
        }
        FieldKind::Byte => record[field.offset] = value as u8,
        FieldKind::StringField { .. } => return Err("string field has no integer value".to_string()),
    }
    Ok(())
}

fn read_string_field(record: &[u8], field: &FieldSpec, charset: &str) -> String {
    let FieldKind::StringField { max_len } = field.kind else {
        return String::new();
    };
    let bytes = &record[field.offset..field.offset + max_len];
    bytes
        .iter()
        .take_while(|&&b| b != 0xFF && b != 0x00)
        .map(|&b| if charset.contains(b as char) { b as char } else { ' ' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn write_string_field(record: &mut [u8], field: &FieldSpec, name: &str) {
    let FieldKind::StringField { max_len } = field.kind else {
        return;
    };
    let slice = &mut record[field.offset..field.offset + max_len];
    slice.fill(0xFF);
    for (i, c) in name.chars().take(max_len).enumerate() {
        slice[i] = c.to_ascii_uppercase() as u8;
    }
}

fn is_empty_record(record: &[u8], fmt: &MemoryFormatDescriptor) -> Result<bool, String> {
    match fmt.empty_check {
        EmptyCheck::AllBytesEqual { offset, len, value } => {
            Ok(record[offset..offset + len].iter().all(|&b| b == value))
        }
        EmptyCheck::IntSentinel { field, values } => {
            let spec = fmt
                .field(field)
                .ok_or_else(|| format!("empty_check references unknown field '{field}'"))?;
            let raw = read_field(record, spec)?;
            Ok(values.contains(&raw))
        }
    }
}

fn decode_channel(
    index: usize,
    record: &[u8],
    name: String,
    fmt: &MemoryFormatDescriptor,
) -> Result<Channel, CodecError> {
    let at = |field_name: &str| -> Result<u64, CodecError> {
        let spec = fmt.field(field_name).ok_or_else(|| CodecError::Field {
            channel_index: index,
            field: field_name.to_string(),
            cause: "descriptor does not define this field".to_string(),
        })?;
        read_field(record, spec).map_err(|cause| CodecError::Field {
            channel_index: index,
            field: field_name.to_string(),
            cause,
        })
    };

    let rx_freq = at("rx_freq")?;
    let tx_freq_field = fmt.field("tx_freq");
    let tx_freq = match tx_freq_field {
        Some(spec) => read_field(record, spec).map_err(|cause| CodecError::Field {
            channel_index: index,
            field: "tx_freq".to_string(),
            cause,
        })?,
        None => rx_freq,
    };

    let (duplex, offset_hz) = if tx_freq == rx_freq {
        (Duplex::Simplex, 0)
    } else {
        let diff = tx_freq.abs_diff(rx_freq);
        if diff > 70_000_000 {
            (Duplex::Split, tx_freq)
        } else if tx_freq > rx_freq {
            (Duplex::Plus, diff)
        } else {
            (Duplex::Minus, diff)
        }
    };

    let tx_tone = fmt
        .field("tx_tone")
        .map(|spec| decode_tone_u16(read_field(record, spec).unwrap_or(0) as u16))
        .unwrap_or(Tone::None);
    let rx_tone = fmt
        .field("rx_tone")
        .map(|spec| decode_tone_u16(read_field(record, spec).unwrap_or(0) as u16))
        .unwrap_or(Tone::None);

    let mut mode = Mode::from(fmt.defaults.mode);
    let mut power = None;
    let mut skip = Skip::None;

    for mapping in fmt.flag_mappings {
        let raw = mapping.extract(record);
        let Some(value) = mapping.value_for(raw) else {
            continue;
        };
        match mapping.target {
            ChannelAttr::Mode => mode = Mode::from(value.label),
            ChannelAttr::Power => power = Some(Power::new(value.label, value.watts)),
            ChannelAttr::Skip => skip = Skip::from(value.label),
        }
    }

    Ok(Channel {
        number: index as u32,
        name,
        freq_hz: rx_freq,
        duplex,
        offset_hz,
        mode,
        tone_mode: ToneMode::from_tx_rx(tx_tone, rx_tone),
        tuning_step_khz: fmt.defaults.tuning_step_khz,
        skip,
        power,
        empty: false,
    })
}

/// Decode every channel slot out of a raw memory image.
pub fn decode(mmap: &MemoryMap, fmt: &MemoryFormatDescriptor) -> Result<ChannelArray, CodecError> {
    let needed = fmt.total_len();
    if mmap.len() < needed {
        return Err(CodecError::MapTooSmall { needed, available: mmap.len() });
    }

    let mut channels = Vec::with_capacity(fmt.num_channels);
    for i in 0..fmt.num_channels {
        let offset = fmt.start_offset + i * fmt.channel_size;
        let record = mmap.get(offset, Some(fmt.channel_size)).map_err(|e| CodecError::Field {
            channel_index: i,
            field: "<record>".to_string(),
            cause: e.to_string(),
        })?;

        let empty = is_empty_record(record, fmt).map_err(|cause| CodecError::Field {
            channel_index: i,
            field: "<empty_check>".to_string(),
            cause,
        })?;
        if empty {
            channels.push(Channel::new_empty(i as u32));
            continue;
        }

        let name = match fmt.name_table {
            Some(nt) => {
                let offset = nt.start_offset + i * nt.stride;
                let bytes = mmap.get(offset, Some(nt.max_len)).map_err(|e| CodecError::Field {
                    channel_index: i,
                    field: "<name_table>".to_string(),
                    cause: e.to_string(),
                })?;
                bytes
                    .iter()
                    .take_while(|&&b| b != 0xFF && b != 0x00)
                    .map(|&b| if nt.charset.contains(b as char) { b as char } else { ' ' })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            }
            None => match fmt.field("name") {
                Some(spec) => read_string_field(record, spec, &crate::core::constants::CHARSET_UPPER_NUMERIC),
                None => String::new(),
            },
        };

        channels.push(decode_channel(i, record, name, fmt)?);
    }

    Ok(ChannelArray { channels })
}

/// Builds a channel record starting from the bytes already on the radio,
/// overwriting only the byte ranges the descriptor's fields and flags
/// declare. Anything outside that union (reserved/undeclared bytes) is
/// carried through unchanged.
fn encode_channel(original_record: &[u8], channel: &Channel, fmt: &MemoryFormatDescriptor) -> Result<Vec<u8>, CodecError> {
    let mut record = original_record.to_vec();

    let field_write = |record: &mut [u8], name: &str, value: u64| -> Result<(), CodecError> {
        let spec = fmt.field(name).ok_or_else(|| CodecError::Field {
            channel_index: channel.number as usize,
            field: name.to_string(),
            cause: "descriptor does not define this field".to_string(),
        })?;
        write_field(record, spec, value).map_err(|cause| CodecError::Field {
            channel_index: channel.number as usize,
            field: name.to_string(),
            cause,
        })
    };

    field_write(&mut record, "rx_freq", channel.freq_hz)?;

    if fmt.field("tx_freq").is_some() {
        let tx_freq = match channel.duplex {
            Duplex::Simplex => channel.freq_hz,
            Duplex::Plus => channel.freq_hz + channel.offset_hz,
            Duplex::Minus => channel.freq_hz.saturating_sub(channel.offset_hz),
            Duplex::Split => channel.offset_hz,
            Duplex::Off => 0xFFFF_FFFF,
        };
        field_write(&mut record, "tx_freq", tx_freq)?;
    }

    let (tx_tone, rx_tone) = channel.tone_mode.to_tx_rx();
    if let Some(spec) = fmt.field("tx_tone") {
        write_field(&mut record, spec, encode_tone_u16(tx_tone) as u64).map_err(|cause| CodecError::Field {
            channel_index: channel.number as usize,
            field: "tx_tone".to_string(),
            cause,
        })?;
    }
    if let Some(spec) = fmt.field("rx_tone") {
        write_field(&mut record, spec, encode_tone_u16(rx_tone) as u64).map_err(|cause| CodecError::Field {
            channel_index: channel.number as usize,
            field: "rx_tone".to_string(),
            cause,
        })?;
    }

    for mapping in fmt.flag_mappings {
        let label = match mapping.target {
            ChannelAttr::Mode => channel.mode.as_str(),
            ChannelAttr::Power => channel.power.as_ref().map(|p| p.label.as_str()).unwrap_or(""),
            ChannelAttr::Skip => channel.skip.as_str(),
        };
        if let Some(raw) = mapping.raw_for_label(label) {
            mapping.pack(&mut record, raw);
        }
    }

    if fmt.name_table.is_none() {
        if let Some(spec) = fmt.field("name") {
            write_string_field(&mut record, spec, &channel.name);
        }
    }

    Ok(record)
}

/// Encode a full channel array back into a raw memory image, starting from
/// `original`'s bytes and writing only the fields/flags each changed
/// channel owns. Slots with no corresponding non-empty channel, and bytes
/// outside the declared field/flag union of slots that are rewritten, are
/// carried through from `original` untouched.
pub fn encode(original: &MemoryMap, channels: &ChannelArray, fmt: &MemoryFormatDescriptor) -> Result<MemoryMap, CodecError> {
    let needed = fmt.total_len();
    if original.len() < needed {
        return Err(CodecError::MapTooSmall { needed, available: original.len() });
    }
    let mut data = original.to_vec();

    for i in 0..fmt.num_channels {
        let offset = fmt.start_offset + i * fmt.channel_size;
        let channel = channels.channels.iter().find(|c| c.number == i as u32 && !c.empty);

        let Some(channel) = channel else {
            continue;
        };

        let original_record = original.get(offset, Some(fmt.channel_size)).map_err(|e| CodecError::Field {
            channel_index: i,
            field: "<record>".to_string(),
            cause: e.to_string(),
        })?;
        let record = encode_channel(original_record, channel, fmt)?;
        data[offset..offset + fmt.channel_size].copy_from_slice(&record);

        if let Some(nt) = fmt.name_table {
            let name_offset = nt.start_offset + i * nt.stride;
            let mut name_bytes = vec![0xFFu8; nt.max_len];
            for (j, c) in channel.name.chars().take(nt.max_len).enumerate() {
                name_bytes[j] = c.to_ascii_uppercase() as u8;
            }
            data[name_offset..name_offset + nt.max_len].copy_from_slice(&name_bytes);
        }
    }

    Ok(MemoryMap::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_u16_ctcss_round_trips() {
        assert_eq!(decode_tone_u16(0x0375), Tone::Ctcss(88.5));
        assert_eq!(encode_tone_u16(Tone::Ctcss(88.5)), 0x0375);
    }

    #[test]
    fn tone_u16_dtcs_round_trips_with_polarity() {
        let normal = Tone::Dtcs(23, DtcsPolarity::Normal);
        assert_eq!(encode_tone_u16(normal), 0x8017);
        assert_eq!(decode_tone_u16(0x8017), normal);

        let reversed = Tone::Dtcs(23, DtcsPolarity::Reversed);
        assert_eq!(encode_tone_u16(reversed), 0xC017);
        assert_eq!(decode_tone_u16(0xC017), reversed);
    }

    #[test]
    fn tone_u16_sentinel_values_decode_to_none() {
        assert_eq!(decode_tone_u16(0x0000), Tone::None);
        assert_eq!(decode_tone_u16(0xFFFF), Tone::None);
    }

    #[test]
    fn bcd_field_round_trips_through_descriptor_field_helpers() {
        let field = FieldSpec { name: "rx_freq", offset: 0, kind: FieldKind::BcdLe { size: 4, unit: 10 } };
        let mut record = vec![0u8; 4];
        write_field(&mut record, &field, 146_520_000).unwrap();
        let decoded = read_field(&record, &field).unwrap();
        assert_eq!(decoded, 146_520_000);
    }
}
