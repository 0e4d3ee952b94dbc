// Channel data model.
//
// Reference: examples/PeterGrace-chirp-rs/src/core/memory.rs (Memory), whose
// fields this keeps in spirit but replaces the free-string sentinel fields
// (duplex/tmode/mode/skip/polarity) with tagged enums, per the catalog's
// move from per-model driver code to descriptor-driven decoding: a decoder
// that only ever produces a closed set of variants can't hand a consumer
// a typo'd mode string.

use crate::core::constants::{ALL_DTCS_CODES, CROSS_MODES, MODES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio modulation/operating mode. `Other` covers entries in the wider
/// mode table (`core::constants::MODES`) that no catalog entry here uses
/// yet, so decoding a model with an unfamiliar mode byte doesn't fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Fm,
    Nfm,
    Wfm,
    Am,
    NarrowAm,
    Usb,
    Lsb,
    Cw,
    Dv,
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Fm => "FM",
            Mode::Nfm => "NFM",
            Mode::Wfm => "WFM",
            Mode::Am => "AM",
            Mode::NarrowAm => "NAM",
            Mode::Usb => "USB",
            Mode::Lsb => "LSB",
            Mode::Cw => "CW",
            Mode::Dv => "DV",
            Mode::Other(s) => s,
        }
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        match s {
            "FM" => Mode::Fm,
            "NFM" => Mode::Nfm,
            "WFM" => Mode::Wfm,
            "AM" => Mode::Am,
            "NAM" => Mode::NarrowAm,
            "USB" => Mode::Usb,
            "LSB" => Mode::Lsb,
            "CW" => Mode::Cw,
            "DV" => Mode::Dv,
            other if MODES.contains(&other) => Mode::Other(other.to_string()),
            other => Mode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Repeater duplex direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duplex {
    Simplex,
    Plus,
    Minus,
    Split,
    Off,
}

impl Duplex {
    pub fn as_str(&self) -> &str {
        match self {
            Duplex::Simplex => "",
            Duplex::Plus => "+",
            Duplex::Minus => "-",
            Duplex::Split => "split",
            Duplex::Off => "off",
        }
    }
}

impl From<&str> for Duplex {
    fn from(s: &str) -> Self {
        match s {
            "+" => Duplex::Plus,
            "-" => Duplex::Minus,
            "split" => Duplex::Split,
            "off" => Duplex::Off,
            _ => Duplex::Simplex,
        }
    }
}

impl fmt::Display for Duplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scan skip setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skip {
    None,
    Skip,
    Priority,
}

impl Skip {
    pub fn as_str(&self) -> &str {
        match self {
            Skip::None => "",
            Skip::Skip => "S",
            Skip::Priority => "P",
        }
    }
}

impl From<&str> for Skip {
    fn from(s: &str) -> Self {
        match s {
            "S" => Skip::Skip,
            "P" => Skip::Priority,
            _ => Skip::None,
        }
    }
}

/// DTCS code polarity on one leg (tx or rx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtcsPolarity {
    Normal,
    Reversed,
}

impl DtcsPolarity {
    pub fn as_char(&self) -> char {
        match self {
            DtcsPolarity::Normal => 'N',
            DtcsPolarity::Reversed => 'R',
        }
    }
}

impl From<char> for DtcsPolarity {
    fn from(c: char) -> Self {
        if c == 'R' {
            DtcsPolarity::Reversed
        } else {
            DtcsPolarity::Normal
        }
    }
}

/// A squelch tone setting on one leg (tx or rx) of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tone {
    None,
    Ctcss(f32),
    Dtcs(u16, DtcsPolarity),
}

impl Tone {
    pub fn is_dtcs_code_valid(code: u16) -> bool {
        ALL_DTCS_CODES.contains(&code)
    }
}

/// Combined tone-squelch mode for a channel, tying the tx/rx `Tone`
/// settings together the way a radio's front panel presents them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToneMode {
    None,
    Tone { tx: f32 },
    /// TX and RX CTCSS tones, stored independently (`rtone`/`ctone`):
    /// radios commonly run different tones on each leg.
    Tsql { tx: f32, rx: f32 },
    Dtcs { code: u16, polarity: DtcsPolarity },
    DtcsR { code: u16, polarity: DtcsPolarity },
    TsqlR { freq: f32 },
    Cross { tx: Tone, rx: Tone },
}

impl ToneMode {
    /// Build from independent tx/rx tone settings the way a codec field
    /// layer decodes them (two raw tone fields, one derived mode).
    pub fn from_tx_rx(tx: Tone, rx: Tone) -> Self {
        match (tx, rx) {
            (Tone::None, Tone::None) => ToneMode::None,
            (Tone::Ctcss(f), Tone::None) => ToneMode::Tone { tx: f },
            (Tone::Ctcss(tx_f), Tone::Ctcss(rx_f)) => ToneMode::Tsql { tx: tx_f, rx: rx_f },
            (Tone::Dtcs(c, p), Tone::None) => ToneMode::Dtcs { code: c, polarity: p },
            (Tone::Dtcs(c, p), Tone::Dtcs(c2, _)) if c == c2 => ToneMode::Dtcs { code: c, polarity: p },
            (Tone::None, Tone::Ctcss(f)) => ToneMode::TsqlR { freq: f },
            (Tone::None, Tone::Dtcs(c, p)) => ToneMode::DtcsR { code: c, polarity: p },
            (tx, rx) => ToneMode::Cross { tx, rx },
        }
    }

    /// Decompose back into independent tx/rx tone settings for encoding.
    pub fn to_tx_rx(self) -> (Tone, Tone) {
        match self {
            ToneMode::None => (Tone::None, Tone::None),
            ToneMode::Tone { tx } => (Tone::Ctcss(tx), Tone::None),
            ToneMode::Tsql { tx, rx } => (Tone::Ctcss(tx), Tone::Ctcss(rx)),
            ToneMode::Dtcs { code, polarity } => (Tone::Dtcs(code, polarity), Tone::Dtcs(code, polarity)),
            ToneMode::DtcsR { code, polarity } => (Tone::None, Tone::Dtcs(code, polarity)),
            ToneMode::TsqlR { freq } => (Tone::None, Tone::Ctcss(freq)),
            ToneMode::Cross { tx, rx } => (tx, rx),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToneMode::None => "",
            ToneMode::Tone { .. } => "Tone",
            ToneMode::Tsql { .. } => "TSQL",
            ToneMode::Dtcs { .. } => "DTCS",
            ToneMode::DtcsR { .. } => "DTCS-R",
            ToneMode::TsqlR { .. } => "TSQL-R",
            ToneMode::Cross { .. } => "Cross",
        }
    }
}

/// Radio power level: a label paired with a wattage, the way the source
/// catalog's multi-level power settings are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Power {
    pub label: String,
    pub watts: f32,
}

impl Power {
    pub fn new(label: impl Into<String>, watts: f32) -> Self {
        Self { label: label.into(), watts }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}W)", self.label, self.watts)
    }
}

/// A single radio memory channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub number: u32,
    pub name: String,
    pub freq_hz: u64,
    pub duplex: Duplex,
    pub offset_hz: u64,
    pub mode: Mode,
    pub tone_mode: ToneMode,
    pub tuning_step_khz: f32,
    pub skip: Skip,
    pub power: Option<Power>,
    pub empty: bool,
}

impl Channel {
    pub fn new_empty(number: u32) -> Self {
        Self {
            number,
            name: String::new(),
            freq_hz: 0,
            duplex: Duplex::Simplex,
            offset_hz: 0,
            mode: Mode::Fm,
            tone_mode: ToneMode::None,
            tuning_step_khz: 5.0,
            skip: Skip::None,
            power: None,
            empty: true,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return write!(f, "#{} <empty>", self.number);
        }
        write!(
            f,
            "#{} {} {:.6} MHz {}{} [{}]",
            self.number,
            self.name,
            self.freq_hz as f64 / 1_000_000.0,
            self.mode,
            self.duplex,
            self.tone_mode.label(),
        )
    }
}

/// An indexed set of channels making up a radio's whole memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelArray {
    pub channels: Vec<Channel>,
}

impl ChannelArray {
    pub fn get(&self, number: u32) -> Option<&Channel> {
        self.channels.iter().find(|c| c.number == number && !c.empty)
    }

    pub fn non_empty(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter().filter(|c| !c.empty)
    }
}

/// Verifies CROSS_MODES still names the 8 legacy combinations, kept
/// around since ToneMode::Cross covers them structurally now.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_modes_table_is_untouched() {
        assert_eq!(CROSS_MODES.len(), 8);
    }

    #[test]
    fn tone_mode_round_trips_through_tx_rx() {
        let cases = [
            ToneMode::None,
            ToneMode::Tone { tx: 88.5 },
            ToneMode::Tsql { tx: 123.0, rx: 123.0 },
            ToneMode::Dtcs { code: 23, polarity: DtcsPolarity::Normal },
            ToneMode::DtcsR { code: 25, polarity: DtcsPolarity::Reversed },
            ToneMode::TsqlR { freq: 100.0 },
            ToneMode::Cross { tx: Tone::Ctcss(100.0), rx: Tone::Dtcs(23, DtcsPolarity::Normal) },
        ];
        for case in cases {
            let (tx, rx) = case.to_tx_rx();
            assert_eq!(ToneMode::from_tx_rx(tx, rx), case);
        }
    }

    #[test]
    fn distinct_tx_rx_ctcss_tones_are_kept_independent() {
        let (tx, rx) = (Tone::Ctcss(100.0), Tone::Ctcss(107.2));
        assert_eq!(ToneMode::from_tx_rx(tx, rx), ToneMode::Tsql { tx: 100.0, rx: 107.2 });
    }

    #[test]
    fn mismatched_dtcs_codes_fall_through_to_cross() {
        let tx = Tone::Dtcs(23, DtcsPolarity::Normal);
        let rx = Tone::Dtcs(25, DtcsPolarity::Normal);
        assert_eq!(ToneMode::from_tx_rx(tx, rx), ToneMode::Cross { tx, rx });
    }

    #[test]
    fn matching_dtcs_codes_classify_as_dtcs() {
        let tx = Tone::Dtcs(23, DtcsPolarity::Normal);
        let rx = Tone::Dtcs(23, DtcsPolarity::Reversed);
        assert_eq!(ToneMode::from_tx_rx(tx, rx), ToneMode::Dtcs { code: 23, polarity: DtcsPolarity::Normal });
    }

    #[test]
    fn mode_from_str_recognizes_known_and_falls_back() {
        assert_eq!(Mode::from("FM"), Mode::Fm);
        assert_eq!(Mode::from("P25"), Mode::Other("P25".to_string()));
    }

    /// Channel tables round-trip through JSON, the shape tooling outside
    /// this crate (export scripts, fixture files) is expected to consume.
    #[test]
    fn channel_array_round_trips_through_json() {
        let array = ChannelArray {
            channels: vec![
                Channel {
                    number: 1,
                    name: "REPEATER".to_string(),
                    freq_hz: 146_520_000,
                    duplex: Duplex::Plus,
                    offset_hz: 600_000,
                    mode: Mode::Fm,
                    tone_mode: ToneMode::Tone { tx: 88.5 },
                    tuning_step_khz: 5.0,
                    skip: Skip::None,
                    power: Some(Power::new("High", 5.0)),
                    empty: false,
                },
                Channel::new_empty(2),
            ],
        };

        let json = serde_json::to_string(&array).expect("channel array should serialize");
        let restored: ChannelArray = serde_json::from_str(&json).expect("channel array should deserialize");
        assert_eq!(restored.channels, array.channels);
    }
}
