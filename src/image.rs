// A radio's full memory image: raw bytes plus the model they were read
// with, and the decoded channel table derived from them on demand.
//
// Reference: examples/PeterGrace-chirp-rs/src/memmap (MemoryMap as the raw
// byte container) and src/drivers/traits.rs's CloneModeRadio::process_mmap,
// generalized into one struct that pairs a raw image with the
// ModelDescriptor that explains it, rather than a radio-specific wrapper.

use crate::codec::{self, Channel, ChannelArray, CodecError};
use crate::descriptors::ModelDescriptor;
use crate::memmap::MemoryMap;

/// A raw memory dump tied to the model descriptor it was captured against.
///
/// `header` carries the identification bytes the handshake returned, when
/// the image was built straight off a live `clone_in` rather than loaded
/// from a saved dump file (a dump file holds only the memory's raw bytes,
/// per the bit-exact round-trip invariant, so it has no header to restore).
#[derive(Debug, Clone)]
pub struct RadioImage {
    pub model: &'static ModelDescriptor,
    pub header: Vec<u8>,
    mmap: MemoryMap,
}

impl RadioImage {
    /// Wrap a freshly read image. Fails if the byte count doesn't match
    /// what `model`'s memory format expects.
    pub fn new(model: &'static ModelDescriptor, bytes: Vec<u8>) -> Result<Self, CodecError> {
        Self::with_header(model, bytes, Vec::new())
    }

    /// As `new`, but also records the handshake's identification bytes.
    pub fn with_header(model: &'static ModelDescriptor, bytes: Vec<u8>, header: Vec<u8>) -> Result<Self, CodecError> {
        let needed = model.memsize();
        if bytes.len() != needed {
            return Err(CodecError::MapTooSmall { needed, available: bytes.len() });
        }
        Ok(Self { model, header, mmap: MemoryMap::new(bytes) })
    }

    pub fn raw(&self) -> &[u8] {
        self.mmap.get_packed()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.mmap.to_vec()
    }

    /// Decode the channel table out of the raw image.
    pub fn channels(&self) -> Result<ChannelArray, CodecError> {
        codec::decode(&self.mmap, self.model.memory_format)
    }

    /// Apply one changed channel back into the raw image. Only the fields
    /// the changed channel owns are rewritten; every other byte of the
    /// image, including reserved/undeclared bytes within its own record,
    /// is carried through from the current raw bytes unchanged.
    pub fn set_channel(&mut self, channel: Channel) -> Result<(), CodecError> {
        let mut channels = self.channels()?;
        if let Some(existing) = channels.channels.iter_mut().find(|c| c.number == channel.number) {
            *existing = channel;
        } else {
            channels.channels.push(channel);
        }
        let encoded = codec::encode(&self.mmap, &channels, self.model.memory_format)?;
        self.mmap = encoded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Duplex, Mode, Skip, ToneMode};
    use crate::descriptors::registry;

    fn uv5r() -> &'static ModelDescriptor {
        registry::find("Baofeng", "UV-5R").expect("catalog should carry the UV-5R")
    }

    #[test]
    fn new_rejects_wrong_sized_buffers() {
        let model = uv5r();
        let err = RadioImage::new(model, vec![0u8; 4]).unwrap_err();
        match err {
            CodecError::MapTooSmall { needed, available } => {
                assert_eq!(needed, model.memsize());
                assert_eq!(available, 4);
            }
            other => panic!("expected MapTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn fresh_image_decodes_to_all_empty_channels() {
        let model = uv5r();
        let image = RadioImage::new(model, vec![0xFFu8; model.memsize()]).unwrap();
        let channels = image.channels().unwrap();
        assert!(channels.non_empty().next().is_none());
    }

    #[test]
    fn set_channel_round_trips_through_raw_bytes() {
        let model = uv5r();
        let mut image = RadioImage::new(model, vec![0xFFu8; model.memsize()]).unwrap();

        let channel = Channel {
            number: 1,
            name: "HOME".to_string(),
            freq_hz: 146_520_000,
            duplex: Duplex::Simplex,
            offset_hz: 0,
            mode: Mode::Fm,
            tone_mode: ToneMode::None,
            tuning_step_khz: 5.0,
            skip: Skip::None,
            power: None,
            empty: false,
        };
        image.set_channel(channel.clone()).unwrap();

        let decoded = image.channels().unwrap();
        let stored = decoded.get(1).expect("channel 1 should now be present");
        assert_eq!(stored.freq_hz, channel.freq_hz);
        assert_eq!(stored.name, channel.name);
        assert!(!stored.empty);

        assert_eq!(image.raw().len(), model.memsize());
    }

    #[test]
    fn set_channel_preserves_bytes_outside_declared_fields() {
        let model = uv5r();
        let mut bytes = vec![0xFFu8; model.memsize()];

        // Bytes 12-13 of a UV-5R channel record fall outside every
        // declared field/flag range; a real image could have anything
        // there and a re-encode must not clobber it.
        let record_offset = model.memory_format.start_offset + model.memory_format.channel_size;
        bytes[record_offset + 12] = 0xAB;
        bytes[record_offset + 13] = 0xCD;

        let mut image = RadioImage::new(model, bytes).unwrap();
        image
            .set_channel(Channel {
                number: 1,
                name: "HOME".to_string(),
                freq_hz: 146_520_000,
                duplex: Duplex::Simplex,
                offset_hz: 0,
                mode: Mode::Fm,
                tone_mode: ToneMode::None,
                tuning_step_khz: 5.0,
                skip: Skip::None,
                power: None,
                empty: false,
            })
            .unwrap();

        assert_eq!(image.raw()[record_offset + 12], 0xAB);
        assert_eq!(image.raw()[record_offset + 13], 0xCD);
    }
}
