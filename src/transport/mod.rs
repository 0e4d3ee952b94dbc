// Byte Transport: a duplex byte stream with deadline-bounded reads, a
// best-effort write, and out-of-band DTR/RTS control signals.
//
// Reference: examples/PeterGrace-chirp-rs/src/serial/comm.rs (SerialPort /
// SerialConfig) and src/serial/mock.rs (MockSerialPort), generalized into a
// trait so the clone engine can be written once against either a real
// serial port or a scripted test double.

pub mod error;
pub mod mock;
pub mod serial;

pub use error::TransportError;
pub use mock::MockTransport;
pub use serial::SerialTransport;

use std::time::Duration;

/// Settings a transport is opened with. No line discipline: 8-N-1 is the
/// only framing the engine ever asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialSettings {
    pub baud: u32,
    pub dtr: bool,
    pub rts: bool,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            baud: 9600,
            dtr: true,
            rts: true,
        }
    }
}

/// A duplex byte stream as the clone engine sees it. Implemented by a real
/// serial port and by a scripted test double; the engine is generic over
/// this trait rather than using a trait object, since async fns in traits
/// are not object-safe.
pub trait ByteTransport: Send {
    /// Returns once the OS has accepted the bytes. No buffering guarantees
    /// beyond that.
    async fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Returns exactly `n` bytes or fails `Timeout` once `deadline` passes.
    /// The already-received prefix is discarded on timeout.
    async fn read_exact(&mut self, n: usize, deadline: Duration) -> Result<Vec<u8>, TransportError>;

    /// Returns up to `max` bytes received within `deadline`; never fails,
    /// may return fewer bytes including none.
    async fn read_available(&mut self, max: usize, deadline: Duration) -> Vec<u8>;

    /// Returns all bytes up to and including the first occurrence of
    /// `suffix`, or fails `Timeout` if it never appears within `deadline`.
    async fn read_until(&mut self, suffix: &[u8], deadline: Duration) -> Result<Vec<u8>, TransportError>;

    fn set_signals(&mut self, dtr: bool, rts: bool) -> Result<(), TransportError>;

    fn close(&mut self) -> Result<(), TransportError>;
}
