// Real serial port transport.
//
// Reference: examples/PeterGrace-chirp-rs/src/serial/comm.rs. The serialport
// crate is blocking; every call here is wrapped in tokio::time::timeout the
// same way the teacher's SerialPort does it, polling with a short sleep on
// each platform TimedOut error rather than assuming a non-blocking fd.

use super::{ByteTransport, SerialSettings, TransportError};
use std::io;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, trace};

pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    name: String,
}

impl SerialTransport {
    pub fn open(port_name: &str, settings: SerialSettings) -> Result<Self, TransportError> {
        let mut port = serialport::new(port_name, settings.baud)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(50))
            .open()?;

        port.write_data_terminal_ready(settings.dtr)?;
        port.write_request_to_send(settings.rts)?;

        debug!(port = port_name, baud = settings.baud, "opened serial transport");

        Ok(Self {
            port,
            name: port_name.to_string(),
        })
    }

    pub fn port_name(&self) -> &str {
        &self.name
    }

    async fn poll_until(
        &mut self,
        deadline: Duration,
        mut step: impl FnMut(&mut dyn serialport::SerialPort) -> io::Result<bool>,
    ) -> Result<bool, TransportError> {
        let port = self.port.as_mut();
        timeout(deadline, async {
            loop {
                match step(port) {
                    Ok(done) => {
                        if done {
                            return Ok(true);
                        }
                    }
                    Err(ref e) if e.kind() == io::ErrorKind::TimedOut => {
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        continue;
                    }
                    Err(e) => return Err(TransportError::Io(e)),
                }
            }
        })
        .await
        .unwrap_or(Ok(false))
    }
}

impl ByteTransport for SerialTransport {
    async fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        trace!(len = bytes.len(), "write");
        self.port.write_all(bytes).map_err(TransportError::Io)?;
        self.port.flush().map_err(TransportError::Io)
    }

    async fn read_exact(&mut self, n: usize, deadline: Duration) -> Result<Vec<u8>, TransportError> {
        let mut out = Vec::with_capacity(n);
        let mut scratch = [0u8; 256];
        let done = self
            .poll_until(deadline, |port| {
                let want = n - out.len();
                if want == 0 {
                    return Ok(true);
                }
                let chunk = want.min(scratch.len());
                match port.read(&mut scratch[..chunk]) {
                    Ok(0) => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "port closed")),
                    Ok(got) => {
                        out.extend_from_slice(&scratch[..got]);
                        Ok(out.len() >= n)
                    }
                    Err(e) => Err(e),
                }
            })
            .await?;

        if done && out.len() == n {
            Ok(out)
        } else {
            Err(TransportError::Timeout {
                wanted: n,
                got: out.len(),
                deadline,
            })
        }
    }

    async fn read_available(&mut self, max: usize, deadline: Duration) -> Vec<u8> {
        let mut out = Vec::new();
        let mut scratch = vec![0u8; max];
        let _ = self
            .poll_until(deadline, |port| match port.read(&mut scratch) {
                Ok(0) => Ok(true),
                Ok(got) => {
                    out.extend_from_slice(&scratch[..got]);
                    Ok(true)
                }
                Err(ref e) if e.kind() == io::ErrorKind::TimedOut => Ok(false),
                Err(e) => Err(e),
            })
            .await;
        out
    }

    async fn read_until(&mut self, suffix: &[u8], deadline: Duration) -> Result<Vec<u8>, TransportError> {
        let mut out = Vec::new();
        let mut byte = [0u8; 1];
        let done = self
            .poll_until(deadline, |port| match port.read(&mut byte) {
                Ok(0) => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "port closed")),
                Ok(_) => {
                    out.push(byte[0]);
                    Ok(out.ends_with(suffix))
                }
                Err(e) => Err(e),
            })
            .await?;

        if done {
            Ok(out)
        } else {
            Err(TransportError::Timeout {
                wanted: suffix.len(),
                got: out.len(),
                deadline,
            })
        }
    }

    fn set_signals(&mut self, dtr: bool, rts: bool) -> Result<(), TransportError> {
        self.port.write_data_terminal_ready(dtr)?;
        self.port.write_request_to_send(rts)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

/// List available serial ports by OS device name.
pub fn list_ports() -> Result<Vec<String>, TransportError> {
    Ok(serialport::available_ports()?
        .into_iter()
        .map(|p| p.port_name)
        .collect())
}
