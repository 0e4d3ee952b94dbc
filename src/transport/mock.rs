// Scripted test double for ByteTransport.
//
// Reference: examples/PeterGrace-chirp-rs/src/serial/mock.rs (MockSerialPort).
// Tests pre-load the full response sequence up front via push_read_data,
// since the engine issues several sequential reads per call without
// yielding back to the test in between. Writes are captured with a
// timestamp so tests can assert a minimum inter-write gap.

use super::{ByteTransport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct MockTransport {
    read_buffer: Arc<Mutex<VecDeque<u8>>>,
    writes: Arc<Mutex<Vec<(Vec<u8>, Instant)>>>,
    read_delay: Duration,
    fail_next_read: Arc<Mutex<bool>>,
    fail_next_write: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            read_buffer: Arc::new(Mutex::new(VecDeque::new())),
            writes: Arc::new(Mutex::new(Vec::new())),
            read_delay: Duration::ZERO,
            fail_next_read: Arc::new(Mutex::new(false)),
            fail_next_write: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    /// Queue bytes the engine will read back, in order.
    pub fn push_read_data(&self, data: &[u8]) {
        self.read_buffer.lock().unwrap().extend(data.iter().copied());
    }

    pub fn fail_next_read(&self) {
        *self.fail_next_read.lock().unwrap() = true;
    }

    pub fn fail_next_write(&self) {
        *self.fail_next_write.lock().unwrap() = true;
    }

    pub fn bytes_pending(&self) -> usize {
        self.read_buffer.lock().unwrap().len()
    }

    pub fn writes(&self) -> Vec<(Vec<u8>, Instant)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn was_written(&self, expected: &[u8]) -> bool {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .any(|(buf, _)| buf.windows(expected.len()).any(|w| w == expected))
    }

    /// Smallest gap between consecutive writes, or `None` with fewer than two writes.
    pub fn min_write_gap(&self) -> Option<Duration> {
        let writes = self.writes.lock().unwrap();
        writes
            .windows(2)
            .map(|pair| pair[1].1.duration_since(pair[0].1))
            .min()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteTransport for MockTransport {
    async fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if self.read_delay > Duration::ZERO {
            tokio::time::sleep(self.read_delay).await;
        }
        if std::mem::take(&mut *self.fail_next_write.lock().unwrap()) {
            return Err(TransportError::InvalidConfig("injected write failure".into()));
        }
        self.writes.lock().unwrap().push((bytes.to_vec(), Instant::now()));
        Ok(())
    }

    async fn read_exact(&mut self, n: usize, deadline: Duration) -> Result<Vec<u8>, TransportError> {
        if self.read_delay > Duration::ZERO {
            tokio::time::sleep(self.read_delay).await;
        }
        if std::mem::take(&mut *self.fail_next_read.lock().unwrap()) {
            return Err(TransportError::Timeout { wanted: n, got: 0, deadline });
        }
        let mut buffer = self.read_buffer.lock().unwrap();
        if buffer.len() < n {
            let got = buffer.len();
            return Err(TransportError::Timeout { wanted: n, got, deadline });
        }
        Ok((0..n).map(|_| buffer.pop_front().unwrap()).collect())
    }

    async fn read_available(&mut self, max: usize, _deadline: Duration) -> Vec<u8> {
        if self.read_delay > Duration::ZERO {
            tokio::time::sleep(self.read_delay).await;
        }
        let mut buffer = self.read_buffer.lock().unwrap();
        let n = max.min(buffer.len());
        (0..n).map(|_| buffer.pop_front().unwrap()).collect()
    }

    async fn read_until(&mut self, suffix: &[u8], deadline: Duration) -> Result<Vec<u8>, TransportError> {
        if self.read_delay > Duration::ZERO {
            tokio::time::sleep(self.read_delay).await;
        }
        let mut buffer = self.read_buffer.lock().unwrap();
        let mut out = Vec::new();
        while let Some(b) = buffer.pop_front() {
            out.push(b);
            if out.ends_with(suffix) {
                return Ok(out);
            }
        }
        let got = out.len();
        Err(TransportError::Timeout { wanted: suffix.len(), got, deadline })
    }

    fn set_signals(&mut self, _dtr: bool, _rts: bool) -> Result<(), TransportError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_exact_returns_pushed_bytes() {
        let mut t = MockTransport::new();
        t.push_read_data(b"Hello");
        let out = t.read_exact(5, Duration::from_millis(100)).await.unwrap();
        assert_eq!(out, b"Hello");
    }

    #[tokio::test]
    async fn read_exact_times_out_on_short_buffer() {
        let mut t = MockTransport::new();
        t.push_read_data(b"Hi");
        let err = t.read_exact(5, Duration::from_millis(10)).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout { wanted: 5, got: 2, .. }));
    }

    #[tokio::test]
    async fn writes_are_captured_and_searchable() {
        let mut t = MockTransport::new();
        t.write(b"COMMAND123").await.unwrap();
        assert!(t.was_written(b"COMMAND"));
        assert!(!t.was_written(b"NOTFOUND"));
    }

    #[tokio::test]
    async fn injected_read_failure_fires_once() {
        let mut t = MockTransport::new();
        t.push_read_data(b"Hello");
        t.fail_next_read();
        assert!(t.read_exact(5, Duration::from_millis(10)).await.is_err());
        assert_eq!(t.read_exact(5, Duration::from_millis(10)).await.unwrap(), b"Hello");
    }
}
