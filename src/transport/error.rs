use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("serial port error: {0}")]
    Port(#[from] serialport::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out waiting for {wanted} byte(s) within {deadline:?}, got {got}")]
    Timeout {
        wanted: usize,
        got: usize,
        deadline: Duration,
    },

    #[error("invalid transport configuration: {0}")]
    InvalidConfig(String),
}
