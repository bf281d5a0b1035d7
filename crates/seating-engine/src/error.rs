//! Error types for availability computation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid slot interval: {0} minutes")]
    InvalidSlotInterval(u32),
}

pub type Result<T> = std::result::Result<T, SeatingError>;
