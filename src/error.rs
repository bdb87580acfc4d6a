//! Crate-wide error and result types.
//!
//! The cipher core has a tiny error surface: both failures are detected at
//! `keyiv_setup` entry, before any state is touched. `keystream` and
//! `encrypt` are pure computations over already-validated state and cannot
//! fail.

use std::fmt;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`crate::SnowV::keyiv_setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key was not exactly 32 bytes.
    InvalidKeyLength {
        /// The length that was actually supplied.
        got: usize,
    },
    /// The IV was not exactly 16 bytes.
    InvalidIvLength {
        /// The length that was actually supplied.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { got } => {
                write!(f, "invalid SNOW-V key length: expected 32 bytes, got {got}")
            }
            Error::InvalidIvLength { got } => {
                write!(f, "invalid SNOW-V IV length: expected 16 bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for Error {}
