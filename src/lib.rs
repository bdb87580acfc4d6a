//! A Rust-based software implementation of the SNOW-V stream cipher core.
//!
//! SNOW-V is a 256-bit-key, 128-bit-IV synchronous stream cipher producing
//! 128-bit keystream blocks, designed for 5G confidentiality/integrity with
//! AES-inspired diffusion. This crate implements the cipher core: the two
//! linear feedback shift registers (LFSR-A, LFSR-B), the AES-round-based
//! finite state machine (R1/R2/R3), key/IV setup, and keystream extraction.
//! The AEAD construction built on top of SNOW-V is out of scope; only the
//! AEAD-mode LFSR-B seed tweak is implemented, since it affects the core
//! state.
//!
//! ```
//! use snow_v::SnowV;
//!
//! let mut cipher = SnowV::new();
//! cipher.keyiv_setup(&[0u8; 32], &[0u8; 16], false).unwrap();
//! let z0 = cipher.keystream();
//! assert_eq!(
//!     z0,
//!     [
//!         0x69, 0xca, 0x6d, 0xaf, 0x9a, 0xe3, 0xb7, 0x2d, 0xb1, 0x34, 0xa8, 0x5a, 0x83, 0x7e,
//!         0x41, 0x9d,
//!     ]
//! );
//! ```

pub mod error;
pub mod snowv;

pub use error::{Error, Result};
pub use snowv::SnowV;
