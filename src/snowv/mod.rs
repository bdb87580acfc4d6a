//! SNOW-V: a 256-bit-key, 128-bit-IV synchronous stream cipher.
//!
//! This module is organized the way the two halves of the algorithm are
//! described in the SNOW-V specification: [`core`] holds the stateless
//! primitives (S-box, σ permutation, GF(2^16) helpers, the AES-round-based
//! FSM update, and the LFSR update), and [`cipher`] assembles them into the
//! public [`SnowV`] state machine with key/IV setup, keystream generation,
//! and the `encrypt` XOR-stream wrapper.

pub mod cipher;
pub mod core;

pub use cipher::SnowV;

#[cfg(test)]
mod tests;
