//! The public SNOW-V cipher state and its key/IV setup, keystream, and
//! encryption entry points.
//!
//! This module wraps the primitives in [`super::core`] into the single
//! coherent state machine described in spec section 3: two LFSR banks, the
//! three FSM registers, and (for conformance testing) the sequence of
//! keystream blocks produced during initialization.

use super::core::{keystream_block, Fsm, Lfsr, AEAD_B_SEED};
use crate::error::{Error, Result};

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;
const INIT_ROUNDS: usize = 16;

/// SNOW-V cipher state: a 256-bit-key, 128-bit-IV synchronous stream cipher
/// producing 128-bit keystream blocks.
///
/// A single instance is a single-threaded state machine: every operation
/// mutates `self`, and the struct carries no interior mutability or
/// shareable handles, so it is not `Sync`-friendly to use across threads
/// without external synchronization. Multiple independent instances are
/// trivially parallel, since none of them share state.
#[derive(Debug, Clone, Default)]
pub struct SnowV {
    lfsr: Lfsr,
    fsm: Fsm,
    /// The 16 keystream blocks produced during the initialization rounds of
    /// the most recent [`SnowV::keyiv_setup`] call, in order. This is a
    /// diagnostic artifact for conformance testing; it does not feed back
    /// into any computation.
    pub init_z_values: Vec<[u8; 16]>,
}

impl SnowV {
    /// Construct a cipher instance with all state zeroed.
    ///
    /// The instance is not usable for keystream generation until
    /// [`SnowV::keyiv_setup`] has been called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the cipher with a 256-bit key and a 128-bit IV.
    ///
    /// Re-running setup on an existing instance resets `R1`/`R2`/`R3` to
    /// zero and clears `init_z_values`; the LFSR banks are reseeded from
    /// scratch from the new key and IV, so no prior state leaks into the
    /// new session.
    ///
    /// When `aead_mode` is set, the first eight cells of LFSR-B are
    /// overwritten with the fixed AEAD seed constants instead of zero; this
    /// is the only difference from non-AEAD setup (testable property #5).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] if `key` is not exactly 32 bytes,
    /// or [`Error::InvalidIvLength`] if `iv` is not exactly 16 bytes. Both
    /// checks happen before any state is mutated.
    pub fn keyiv_setup(&mut self, key: &[u8], iv: &[u8], aead_mode: bool) -> Result<()> {
        if key.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength { got: key.len() });
        }
        if iv.len() != IV_LEN {
            return Err(Error::InvalidIvLength { got: iv.len() });
        }

        let mut lfsr = Lfsr::default();
        for i in 0..8 {
            lfsr.a[i] = u16::from_le_bytes([iv[2 * i], iv[2 * i + 1]]);
            lfsr.a[i + 8] = u16::from_le_bytes([key[2 * i], key[2 * i + 1]]);
            lfsr.b[i] = 0;
            lfsr.b[i + 8] = u16::from_le_bytes([key[2 * i + 16], key[2 * i + 17]]);
        }
        if aead_mode {
            lfsr.b[0..8].copy_from_slice(&AEAD_B_SEED);
        }

        self.lfsr = lfsr;
        self.fsm = Fsm::default();
        self.init_z_values = Vec::with_capacity(INIT_ROUNDS);

        for round in 0..INIT_ROUNDS {
            let z = self.keystream();
            for j in 0..8 {
                self.lfsr.a[j + 8] ^= u16::from_le_bytes([z[2 * j], z[2 * j + 1]]);
            }
            if round == 14 {
                for j in 0..4 {
                    self.fsm.r1[j] ^= u32::from_le_bytes([
                        key[4 * j],
                        key[4 * j + 1],
                        key[4 * j + 2],
                        key[4 * j + 3],
                    ]);
                }
            }
            if round == 15 {
                for j in 0..4 {
                    self.fsm.r1[j] ^= u32::from_le_bytes([
                        key[4 * j + 16],
                        key[4 * j + 17],
                        key[4 * j + 18],
                        key[4 * j + 19],
                    ]);
                }
            }
            self.init_z_values.push(z);
        }

        Ok(())
    }

    /// Produce the next 16-byte keystream block, advancing the FSM and LFSR
    /// state.
    pub fn keystream(&mut self) -> [u8; 16] {
        let z = keystream_block(&self.lfsr, &self.fsm);
        self.fsm.update(&self.lfsr.a);
        self.lfsr.update();
        z
    }

    /// Produce `len` bytes of keystream, as the concatenation of successive
    /// 16-byte blocks truncated to `len`.
    pub fn generate_keystream(&mut self, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            out.extend_from_slice(&self.keystream());
        }
        out.truncate(len);
        out
    }

    /// XOR `plaintext` with the keystream, one 16-byte block at a time.
    ///
    /// The final block may be shorter than 16 bytes; only as many keystream
    /// bytes as the input block are consumed for the XOR, but the cipher
    /// still advances a full block internally, discarding the unused
    /// keystream bytes. An empty `plaintext` returns an empty ciphertext
    /// with no state advancement.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks(16) {
            let ks = self.keystream();
            out.extend(chunk.iter().zip(ks.iter()).map(|(p, k)| p ^ k));
        }
        out
    }
}
