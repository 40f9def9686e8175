//! StateVector — the engine's evolving 32-byte memory
//!
//! The vector is seeded from the SHA-256 digest of the seed's decimal
//! representation and then mutated in place by one rotation per step.
//! The fixed length is carried by the type, and every mutation stays in
//! byte range because all arithmetic happens on `u8`.

use serde::{Deserialize, Serialize};
use md5::Md5;
use sha2::{Digest, Sha256};

/// Number of bytes in the state vector (one per SHA-256 digest byte)
pub const STATE_LEN: usize = 32;

/// Modulus applied to the state sum to obtain drift
pub const DRIFT_MODULUS: u32 = 17;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVector {
    bytes: [u8; STATE_LEN],
}

impl StateVector {
    /// Derive the initial state from a seed
    pub fn from_seed(seed: i64) -> Self {
        let digest = Sha256::digest(seed.to_string().as_bytes());
        let mut bytes = [0u8; STATE_LEN];
        bytes.copy_from_slice(&digest);
        Self { bytes }
    }

    /// Hex digest the state was seeded from
    pub fn seed_digest(seed: i64) -> String {
        hex::encode(Sha256::digest(seed.to_string().as_bytes()))
    }

    pub fn from_bytes(bytes: [u8; STATE_LEN]) -> Self {
        Self { bytes }
    }

    /// Left-rotate by one, then fold the wrapped byte back into the head
    pub fn rotate(&mut self) {
        self.bytes.rotate_left(1);
        self.bytes[0] ^= self.bytes[STATE_LEN - 1];
    }

    /// Sum of all bytes modulo 17, in [0, 16]
    pub fn drift(&self) -> u8 {
        (self.sum() % DRIFT_MODULUS) as u8
    }

    pub fn sum(&self) -> u32 {
        self.bytes.iter().map(|&b| u32::from(b)).sum()
    }

    /// Sum of the first three bytes (fragment selector input)
    pub fn head_sum(&self) -> usize {
        self.bytes[..3].iter().map(|&b| usize::from(b)).sum()
    }

    pub fn first(&self) -> u8 {
        self.bytes[0]
    }

    /// Byte at `i` wrapped around the vector length
    pub fn at_wrapped(&self, i: usize) -> u8 {
        self.bytes[i % STATE_LEN]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Short session checksum: first 8 hex chars of MD5 over the
    /// bracketed list rendering, e.g. `[209, 16, 19, ...]`
    pub fn checksum(&self) -> String {
        let rendered = format!(
            "[{}]",
            self.bytes
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let digest = hex::encode(Md5::digest(rendered.as_bytes()));
        digest[..8].to_string()
    }
}
