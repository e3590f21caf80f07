// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest provider: SHA-1 and SHA-2 per RFC 6234

use core::fmt;
use core::str::FromStr;

use digest::Digest;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::error::DigestError;

/// Largest digest output among supported algorithms (SHA-512)
pub const MAX_HASH_LEN: usize = 64;

/// Largest block size among supported algorithms (SHA-384/SHA-512)
pub const MAX_BLOCK_LEN: usize = 128;

/// RFC 5869: OKM length is bounded by 255 * HashLen
const MAX_EXPAND_BLOCKS: usize = 255;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (20-byte output)
    Sha1,
    /// SHA-256 (32-byte output)
    Sha256,
    /// SHA-384 (48-byte output)
    Sha384,
    /// SHA-512 (64-byte output)
    Sha512,
}

impl HashAlgorithm {
    /// Every supported digest, in ascending output size
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical (registered) algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest output size in bytes (HashLen)
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Compression function block size in bytes
    pub const fn block_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 | HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha512 => 128,
        }
    }

    /// Maximum HKDF output length in bytes: 255 * HashLen
    pub const fn max_okm_len(self) -> usize {
        MAX_EXPAND_BLOCKS * self.output_len()
    }

    /// One-shot digest of `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        let mut state = DigestState::new(self);
        state.update(data);
        state.finalize_into(&mut out);
        out
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DigestError;

    /// Algorithm names match ASCII case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DigestError::Unrecognized(name.into()))
    }
}

/// Streaming digest state dispatched over [`HashAlgorithm`]
pub(crate) enum DigestState {
    Sha1(Sha1),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl DigestState {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha1 => DigestState::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => DigestState::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => DigestState::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => DigestState::Sha512(Sha512::new()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Sha1(h) => Digest::update(h, data),
            DigestState::Sha256(h) => Digest::update(h, data),
            DigestState::Sha384(h) => Digest::update(h, data),
            DigestState::Sha512(h) => Digest::update(h, data),
        }
    }

    /// Writes the digest into `out[..HashLen]` and resets the state.
    ///
    /// `out` must be at least HashLen bytes.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        match self {
            DigestState::Sha1(h) => copy_and_wipe(&mut h.finalize_reset(), out),
            DigestState::Sha256(h) => copy_and_wipe(&mut h.finalize_reset(), out),
            DigestState::Sha384(h) => copy_and_wipe(&mut h.finalize_reset(), out),
            DigestState::Sha512(h) => copy_and_wipe(&mut h.finalize_reset(), out),
        }
    }
}

#[inline(always)]
fn copy_and_wipe(digest: &mut [u8], out: &mut [u8]) {
    out[..digest.len()].copy_from_slice(digest);
    digest.zeroize();
}
