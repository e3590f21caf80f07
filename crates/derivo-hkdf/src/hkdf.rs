// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869

use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::digest::{HashAlgorithm, MAX_BLOCK_LEN, MAX_HASH_LEN};
use crate::error::HkdfError;
use crate::hmac::HmacState;

/// HKDF state with all intermediate buffers
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HkdfState {
    /// HMAC state
    hmac: HmacState,

    /// PRK = HMAC-Hash(salt, IKM) from Extract phase, or a caller-supplied
    /// PRK of up to one block for Expand-only use
    prk: [u8; MAX_BLOCK_LEN],

    /// T(i-1) for Expand phase
    t_prev: [u8; MAX_HASH_LEN],

    /// T(i) for Expand phase
    t_curr: [u8; MAX_HASH_LEN],

    /// Length of valid data in t_prev (0 for T(0))
    t_prev_len: usize,
}

impl HkdfState {
    pub fn new(hash: HashAlgorithm) -> Self {
        Self {
            hmac: HmacState::new(hash),
            prk: [0u8; MAX_BLOCK_LEN],
            t_prev: [0u8; MAX_HASH_LEN],
            t_curr: [0u8; MAX_HASH_LEN],
            t_prev_len: 0,
        }
    }

    /// HKDF-Extract per RFC 5869 Section 2.2
    fn extract(&mut self, salt: &[u8], ikm: &[u8]) {
        self.hmac.compute(salt, &[ikm], &mut self.prk);
    }

    /// HKDF-Expand per RFC 5869 Section 2.3, keyed by `self.prk[..prk_len]`
    fn expand(&mut self, prk_len: usize, info: &[u8], out: &mut [u8]) {
        let hash_len = self.hmac.hash().output_len();
        let out_len = out.len();
        let n = out_len.div_ceil(hash_len);
        let mut offset = 0;

        // T(0) = empty
        self.t_prev_len = 0;

        for i in 1..=n {
            // n <= 255 is checked by every caller
            let counter = [i as u8];

            // T(i) = HMAC-Hash(PRK, T(i-1) || info || i)
            self.hmac.compute(
                &self.prk[..prk_len],
                &[&self.t_prev[..self.t_prev_len], info, &counter[..]],
                &mut self.t_curr,
            );

            let copy_len = core::cmp::min(hash_len, out_len - offset);
            out[offset..offset + copy_len].copy_from_slice(&self.t_curr[..copy_len]);
            offset += copy_len;

            // T(i-1) = T(i) for next iteration
            self.t_prev[..hash_len].copy_from_slice(&self.t_curr[..hash_len]);
            self.t_prev_len = hash_len;

            self.t_curr.zeroize();
        }

        self.t_prev.zeroize();
    }

    /// Full HKDF: Extract-then-Expand
    pub fn derive(&mut self, ikm: &[u8], salt: &[u8], info: &[u8], out: &mut [u8]) {
        let hash_len = self.hmac.hash().output_len();
        self.extract(salt, ikm);
        self.expand(hash_len, info, out);
        self.zeroize();
    }

    #[cfg(test)]
    pub fn is_zeroized(&self) -> bool {
        self.hmac.is_zeroized()
            && self.prk.iter().all(|&b| b == 0)
            && self.t_prev.iter().all(|&b| b == 0)
            && self.t_curr.iter().all(|&b| b == 0)
            && self.t_prev_len == 0
    }
}

fn check_output_len(hash: HashAlgorithm, len: usize) -> Result<(), HkdfError> {
    let max = hash.max_okm_len();
    if len > max {
        return Err(HkdfError::OutputTooLong {
            requested: len,
            max,
        });
    }
    Ok(())
}

/// Validates a requested output length given in bits.
///
/// Returns the length in bytes. Fails when the length is absent, zero, not a
/// multiple of 8, or larger than 255 * HashLen bytes.
pub fn output_len_from_bits(hash: HashAlgorithm, bits: Option<usize>) -> Result<usize, HkdfError> {
    let bits = bits.ok_or(HkdfError::MissingLength)?;
    if bits == 0 {
        return Err(HkdfError::ZeroLength);
    }
    if bits % 8 != 0 {
        return Err(HkdfError::UnalignedLength(bits));
    }

    let len = bits / 8;
    check_output_len(hash, len)?;
    Ok(len)
}

/// HKDF-Extract: PRK = HMAC-Hash(salt, IKM)
///
/// An empty `salt` is equivalent to HashLen zero bytes.
pub fn extract(hash: HashAlgorithm, salt: &[u8], ikm: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut prk = Zeroizing::new(vec![0u8; hash.output_len()]);
    HmacState::new(hash).compute(salt, &[ikm], &mut prk);
    prk
}

/// HKDF-Expand: fills `okm` from a pseudorandom key.
///
/// # Errors
/// - [`HkdfError::InvalidPrkLength`] if `prk` is shorter than HashLen
/// - [`HkdfError::OutputTooLong`] if `okm.len() > 255 * HashLen`
pub fn expand(hash: HashAlgorithm, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    let hash_len = hash.output_len();
    if prk.len() < hash_len {
        return Err(HkdfError::InvalidPrkLength {
            expected: hash_len,
            actual: prk.len(),
        });
    }
    check_output_len(hash, okm.len())?;

    if okm.is_empty() {
        return Ok(());
    }

    // HMAC hashes keys longer than the block itself; doing it up front
    // keeps the key within the state's PRK buffer.
    let hashed;
    let prk = if prk.len() > hash.block_len() {
        hashed = Zeroizing::new(hash.digest(prk));
        &hashed[..]
    } else {
        prk
    };

    let mut state = HkdfState::new(hash);
    state.prk[..prk.len()].copy_from_slice(prk);
    state.expand(prk.len(), info, okm);
    state.zeroize();

    Ok(())
}

/// HKDF: Extract-then-Expand into `okm`.
///
/// # Errors
/// Returns [`HkdfError::OutputTooLong`] if `okm.len() > 255 * HashLen`.
#[instrument(level = "trace", skip_all, fields(hash = %hash, okm_len = okm.len()))]
pub fn hkdf(
    hash: HashAlgorithm,
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    check_output_len(hash, okm.len())?;

    // Early return for zero-length output (valid, but no-op)
    if okm.is_empty() {
        return Ok(());
    }

    HkdfState::new(hash).derive(ikm, salt, info, okm);
    Ok(())
}

/// HKDF with the output length given in bits.
///
/// This is the derivation primitive behind `deriveBits`: the length is
/// validated first, then exactly `bits / 8` bytes are produced.
#[instrument(level = "trace", skip(ikm, salt, info), fields(salt_len = salt.len(), info_len = info.len()))]
pub fn derive_bits(
    hash: HashAlgorithm,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    bits: Option<usize>,
) -> Result<Vec<u8>, HkdfError> {
    let len = output_len_from_bits(hash, bits)?;
    let mut okm = vec![0u8; len];
    HkdfState::new(hash).derive(ikm, salt, info, &mut okm);
    Ok(okm)
}
