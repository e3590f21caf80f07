// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over [`HashAlgorithm`]

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::digest::{DigestState, HashAlgorithm, MAX_BLOCK_LEN, MAX_HASH_LEN};

/// HMAC state with all intermediate buffers.
///
/// Buffers are sized for the largest supported digest; only the leading
/// `block_len` / `output_len` bytes are used for smaller ones.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacState {
    #[zeroize(skip)]
    hash: HashAlgorithm,
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; MAX_BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; MAX_BLOCK_LEN],
    /// Key block: the key itself, or H(key) when key > block_len
    key_block: [u8; MAX_BLOCK_LEN],
    /// Inner hash result: H(K ⊕ ipad || message)
    inner_hash: [u8; MAX_HASH_LEN],
}

impl HmacState {
    pub fn new(hash: HashAlgorithm) -> Self {
        Self {
            hash,
            k_ipad: [0u8; MAX_BLOCK_LEN],
            k_opad: [0u8; MAX_BLOCK_LEN],
            key_block: [0u8; MAX_BLOCK_LEN],
            inner_hash: [0u8; MAX_HASH_LEN],
        }
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// HMAC(key, parts[0] || parts[1] || ...) into `out[..HashLen]`.
    ///
    /// The message is streamed part by part so callers never concatenate
    /// secret buffers.
    pub fn compute(&mut self, key: &[u8], parts: &[&[u8]], out: &mut [u8]) {
        let block_len = self.hash.block_len();
        let hash_len = self.hash.output_len();

        // Prevent stale-bytes window
        self.key_block.zeroize();

        // Keys shorter than the block are implicitly zero-padded; this is
        // also what makes an empty HKDF salt equal to HashLen zero bytes.
        let key_len = if key.len() > block_len {
            let mut sha = DigestState::new(self.hash);
            sha.update(key);
            sha.finalize_into(&mut self.key_block);
            hash_len
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
            key.len()
        };

        self.k_ipad[..block_len].fill(0x36);
        self.k_opad[..block_len].fill(0x5c);
        for i in 0..key_len {
            self.k_ipad[i] ^= self.key_block[i];
            self.k_opad[i] ^= self.key_block[i];
        }

        // Inner hash: H(k_ipad || message)
        let mut sha_inner = DigestState::new(self.hash);
        sha_inner.update(&self.k_ipad[..block_len]);
        for part in parts {
            sha_inner.update(part);
        }
        sha_inner.finalize_into(&mut self.inner_hash);

        // Outer hash: H(k_opad || inner_hash) -> out
        let mut sha_outer = DigestState::new(self.hash);
        sha_outer.update(&self.k_opad[..block_len]);
        sha_outer.update(&self.inner_hash[..hash_len]);
        sha_outer.finalize_into(out);

        self.zeroize();
    }

    #[cfg(test)]
    pub fn is_zeroized(&self) -> bool {
        self.k_ipad.iter().all(|&b| b == 0)
            && self.k_opad.iter().all(|&b| b == 0)
            && self.key_block.iter().all(|&b| b == 0)
            && self.inner_hash.iter().all(|&b| b == 0)
    }
}

/// HMAC of `data` under `key` with the selected digest.
///
/// Returns a zeroizing buffer of HashLen bytes.
pub fn hmac(hash: HashAlgorithm, key: &[u8], data: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; hash.output_len()]);
    HmacState::new(hash).compute(key, &[data], &mut out);
    out
}
