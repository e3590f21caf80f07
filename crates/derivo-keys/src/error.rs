// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::key::{KeyFormat, KeyId};
use crate::usage::KeyUsages;

/// Key object store error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Key format other than `raw`
    #[error("key format {0} is not supported")]
    UnsupportedFormat(KeyFormat),

    /// Algorithm not available in this build
    #[error("algorithm {0} is not supported")]
    UnsupportedAlgorithm(&'static str),

    /// Export of a key created with `extractable = false`
    #[error("{0} is not extractable")]
    NotExtractable(KeyId),

    /// Format name outside the `KeyFormat` enumeration
    #[error("unknown key format {0:?}")]
    UnknownFormat(String),

    /// Usage name outside the `KeyUsage` enumeration
    #[error("unknown key usage {0:?}")]
    UnknownUsage(String),

    /// Usages the algorithm does not allow
    #[error("usages {usages} are not permitted for {algorithm} keys")]
    ForbiddenUsages {
        /// Algorithm name
        algorithm: &'static str,
        /// The offending usages
        usages: KeyUsages,
    },

    /// Secret key requested without any usage
    #[error("{algorithm} secret keys require at least one usage")]
    EmptyUsages {
        /// Algorithm name
        algorithm: &'static str,
    },

    /// Import of a derivation key with `extractable = true`
    #[error("{algorithm} keys cannot be extractable")]
    ExtractableNotAllowed {
        /// Algorithm name
        algorithm: &'static str,
    },

    /// Key data of a length the algorithm does not accept
    #[error("{len} bytes of key data are invalid for {algorithm}")]
    InvalidKeyData {
        /// Algorithm name
        algorithm: &'static str,
        /// Supplied key data length in bytes
        len: usize,
    },

    /// Explicit HMAC length inconsistent with the key data
    #[error("length of {length} bits does not match {data_bits} bits of key data")]
    LengthMismatch {
        /// Requested length in bits
        length: usize,
        /// Key data length in bits
        data_bits: usize,
    },

    /// Bytes do not encode a point on the curve
    #[error("invalid {0} public key")]
    InvalidPublicKey(&'static str),
}
