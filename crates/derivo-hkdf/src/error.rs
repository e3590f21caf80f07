// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest name resolution error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Name does not identify a supported digest
    #[error("unrecognized digest algorithm: {0:?}")]
    Unrecognized(String),
}

/// HKDF error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
    /// No output length was supplied
    #[error("output length is required")]
    MissingLength,

    /// Output length of zero bits
    #[error("output length must be greater than zero")]
    ZeroLength,

    /// Output length is not a whole number of bytes
    #[error("output length of {0} bits is not a multiple of 8")]
    UnalignedLength(usize),

    /// Requested output length exceeds maximum (255 * HashLen)
    #[error("requested {requested} bytes exceeds maximum of {max} (255 * HashLen)")]
    OutputTooLong {
        /// Requested output length in bytes
        requested: usize,
        /// Maximum output length in bytes for the selected digest
        max: usize,
    },

    /// PRK shorter than HashLen passed to Expand
    #[error("pseudorandom key of {actual} bytes is shorter than HashLen ({expected})")]
    InvalidPrkLength {
        /// HashLen of the selected digest
        expected: usize,
        /// Supplied PRK length
        actual: usize,
    },
}
