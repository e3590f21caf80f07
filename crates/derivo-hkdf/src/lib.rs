// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF over SHA-1 and SHA-2 with secure memory handling
//!
//! Implementation per RFC 5869 (HKDF) and RFC 2104 (HMAC), with digests from
//! the RustCrypto `sha1`/`sha2` crates. All intermediate values (HMAC pads,
//! PRK, expand blocks) live in state structs that are zeroized after use and
//! on drop.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! # Example
//!
//! ```rust
//! use derivo_hkdf::{HashAlgorithm, derive_bits};
//!
//! let okm = derive_bits(HashAlgorithm::Sha256, b"ikm", b"salt", b"info", Some(256))?;
//! assert_eq!(okm.len(), 32);
//! # Ok::<(), derivo_hkdf::HkdfError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod digest;
mod error;
mod hkdf;
mod hmac;

pub use self::digest::{HashAlgorithm, MAX_BLOCK_LEN, MAX_HASH_LEN};
pub use error::{DigestError, HkdfError};
pub use hkdf::{derive_bits, expand, extract, hkdf, output_len_from_bits};
pub use hmac::hmac;
