// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! WebCrypto-style HKDF key derivation
//!
//! [`DerivationEngine`] exposes `importKey`, `deriveBits`, `deriveKey` and
//! `exportKey` with WebCrypto validation order and error semantics. HKDF
//! itself lives in [`derivo_hkdf`]; key objects in [`derivo_keys`].
//!
//! # Quick Start
//!
//! ```rust
//! use derivo::{DerivationEngine, DerivedKeyParams, HkdfParams, KeyFormat, KeyUsage, KeyUsages};
//!
//! let engine = DerivationEngine::new();
//! let base_key = engine.import_hkdf_key(b"password", KeyUsages::DERIVE)?;
//! let params = HkdfParams::new("SHA-256", b"salt").with_info(b"context");
//!
//! let bits = engine.derive_bits(&params, &base_key, Some(256))?;
//! assert_eq!(bits.len(), 32);
//!
//! let aes = engine.derive_key(
//!     &params,
//!     &base_key,
//!     &DerivedKeyParams::aes("AES-GCM", 128),
//!     true,
//!     KeyUsages::from([KeyUsage::Encrypt, KeyUsage::Decrypt]),
//! )?;
//! assert_eq!(engine.export_key(KeyFormat::Raw, &aes)?, bits[..16]);
//! # Ok::<(), derivo::CryptoError>(())
//! ```
//!
//! # Errors
//!
//! Every operation returns [`CryptoError`], whose [`ErrorKind`] maps to a
//! `DOMException` name:
//!
//! | kind | raised for |
//! |---|---|
//! | `NotSupported` | unknown digest or algorithm, non-digest hash, non-raw format |
//! | `InvalidAccess` | base key not HKDF, missing usage, export of a non-extractable key |
//! | `Operation` | output length absent, zero, unaligned or too long |
//! | `Syntax` | usages not permitted for the algorithm |
//! | `Data` | malformed key data on import |
//! | `Type` | required parameter member missing |

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod engine;
mod error;
mod params;
mod registry;

pub use derivo_hkdf::HashAlgorithm;
pub use derivo_keys::{AesMode, CryptoKey, DerivedAlgorithm, KeyAlgorithm, KeyFormat, KeyId, KeyType, KeyUsage, KeyUsages, NamedCurve};
pub use engine::DerivationEngine;
pub use error::{CryptoError, ErrorKind};
pub use params::{DerivedKeyParams, HkdfParams, ImportParams};
pub use registry::{RecognizedAlgorithm, normalize_digest};
