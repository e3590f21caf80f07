// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key objects for WebCrypto-style derivation
//!
//! A [`CryptoKey`] binds zeroizing raw material to an algorithm, a usage set
//! and an extractability flag. Keys are created only through a [`KeyStore`],
//! which validates imports and issues unique handles.
//!
//! # Example
//!
//! ```rust
//! use derivo_keys::{KeyFormat, KeyStore, KeyUsages};
//!
//! let store = KeyStore::new();
//! let key = store.import_hkdf(b"input keying material", KeyUsages::DERIVE)?;
//!
//! assert!(!key.extractable());
//! assert!(key.export(KeyFormat::Raw).is_err());
//! # Ok::<(), derivo_keys::KeyError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod key;
mod store;
mod usage;

pub use algorithm::{AES_KEY_LENGTHS, AesMode, DerivedAlgorithm, ImportAlgorithm, KeyAlgorithm, NamedCurve};
pub use error::KeyError;
pub use key::{CryptoKey, KeyFormat, KeyId, KeyType};
pub use store::KeyStore;
pub use usage::{KeyUsage, KeyUsages};
