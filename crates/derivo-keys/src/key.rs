// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use zeroize::Zeroizing;

use crate::algorithm::KeyAlgorithm;
use crate::error::KeyError;
use crate::usage::KeyUsages;

/// Opaque key handle, unique per key object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub(crate) u64);

impl KeyId {
    /// Raw handle value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

/// Key type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Symmetric secret
    Secret,
    /// Public half of an asymmetric pair
    Public,
}

/// Key serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// Raw bytes
    Raw,
    /// PKCS #8 PrivateKeyInfo
    Pkcs8,
    /// SubjectPublicKeyInfo
    Spki,
    /// JSON Web Key
    Jwk,
}

impl KeyFormat {
    /// Format name as spelled by the WebCrypto `KeyFormat` enum
    pub const fn name(self) -> &'static str {
        match self {
            KeyFormat::Raw => "raw",
            KeyFormat::Pkcs8 => "pkcs8",
            KeyFormat::Spki => "spki",
            KeyFormat::Jwk => "jwk",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyFormat {
    type Err = KeyError;

    /// Enum values are case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [KeyFormat::Raw, KeyFormat::Pkcs8, KeyFormat::Spki, KeyFormat::Jwk]
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| KeyError::UnknownFormat(name.into()))
    }
}

/// A key object.
///
/// Owns its key material exclusively; the material is zeroized on drop and
/// never handed out by reference beyond the scope of
/// [`with_material`](CryptoKey::with_material). There is no `Clone`: every
/// import or derivation yields a new independent object.
pub struct CryptoKey {
    id: KeyId,
    key_type: KeyType,
    algorithm: KeyAlgorithm,
    extractable: bool,
    usages: KeyUsages,
    material: Zeroizing<Vec<u8>>,
}

impl CryptoKey {
    pub(crate) fn new(
        id: KeyId,
        key_type: KeyType,
        algorithm: KeyAlgorithm,
        extractable: bool,
        usages: KeyUsages,
        material: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            id,
            key_type,
            algorithm,
            extractable,
            usages,
            material,
        }
    }

    /// Handle of this key
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Algorithm binding
    pub fn algorithm(&self) -> &KeyAlgorithm {
        &self.algorithm
    }

    /// Whether the raw material may be exported
    pub fn extractable(&self) -> bool {
        self.extractable
    }

    /// Permitted usages
    pub fn usages(&self) -> KeyUsages {
        self.usages
    }

    /// Runs `f` with a borrow of the key material.
    ///
    /// Callers must have completed their access checks beforehand.
    pub fn with_material<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.material)
    }

    /// Exports the key material.
    ///
    /// Returns a copy; mutating it never affects the key.
    ///
    /// # Errors
    /// - [`KeyError::NotExtractable`] if the key is not extractable
    /// - [`KeyError::UnsupportedFormat`] for any format other than `raw`
    pub fn export(&self, format: KeyFormat) -> Result<Vec<u8>, KeyError> {
        if !self.extractable {
            return Err(KeyError::NotExtractable(self.id));
        }
        if format != KeyFormat::Raw {
            return Err(KeyError::UnsupportedFormat(format));
        }

        Ok(self.material.to_vec())
    }
}

impl fmt::Debug for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKey")
            .field("id", &self.id)
            .field("type", &self.key_type)
            .field("algorithm", &self.algorithm)
            .field("extractable", &self.extractable)
            .field("usages", &self.usages)
            .field("material", &"[REDACTED]")
            .finish()
    }
}
