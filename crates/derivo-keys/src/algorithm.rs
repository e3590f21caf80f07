// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm bindings carried by key objects

use core::fmt;

use derivo_hkdf::HashAlgorithm;

use crate::error::KeyError;
use crate::key::KeyType;
use crate::usage::KeyUsages;

/// Permitted AES key lengths in bits
pub const AES_KEY_LENGTHS: [usize; 3] = [128, 192, 256];

/// AES modes a derived key may be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesMode {
    /// AES-CBC
    Cbc,
    /// AES-CTR
    Ctr,
    /// AES-GCM
    Gcm,
    /// AES-KW
    Kw,
}

impl AesMode {
    /// Every AES mode
    pub const ALL: [AesMode; 4] = [AesMode::Cbc, AesMode::Ctr, AesMode::Gcm, AesMode::Kw];

    /// Registered algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            AesMode::Cbc => "AES-CBC",
            AesMode::Ctr => "AES-CTR",
            AesMode::Gcm => "AES-GCM",
            AesMode::Kw => "AES-KW",
        }
    }

    /// Usages a key of this mode may carry
    pub const fn permitted_usages(self) -> KeyUsages {
        match self {
            AesMode::Kw => KeyUsages::WRAP,
            _ => KeyUsages::CIPHER,
        }
    }
}

/// Named elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// NIST P-256 (secp256r1)
    P256,
}

impl NamedCurve {
    /// Registered curve name
    pub const fn name(self) -> &'static str {
        match self {
            NamedCurve::P256 => "P-256",
        }
    }
}

/// Algorithm a key object is bound to. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// HKDF input keying material
    Hkdf,
    /// PBKDF2 password
    Pbkdf2,
    /// AES secret key
    Aes {
        /// Block cipher mode
        mode: AesMode,
        /// Key length in bits
        length: usize,
    },
    /// HMAC secret key
    Hmac {
        /// Inner digest
        hash: HashAlgorithm,
        /// Key length in bits
        length: usize,
    },
    /// ECDH key on a named curve
    Ecdh {
        /// Curve of the key
        curve: NamedCurve,
    },
}

impl KeyAlgorithm {
    /// Registered algorithm name of the family
    pub const fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Hkdf => "HKDF",
            KeyAlgorithm::Pbkdf2 => "PBKDF2",
            KeyAlgorithm::Aes { mode, .. } => mode.name(),
            KeyAlgorithm::Hmac { .. } => "HMAC",
            KeyAlgorithm::Ecdh { .. } => "ECDH",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Aes { mode, length } => write!(f, "{} ({length} bits)", mode.name()),
            KeyAlgorithm::Hmac { hash, length } => write!(f, "HMAC-{hash} ({length} bits)"),
            KeyAlgorithm::Ecdh { curve } => write!(f, "ECDH {}", curve.name()),
            other => f.write_str(other.name()),
        }
    }
}

/// Normalized algorithm parameters for importing raw key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportAlgorithm {
    /// HKDF base key
    Hkdf,
    /// PBKDF2 password
    Pbkdf2,
    /// AES key; the length is taken from the key data
    Aes(AesMode),
    /// HMAC key with optional explicit length in bits
    Hmac {
        /// Inner digest
        hash: HashAlgorithm,
        /// Length in bits; defaults to the key data length
        length: Option<usize>,
    },
    /// ECDH public key
    Ecdh {
        /// Curve of the key
        curve: NamedCurve,
    },
}

impl ImportAlgorithm {
    /// Registered algorithm name
    pub const fn name(&self) -> &'static str {
        match self {
            ImportAlgorithm::Hkdf => "HKDF",
            ImportAlgorithm::Pbkdf2 => "PBKDF2",
            ImportAlgorithm::Aes(mode) => mode.name(),
            ImportAlgorithm::Hmac { .. } => "HMAC",
            ImportAlgorithm::Ecdh { .. } => "ECDH",
        }
    }

    /// Type of key produced by a raw import
    pub const fn key_type(&self) -> KeyType {
        match self {
            ImportAlgorithm::Ecdh { .. } => KeyType::Public,
            _ => KeyType::Secret,
        }
    }

    /// Usages a key imported with this algorithm may carry
    pub const fn permitted_usages(&self) -> KeyUsages {
        match self {
            ImportAlgorithm::Hkdf | ImportAlgorithm::Pbkdf2 => KeyUsages::DERIVE,
            ImportAlgorithm::Aes(mode) => mode.permitted_usages(),
            ImportAlgorithm::Hmac { .. } => KeyUsages::MAC,
            // Raw ECDH keys are public and public ECDH keys have no usages
            ImportAlgorithm::Ecdh { .. } => KeyUsages::empty(),
        }
    }

    /// Checks `usages` against the algorithm and key type.
    ///
    /// Secret keys need at least one usage; every usage must be permitted.
    pub fn validate_usages(&self, usages: KeyUsages) -> Result<(), KeyError> {
        let forbidden = usages.difference(self.permitted_usages());
        if !forbidden.is_empty() {
            return Err(KeyError::ForbiddenUsages {
                algorithm: self.name(),
                usages: forbidden,
            });
        }

        if usages.is_empty() && self.key_type() == KeyType::Secret {
            return Err(KeyError::EmptyUsages {
                algorithm: self.name(),
            });
        }

        Ok(())
    }
}

/// Algorithm of a key produced by derivation: AES or HMAC only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedAlgorithm {
    /// AES secret key
    Aes {
        /// Block cipher mode
        mode: AesMode,
        /// Key length in bits
        length: usize,
    },
    /// HMAC secret key
    Hmac {
        /// Inner digest
        hash: HashAlgorithm,
        /// Key length in bits
        length: usize,
    },
}

impl DerivedAlgorithm {
    /// Registered algorithm name
    pub const fn name(&self) -> &'static str {
        match self {
            DerivedAlgorithm::Aes { mode, .. } => mode.name(),
            DerivedAlgorithm::Hmac { .. } => "HMAC",
        }
    }

    /// Key length in bits
    pub const fn length(&self) -> usize {
        match *self {
            DerivedAlgorithm::Aes { length, .. } | DerivedAlgorithm::Hmac { length, .. } => length,
        }
    }

    /// Checks `usages` as a raw import of the same algorithm would
    pub fn validate_usages(&self, usages: KeyUsages) -> Result<(), KeyError> {
        let import = match *self {
            DerivedAlgorithm::Aes { mode, .. } => ImportAlgorithm::Aes(mode),
            DerivedAlgorithm::Hmac { hash, length } => ImportAlgorithm::Hmac {
                hash,
                length: Some(length),
            },
        };
        import.validate_usages(usages)
    }
}

impl From<DerivedAlgorithm> for KeyAlgorithm {
    fn from(algorithm: DerivedAlgorithm) -> Self {
        match algorithm {
            DerivedAlgorithm::Aes { mode, length } => KeyAlgorithm::Aes { mode, length },
            DerivedAlgorithm::Hmac { hash, length } => KeyAlgorithm::Hmac { hash, length },
        }
    }
}
