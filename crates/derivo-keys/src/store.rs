// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key object store: validates imports and issues key handles

use core::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::algorithm::{AES_KEY_LENGTHS, AesMode, DerivedAlgorithm, ImportAlgorithm, KeyAlgorithm, NamedCurve};
use crate::error::KeyError;
use crate::key::{CryptoKey, KeyId, KeyType};
use crate::usage::KeyUsages;

/// Process-wide handle allocator shared by every store
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> KeyId {
    KeyId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Issues key objects.
///
/// The store never retains key material: every created [`CryptoKey`] owns
/// its bytes and zeroizes them when dropped. Handles are unique across all
/// stores for the lifetime of the process.
#[derive(Debug, Default)]
pub struct KeyStore;

impl KeyStore {
    /// Creates a store
    pub fn new() -> Self {
        Self
    }

    /// Imports raw bytes as a non-extractable HKDF base key.
    ///
    /// # Errors
    /// [`KeyError::ForbiddenUsages`] / [`KeyError::EmptyUsages`] unless
    /// `usages` is a non-empty subset of `{deriveKey, deriveBits}`.
    pub fn import_hkdf(&self, raw: &[u8], usages: KeyUsages) -> Result<CryptoKey, KeyError> {
        self.import_raw(raw, &ImportAlgorithm::Hkdf, false, usages)
    }

    /// Imports raw key material bound to `algorithm`.
    ///
    /// The bytes are copied; later mutation of `raw` never affects the key.
    ///
    /// # Errors
    /// - [`KeyError::ForbiddenUsages`] / [`KeyError::EmptyUsages`] for usages
    ///   the algorithm rejects
    /// - [`KeyError::ExtractableNotAllowed`] for extractable HKDF or PBKDF2
    ///   keys
    /// - [`KeyError::InvalidKeyData`] / [`KeyError::LengthMismatch`] for key
    ///   data the algorithm rejects
    /// - [`KeyError::InvalidPublicKey`] for bytes that are not a curve point
    /// - [`KeyError::UnsupportedAlgorithm`] for ECDH without the `ecdh` feature
    #[instrument(
        level = "debug",
        skip_all,
        fields(algorithm = algorithm.name(), len = raw.len(), extractable = extractable, usages = %usages)
    )]
    pub fn import_raw(
        &self,
        raw: &[u8],
        algorithm: &ImportAlgorithm,
        extractable: bool,
        usages: KeyUsages,
    ) -> Result<CryptoKey, KeyError> {
        let result = self.import_checked(raw, algorithm, extractable, usages);
        if let Err(err) = &result {
            debug!(%err, "import rejected");
        }
        result
    }

    fn import_checked(
        &self,
        raw: &[u8],
        algorithm: &ImportAlgorithm,
        extractable: bool,
        usages: KeyUsages,
    ) -> Result<CryptoKey, KeyError> {
        algorithm.validate_usages(usages)?;

        match *algorithm {
            ImportAlgorithm::Hkdf | ImportAlgorithm::Pbkdf2 => {
                if extractable {
                    return Err(KeyError::ExtractableNotAllowed {
                        algorithm: algorithm.name(),
                    });
                }
                let key_algorithm = match algorithm {
                    ImportAlgorithm::Hkdf => KeyAlgorithm::Hkdf,
                    _ => KeyAlgorithm::Pbkdf2,
                };
                Ok(secret_key(key_algorithm, false, usages, Zeroizing::new(raw.to_vec())))
            }
            ImportAlgorithm::Aes(mode) => {
                let length = aes_length(mode, raw.len())?;
                Ok(secret_key(
                    KeyAlgorithm::Aes { mode, length },
                    extractable,
                    usages,
                    Zeroizing::new(raw.to_vec()),
                ))
            }
            ImportAlgorithm::Hmac { hash, length } => {
                let length = hmac_length(raw.len(), length)?;
                Ok(secret_key(
                    KeyAlgorithm::Hmac { hash, length },
                    extractable,
                    usages,
                    Zeroizing::new(raw.to_vec()),
                ))
            }
            ImportAlgorithm::Ecdh { curve } => {
                let point = ecdh_public_point(curve, raw)?;
                // Public keys are always extractable
                Ok(CryptoKey::new(
                    next_id(),
                    KeyType::Public,
                    KeyAlgorithm::Ecdh { curve },
                    true,
                    usages,
                    point,
                ))
            }
        }
    }

    /// Creates an AES or HMAC secret key from freshly derived material.
    ///
    /// # Errors
    /// - [`KeyError::ForbiddenUsages`] / [`KeyError::EmptyUsages`] for usages
    ///   the algorithm rejects
    /// - [`KeyError::InvalidKeyData`] for an AES length other than 128, 192
    ///   or 256 bits, or material of another length
    /// - [`KeyError::LengthMismatch`] if the HMAC length does not fit the
    ///   material
    pub fn create_derived(
        &self,
        algorithm: DerivedAlgorithm,
        extractable: bool,
        usages: KeyUsages,
        material: Zeroizing<Vec<u8>>,
    ) -> Result<CryptoKey, KeyError> {
        algorithm.validate_usages(usages)?;

        match algorithm {
            DerivedAlgorithm::Aes { mode, length } => {
                if !AES_KEY_LENGTHS.contains(&length) || aes_length(mode, material.len())? != length {
                    return Err(KeyError::InvalidKeyData {
                        algorithm: mode.name(),
                        len: material.len(),
                    });
                }
            }
            DerivedAlgorithm::Hmac { length, .. } => {
                hmac_length(material.len(), Some(length))?;
            }
        }

        Ok(secret_key(algorithm.into(), extractable, usages, material))
    }
}

fn secret_key(
    algorithm: KeyAlgorithm,
    extractable: bool,
    usages: KeyUsages,
    material: Zeroizing<Vec<u8>>,
) -> CryptoKey {
    CryptoKey::new(next_id(), KeyType::Secret, algorithm, extractable, usages, material)
}

fn aes_length(mode: AesMode, len: usize) -> Result<usize, KeyError> {
    match len {
        16 | 24 | 32 => Ok(len * 8),
        _ => Err(KeyError::InvalidKeyData {
            algorithm: mode.name(),
            len,
        }),
    }
}

fn hmac_length(len: usize, length: Option<usize>) -> Result<usize, KeyError> {
    if len == 0 {
        return Err(KeyError::InvalidKeyData {
            algorithm: "HMAC",
            len,
        });
    }

    let data_bits = len * 8;
    match length {
        None => Ok(data_bits),
        Some(length) if length == 0 || length > data_bits || length <= data_bits - 8 => {
            Err(KeyError::LengthMismatch { length, data_bits })
        }
        Some(length) => Ok(length),
    }
}

#[cfg(feature = "ecdh")]
fn ecdh_public_point(curve: NamedCurve, raw: &[u8]) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    use p256::elliptic_curve::sec1::ToEncodedPoint;

    match curve {
        NamedCurve::P256 => {
            let key = p256::PublicKey::from_sec1_bytes(raw)
                .map_err(|_| KeyError::InvalidPublicKey(curve.name()))?;
            Ok(Zeroizing::new(key.to_encoded_point(false).as_bytes().to_vec()))
        }
    }
}

#[cfg(not(feature = "ecdh"))]
fn ecdh_public_point(_curve: NamedCurve, _raw: &[u8]) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    Err(KeyError::UnsupportedAlgorithm("ECDH"))
}
