// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Derivation façade: importKey, deriveBits, deriveKey, exportKey

use derivo_hkdf::{HashAlgorithm, output_len_from_bits};
use derivo_keys::{
    AES_KEY_LENGTHS, AesMode, CryptoKey, DerivedAlgorithm, ImportAlgorithm, KeyAlgorithm, KeyFormat, KeyStore, KeyUsage,
    KeyUsages, NamedCurve,
};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::error::{CryptoError, ErrorKind};
use crate::params::{DerivedKeyParams, HkdfParams, ImportParams};
use crate::registry::{RecognizedAlgorithm, normalize_digest};

/// Key type `deriveKey` produces, with its parameters resolved
#[derive(Debug, Clone, Copy)]
enum DerivedTarget {
    Aes { mode: AesMode, length: Option<usize> },
    Hmac { hash: HashAlgorithm, length: Option<usize> },
}

impl DerivedTarget {
    fn normalize(params: &DerivedKeyParams<'_>) -> Result<Self, CryptoError> {
        match params.name.parse::<RecognizedAlgorithm>()? {
            RecognizedAlgorithm::Aes(mode) => Ok(DerivedTarget::Aes {
                mode,
                length: params.length,
            }),
            RecognizedAlgorithm::Hmac => {
                let hash = params
                    .hash
                    .ok_or_else(|| CryptoError::new(ErrorKind::Type, "HMAC parameters require a hash"))?;
                Ok(DerivedTarget::Hmac {
                    hash: normalize_digest(hash)?,
                    length: params.length,
                })
            }
            other => Err(CryptoError::new(
                ErrorKind::NotSupported,
                format!("{} keys cannot be derived", other.name()),
            )),
        }
    }

    /// WebCrypto "get key length", in bits
    fn key_length(&self) -> Result<usize, CryptoError> {
        match *self {
            DerivedTarget::Aes { mode, length } => {
                let length =
                    length.ok_or_else(|| CryptoError::new(ErrorKind::Type, format!("{} requires a length", mode.name())))?;
                if !AES_KEY_LENGTHS.contains(&length) {
                    return Err(CryptoError::new(
                        ErrorKind::Operation,
                        format!("{} keys must be 128, 192 or 256 bits, not {length}", mode.name()),
                    ));
                }
                Ok(length)
            }
            DerivedTarget::Hmac { hash, length } => match length {
                None => Ok(hash.block_len() * 8),
                Some(0) => Err(CryptoError::new(ErrorKind::Operation, "HMAC key length must be non-zero")),
                Some(length) => Ok(length),
            },
        }
    }

    fn derived_algorithm(&self, length: usize) -> DerivedAlgorithm {
        match *self {
            DerivedTarget::Aes { mode, .. } => DerivedAlgorithm::Aes { mode, length },
            DerivedTarget::Hmac { hash, .. } => DerivedAlgorithm::Hmac { hash, length },
        }
    }
}

/// HKDF derivation engine.
///
/// Validates every request before touching key material; failures carry an
/// [`ErrorKind`] matching the WebCrypto exception a browser would raise.
/// The engine is `Send + Sync` and may be shared across threads.
#[derive(Debug, Default)]
pub struct DerivationEngine {
    store: KeyStore,
}

impl DerivationEngine {
    /// Creates an engine with an empty key store
    pub fn new() -> Self {
        Self::default()
    }

    /// `importKey`: imports raw key material.
    ///
    /// # Errors
    /// - [`ErrorKind::NotSupported`] for unknown algorithms, digests or
    ///   curves, and for formats other than [`KeyFormat::Raw`]
    /// - [`ErrorKind::Type`] if HMAC `hash` or ECDH `namedCurve` is missing
    /// - [`ErrorKind::Syntax`] for usages the algorithm does not permit, and
    ///   for extractable HKDF/PBKDF2 keys
    /// - [`ErrorKind::Data`] for malformed key data
    #[instrument(
        level = "debug",
        skip_all,
        fields(format = %format, algorithm = algorithm.name, extractable = extractable, usages = %usages)
    )]
    pub fn import_key(
        &self,
        format: KeyFormat,
        key_data: &[u8],
        algorithm: &ImportParams<'_>,
        extractable: bool,
        usages: KeyUsages,
    ) -> Result<CryptoKey, CryptoError> {
        let result = normalize_import(algorithm).and_then(|normalized| {
            if format != KeyFormat::Raw {
                return Err(CryptoError::new(
                    ErrorKind::NotSupported,
                    format!("{} keys cannot be imported from {format}", normalized.name()),
                ));
            }
            Ok(self.store.import_raw(key_data, &normalized, extractable, usages)?)
        });

        rejected(result)
    }

    /// `importKey("raw", bytes, "HKDF", false, usages)`
    ///
    /// Accepts any byte sequence, including an empty one.
    ///
    /// # Errors
    /// [`ErrorKind::Syntax`] unless `usages` is a non-empty subset of
    /// `{deriveKey, deriveBits}`.
    #[instrument(level = "debug", skip_all, fields(usages = %usages))]
    pub fn import_hkdf_key(&self, key_data: &[u8], usages: KeyUsages) -> Result<CryptoKey, CryptoError> {
        rejected(self.store.import_hkdf(key_data, usages).map_err(CryptoError::from))
    }

    /// `deriveBits`: derives `length_bits` bits from an HKDF base key.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. `params.hash` names a digest, else [`ErrorKind::NotSupported`]
    /// 2. `base_key` is an HKDF key, else [`ErrorKind::InvalidAccess`]
    /// 3. `base_key` carries `deriveBits`, else [`ErrorKind::InvalidAccess`]
    /// 4. `length_bits` is present, non-zero, a multiple of 8 and at most
    ///    255 * HashLen bytes, else [`ErrorKind::Operation`]
    #[instrument(
        level = "debug",
        skip_all,
        fields(hash = params.hash, key = %base_key.id(), length = ?length_bits)
    )]
    pub fn derive_bits(
        &self,
        params: &HkdfParams<'_>,
        base_key: &CryptoKey,
        length_bits: Option<usize>,
    ) -> Result<Vec<u8>, CryptoError> {
        let result = normalize_digest(params.hash).and_then(|hash| {
            check_base_key(base_key, KeyUsage::DeriveBits)?;
            let okm = base_key.with_material(|ikm| {
                derivo_hkdf::derive_bits(hash, ikm, params.salt, params.info.unwrap_or_default(), length_bits)
            })?;
            Ok(okm)
        });

        rejected(result)
    }

    /// `deriveKey`: derives a new key of `derived.length` bits.
    ///
    /// Same checks as [`derive_bits`](Self::derive_bits) with the
    /// `deriveKey` usage. The derived key type is resolved in step 1 and its
    /// length in step 4; the requested `usages` are checked last, still
    /// before any derivation.
    ///
    /// # Errors
    /// As for `derive_bits`, plus:
    /// - [`ErrorKind::NotSupported`] for targets that are not AES or HMAC
    /// - [`ErrorKind::Type`] for a missing AES length or HMAC hash
    /// - [`ErrorKind::Operation`] for an invalid AES length or a zero HMAC
    ///   length
    /// - [`ErrorKind::Syntax`] for usages the target does not permit
    #[instrument(
        level = "debug",
        skip_all,
        fields(hash = params.hash, key = %base_key.id(), target = derived.name, extractable = extractable, usages = %usages)
    )]
    pub fn derive_key(
        &self,
        params: &HkdfParams<'_>,
        base_key: &CryptoKey,
        derived: &DerivedKeyParams<'_>,
        extractable: bool,
        usages: KeyUsages,
    ) -> Result<CryptoKey, CryptoError> {
        rejected(self.derive_key_checked(params, base_key, derived, extractable, usages))
    }

    fn derive_key_checked(
        &self,
        params: &HkdfParams<'_>,
        base_key: &CryptoKey,
        derived: &DerivedKeyParams<'_>,
        extractable: bool,
        usages: KeyUsages,
    ) -> Result<CryptoKey, CryptoError> {
        let hash = normalize_digest(params.hash)?;
        let target = DerivedTarget::normalize(derived)?;

        check_base_key(base_key, KeyUsage::DeriveKey)?;

        let length = target.key_length()?;
        let len = output_len_from_bits(hash, Some(length))?;

        let algorithm = target.derived_algorithm(length);
        algorithm.validate_usages(usages)?;

        let mut okm = Zeroizing::new(vec![0u8; len]);
        base_key.with_material(|ikm| {
            derivo_hkdf::hkdf(hash, params.salt, ikm, params.info.unwrap_or_default(), &mut okm)
        })?;

        Ok(self.store.create_derived(algorithm, extractable, usages, okm)?)
    }

    /// `exportKey`: returns a copy of the raw key material.
    ///
    /// # Errors
    /// - [`ErrorKind::InvalidAccess`] if the key is not extractable
    /// - [`ErrorKind::NotSupported`] for formats other than [`KeyFormat::Raw`]
    #[instrument(level = "debug", skip_all, fields(format = %format, key = %key.id()))]
    pub fn export_key(&self, format: KeyFormat, key: &CryptoKey) -> Result<Vec<u8>, CryptoError> {
        rejected(key.export(format).map_err(CryptoError::from))
    }
}

fn normalize_import(params: &ImportParams<'_>) -> Result<ImportAlgorithm, CryptoError> {
    match params.name.parse::<RecognizedAlgorithm>()? {
        RecognizedAlgorithm::Hkdf => Ok(ImportAlgorithm::Hkdf),
        RecognizedAlgorithm::Pbkdf2 => Ok(ImportAlgorithm::Pbkdf2),
        RecognizedAlgorithm::Aes(mode) => Ok(ImportAlgorithm::Aes(mode)),
        RecognizedAlgorithm::Hmac => {
            let hash = params
                .hash
                .ok_or_else(|| CryptoError::new(ErrorKind::Type, "HMAC parameters require a hash"))?;
            Ok(ImportAlgorithm::Hmac {
                hash: normalize_digest(hash)?,
                length: params.length,
            })
        }
        RecognizedAlgorithm::Ecdh => {
            let curve = params
                .named_curve
                .ok_or_else(|| CryptoError::new(ErrorKind::Type, "ECDH parameters require a namedCurve"))?;
            if curve != NamedCurve::P256.name() {
                return Err(CryptoError::new(
                    ErrorKind::NotSupported,
                    format!("unsupported named curve {curve:?}"),
                ));
            }
            Ok(ImportAlgorithm::Ecdh {
                curve: NamedCurve::P256,
            })
        }
        RecognizedAlgorithm::Digest(hash) => Err(CryptoError::new(
            ErrorKind::NotSupported,
            format!("{hash} does not support importKey"),
        )),
    }
}

fn check_base_key(key: &CryptoKey, usage: KeyUsage) -> Result<(), CryptoError> {
    if *key.algorithm() != KeyAlgorithm::Hkdf {
        return Err(CryptoError::new(
            ErrorKind::InvalidAccess,
            format!("{} is a {} key, not an HKDF key", key.id(), key.algorithm().name()),
        ));
    }
    if !key.usages().contains(usage) {
        return Err(CryptoError::new(
            ErrorKind::InvalidAccess,
            format!("{} lacks the {usage} usage", key.id()),
        ));
    }
    Ok(())
}

fn rejected<T>(result: Result<T, CryptoError>) -> Result<T, CryptoError> {
    if let Err(err) = &result {
        debug!(kind = err.name(), message = err.message(), "rejected");
    }
    result
}
