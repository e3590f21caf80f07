// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm name normalization

use core::str::FromStr;

use derivo_hkdf::HashAlgorithm;
use derivo_keys::AesMode;

use crate::error::{CryptoError, ErrorKind};

/// Every algorithm name the engine recognizes, registered or not as a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizedAlgorithm {
    /// A digest
    Digest(HashAlgorithm),
    /// `HKDF`
    Hkdf,
    /// `PBKDF2`
    Pbkdf2,
    /// `ECDH`
    Ecdh,
    /// `AES-CBC`, `AES-CTR`, `AES-GCM`, `AES-KW`
    Aes(AesMode),
    /// `HMAC`
    Hmac,
}

impl RecognizedAlgorithm {
    /// Registered algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            RecognizedAlgorithm::Digest(hash) => hash.name(),
            RecognizedAlgorithm::Hkdf => "HKDF",
            RecognizedAlgorithm::Pbkdf2 => "PBKDF2",
            RecognizedAlgorithm::Ecdh => "ECDH",
            RecognizedAlgorithm::Aes(mode) => mode.name(),
            RecognizedAlgorithm::Hmac => "HMAC",
        }
    }
}

impl FromStr for RecognizedAlgorithm {
    type Err = CryptoError;

    /// Names match ASCII case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Ok(hash) = name.parse::<HashAlgorithm>() {
            return Ok(RecognizedAlgorithm::Digest(hash));
        }
        if let Some(mode) = AesMode::ALL.into_iter().find(|mode| mode.name().eq_ignore_ascii_case(name)) {
            return Ok(RecognizedAlgorithm::Aes(mode));
        }

        [
            RecognizedAlgorithm::Hkdf,
            RecognizedAlgorithm::Pbkdf2,
            RecognizedAlgorithm::Ecdh,
            RecognizedAlgorithm::Hmac,
        ]
        .into_iter()
        .find(|alg| alg.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| CryptoError::new(ErrorKind::NotSupported, format!("unrecognized algorithm name {name:?}")))
    }
}

/// Resolves `name` to a digest.
///
/// Unknown names and recognized non-digest names both fail with
/// [`ErrorKind::NotSupported`].
pub fn normalize_digest(name: &str) -> Result<HashAlgorithm, CryptoError> {
    match name.parse::<RecognizedAlgorithm>()? {
        RecognizedAlgorithm::Digest(hash) => Ok(hash),
        other => Err(CryptoError::new(
            ErrorKind::NotSupported,
            format!("{} is not a digest algorithm", other.name()),
        )),
    }
}
