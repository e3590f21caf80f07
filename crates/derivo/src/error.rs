// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use derivo_hkdf::{DigestError, HkdfError};
use derivo_keys::KeyError;
use thiserror::Error;

/// Failure category, one per WebCrypto `DOMException` name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown or inapplicable algorithm, digest, curve or key format
    NotSupported,
    /// Key unusable for the operation: wrong algorithm, missing usage, not
    /// extractable
    InvalidAccess,
    /// Operation-specific precondition failed (output length)
    Operation,
    /// Usages not permitted for the algorithm
    Syntax,
    /// Malformed key data
    Data,
    /// Required parameter member missing
    Type,
}

impl ErrorKind {
    /// `DOMException` name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::NotSupported => "NotSupportedError",
            ErrorKind::InvalidAccess => "InvalidAccessError",
            ErrorKind::Operation => "OperationError",
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Data => "DataError",
            ErrorKind::Type => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by every engine operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct CryptoError {
    kind: ErrorKind,
    message: String,
}

impl CryptoError {
    /// Creates an error of `kind`
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure category
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// `DOMException` name, e.g. `"OperationError"`
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Human-readable detail
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DigestError> for CryptoError {
    fn from(err: DigestError) -> Self {
        CryptoError::new(ErrorKind::NotSupported, err.to_string())
    }
}

impl From<HkdfError> for CryptoError {
    fn from(err: HkdfError) -> Self {
        CryptoError::new(ErrorKind::Operation, err.to_string())
    }
}

impl From<KeyError> for CryptoError {
    fn from(err: KeyError) -> Self {
        let kind = match &err {
            KeyError::UnsupportedFormat(_) | KeyError::UnsupportedAlgorithm(_) => ErrorKind::NotSupported,
            KeyError::NotExtractable(_) => ErrorKind::InvalidAccess,
            KeyError::UnknownFormat(_) | KeyError::UnknownUsage(_) => ErrorKind::Type,
            KeyError::ForbiddenUsages { .. }
            | KeyError::EmptyUsages { .. }
            | KeyError::ExtractableNotAllowed { .. } => ErrorKind::Syntax,
            KeyError::InvalidKeyData { .. } | KeyError::LengthMismatch { .. } | KeyError::InvalidPublicKey(_) => {
                ErrorKind::Data
            }
        };
        CryptoError::new(kind, err.to_string())
    }
}
