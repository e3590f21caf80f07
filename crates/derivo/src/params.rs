// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Operation parameter dictionaries

/// `HkdfParams`: digest name, salt and optional info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HkdfParams<'a> {
    /// Digest name, resolved case-insensitively
    pub hash: &'a str,
    /// Salt; may be empty
    pub salt: &'a [u8],
    /// Context info; `None` derives like an empty info
    pub info: Option<&'a [u8]>,
}

impl<'a> HkdfParams<'a> {
    /// Parameters without info
    pub fn new(hash: &'a str, salt: &'a [u8]) -> Self {
        Self { hash, salt, info: None }
    }

    /// Sets the info member
    pub fn with_info(mut self, info: &'a [u8]) -> Self {
        self.info = Some(info);
        self
    }
}

/// Algorithm of the key produced by `deriveKey`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedKeyParams<'a> {
    /// Target algorithm name (`AES-CBC`, `AES-CTR`, `AES-GCM`, `AES-KW`, `HMAC`)
    pub name: &'a str,
    /// Key length in bits; required for AES, defaults to the digest block
    /// size for HMAC
    pub length: Option<usize>,
    /// Inner digest name; required for HMAC
    pub hash: Option<&'a str>,
}

impl<'a> DerivedKeyParams<'a> {
    /// AES target of `length` bits
    pub fn aes(name: &'a str, length: usize) -> Self {
        Self {
            name,
            length: Some(length),
            hash: None,
        }
    }

    /// HMAC target over `hash`
    pub fn hmac(hash: &'a str, length: Option<usize>) -> Self {
        Self {
            name: "HMAC",
            length,
            hash: Some(hash),
        }
    }
}

/// Algorithm dictionary for `importKey`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportParams<'a> {
    /// Algorithm name
    pub name: &'a str,
    /// Inner digest name (HMAC)
    pub hash: Option<&'a str>,
    /// Key length in bits (HMAC)
    pub length: Option<usize>,
    /// Curve name (ECDH)
    pub named_curve: Option<&'a str>,
}

impl<'a> ImportParams<'a> {
    /// Dictionary with only the algorithm name set
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            hash: None,
            length: None,
            named_curve: None,
        }
    }

    /// Sets the `hash` member
    pub fn with_hash(mut self, hash: &'a str) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Sets the `length` member
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the `namedCurve` member
    pub fn with_named_curve(mut self, curve: &'a str) -> Self {
        self.named_curve = Some(curve);
        self
    }
}
