// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key usages and usage sets

use core::fmt;
use core::str::FromStr;

use crate::error::KeyError;

/// A capability flag restricting which operations may consume a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyUsage {
    /// `encrypt`
    Encrypt = 0,
    /// `decrypt`
    Decrypt = 1,
    /// `sign`
    Sign = 2,
    /// `verify`
    Verify = 3,
    /// `deriveKey`
    DeriveKey = 4,
    /// `deriveBits`
    DeriveBits = 5,
    /// `wrapKey`
    WrapKey = 6,
    /// `unwrapKey`
    UnwrapKey = 7,
}

impl KeyUsage {
    /// Every usage, in canonical order
    pub const ALL: [KeyUsage; 8] = [
        KeyUsage::Encrypt,
        KeyUsage::Decrypt,
        KeyUsage::Sign,
        KeyUsage::Verify,
        KeyUsage::DeriveKey,
        KeyUsage::DeriveBits,
        KeyUsage::WrapKey,
        KeyUsage::UnwrapKey,
    ];

    /// Usage name as spelled by the WebCrypto `KeyUsage` enum
    pub const fn name(self) -> &'static str {
        match self {
            KeyUsage::Encrypt => "encrypt",
            KeyUsage::Decrypt => "decrypt",
            KeyUsage::Sign => "sign",
            KeyUsage::Verify => "verify",
            KeyUsage::DeriveKey => "deriveKey",
            KeyUsage::DeriveBits => "deriveBits",
            KeyUsage::WrapKey => "wrapKey",
            KeyUsage::UnwrapKey => "unwrapKey",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyUsage {
    type Err = KeyError;

    /// Enum values are case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        KeyUsage::ALL
            .into_iter()
            .find(|usage| usage.name() == name)
            .ok_or_else(|| KeyError::UnknownUsage(name.into()))
    }
}

/// Finite set of [`KeyUsage`] values
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyUsages(u8);

impl KeyUsages {
    /// `{deriveKey, deriveBits}`
    pub const DERIVE: KeyUsages = KeyUsages::empty()
        .with(KeyUsage::DeriveKey)
        .with(KeyUsage::DeriveBits);

    /// `{encrypt, decrypt, wrapKey, unwrapKey}`
    pub const CIPHER: KeyUsages = KeyUsages::empty()
        .with(KeyUsage::Encrypt)
        .with(KeyUsage::Decrypt)
        .with(KeyUsage::WrapKey)
        .with(KeyUsage::UnwrapKey);

    /// `{wrapKey, unwrapKey}`
    pub const WRAP: KeyUsages = KeyUsages::empty()
        .with(KeyUsage::WrapKey)
        .with(KeyUsage::UnwrapKey);

    /// `{sign, verify}`
    pub const MAC: KeyUsages = KeyUsages::empty()
        .with(KeyUsage::Sign)
        .with(KeyUsage::Verify);

    /// The empty set
    pub const fn empty() -> Self {
        KeyUsages(0)
    }

    /// Returns a copy of the set with `usage` added
    pub const fn with(self, usage: KeyUsage) -> Self {
        KeyUsages(self.0 | usage.bit())
    }

    /// Adds `usage` to the set
    pub fn insert(&mut self, usage: KeyUsage) {
        self.0 |= usage.bit();
    }

    /// Whether `usage` is in the set
    pub const fn contains(self, usage: KeyUsage) -> bool {
        self.0 & usage.bit() != 0
    }

    /// Whether every usage of `self` is also in `other`
    pub const fn is_subset_of(self, other: KeyUsages) -> bool {
        self.0 & !other.0 == 0
    }

    /// Usages in `self` that are not in `other`
    pub const fn difference(self, other: KeyUsages) -> KeyUsages {
        KeyUsages(self.0 & !other.0)
    }

    /// Whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of usages in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the set in canonical order
    pub fn iter(self) -> impl Iterator<Item = KeyUsage> {
        KeyUsage::ALL.into_iter().filter(move |usage| self.contains(*usage))
    }
}

impl FromIterator<KeyUsage> for KeyUsages {
    fn from_iter<I: IntoIterator<Item = KeyUsage>>(iter: I) -> Self {
        iter.into_iter().fold(KeyUsages::empty(), KeyUsages::with)
    }
}

impl<const N: usize> From<[KeyUsage; N]> for KeyUsages {
    fn from(usages: [KeyUsage; N]) -> Self {
        usages.into_iter().collect()
    }
}

impl fmt::Debug for KeyUsages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(KeyUsage::name)).finish()
    }
}

impl fmt::Display for KeyUsages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, usage) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(usage.name())?;
        }
        f.write_str("]")
    }
}
