// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF conformance fixtures
//!
//! Passwords, salts and infos of every size class, the expected 256-bit
//! derivation for each combination, and the derived key types a base key can
//! produce. Shared by the integration tests and benchmarks.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod derivations;

use core::fmt;

use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Digest names exercised by the sweep, as passed to the engine
pub const HASH_NAMES: [&str; 4] = ["SHA-1", "SHA-256", "SHA-384", "SHA-512"];

/// Output length of every fixture derivation, in bits
pub const DERIVATION_BITS: usize = 256;

const LONG_PASSWORD: [u8; 64] = counting_bytes::<64>(0x00);
const NORMAL_SALT: [u8; 16] = counting_bytes::<16>(0x10);
const NORMAL_INFO: &[u8] = b"hkdf derivation info";

const fn counting_bytes<const N: usize>(start: u8) -> [u8; N] {
    let mut bytes = [0u8; N];
    let mut i = 0;
    while i < N {
        bytes[i] = start.wrapping_add(i as u8);
        i += 1;
    }
    bytes
}

/// Password size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordSize {
    /// `"password"`
    Short,
    /// 64 counting bytes `00..3f`
    Long,
    /// No bytes
    Empty,
}

impl PasswordSize {
    /// Every password size class
    pub const ALL: [PasswordSize; 3] = [PasswordSize::Short, PasswordSize::Long, PasswordSize::Empty];

    /// Password bytes
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            PasswordSize::Short => b"password",
            PasswordSize::Long => &LONG_PASSWORD,
            PasswordSize::Empty => &[],
        }
    }

    const fn name(self) -> &'static str {
        match self {
            PasswordSize::Short => "short",
            PasswordSize::Long => "long",
            PasswordSize::Empty => "empty",
        }
    }
}

/// Salt size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaltSize {
    /// 16 counting bytes `10..1f`
    Normal,
    /// No bytes
    Empty,
}

impl SaltSize {
    /// Every salt size class
    pub const ALL: [SaltSize; 2] = [SaltSize::Normal, SaltSize::Empty];

    /// Salt bytes
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            SaltSize::Normal => &NORMAL_SALT,
            SaltSize::Empty => &[],
        }
    }

    const fn name(self) -> &'static str {
        match self {
            SaltSize::Normal => "normal",
            SaltSize::Empty => "empty",
        }
    }
}

/// Info size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoSize {
    /// `"hkdf derivation info"`
    Normal,
    /// Present but empty
    Empty,
    /// Not supplied at all
    Missing,
}

impl InfoSize {
    /// Every info size class
    pub const ALL: [InfoSize; 3] = [InfoSize::Normal, InfoSize::Empty, InfoSize::Missing];

    /// Info bytes, `None` when the member is absent
    pub const fn bytes(self) -> Option<&'static [u8]> {
        match self {
            InfoSize::Normal => Some(NORMAL_INFO),
            InfoSize::Empty => Some(&[]),
            InfoSize::Missing => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            InfoSize::Normal => "normal",
            InfoSize::Empty => "empty",
            InfoSize::Missing => "missing",
        }
    }
}

/// One `(password, salt, hash, info)` combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Case {
    /// Password size class
    pub password: PasswordSize,
    /// Salt size class
    pub salt: SaltSize,
    /// Digest name
    pub hash: &'static str,
    /// Info size class
    pub info: InfoSize,
}

impl Case {
    /// Expected [`DERIVATION_BITS`]-bit derivation
    ///
    /// Panics if `hash` is not one of [`HASH_NAMES`].
    pub fn expected(&self) -> Vec<u8> {
        let hex = derivations::lookup(self.password, self.salt, self.hash, self.info)
            .unwrap_or_else(|| panic!("no fixture for {self}"));
        hex::decode(hex).unwrap_or_else(|err| panic!("corrupt fixture for {self}: {err}"))
    }

    /// The hash name with its fourth character removed, e.g. `SHA-256` ->
    /// `SHA256`. No digest answers to the result.
    pub fn corrupted_hash(&self) -> String {
        let mut name = String::from(&self.hash[..3]);
        name.push_str(&self.hash[4..]);
        name
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} password, {} salt, {}, with {} info",
            self.password.name(),
            self.salt.name(),
            self.hash,
            self.info.name()
        )
    }
}

/// Every fixture combination
pub fn cross_product() -> impl Iterator<Item = Case> {
    PasswordSize::ALL.into_iter().flat_map(|password| {
        SaltSize::ALL.into_iter().flat_map(move |salt| {
            HASH_NAMES.into_iter().flat_map(move |hash| {
                InfoSize::ALL.into_iter().map(move |info| Case {
                    password,
                    salt,
                    hash,
                    info,
                })
            })
        })
    })
}

/// A key type `deriveKey` can produce from an HKDF base key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedKeyType {
    /// Target algorithm name
    pub name: &'static str,
    /// Key length in bits
    pub length: usize,
    /// Inner digest for HMAC targets
    pub hash: Option<&'static str>,
    /// Usage names requested for the derived key
    pub usages: &'static [&'static str],
}

impl fmt::Display for DerivedKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} length {}", self.name, self.length)?;
        if let Some(hash) = self.hash {
            write!(f, " hash {hash}")?;
        }
        Ok(())
    }
}

const CIPHER_USAGES: &[&str] = &["encrypt", "decrypt"];
const WRAP_USAGES: &[&str] = &["wrapKey", "unwrapKey"];
const MAC_USAGES: &[&str] = &["sign", "verify"];

const fn aes(name: &'static str, length: usize, usages: &'static [&'static str]) -> DerivedKeyType {
    DerivedKeyType {
        name,
        length,
        hash: None,
        usages,
    }
}

const fn hmac(hash: &'static str) -> DerivedKeyType {
    DerivedKeyType {
        name: "HMAC",
        length: 256,
        hash: Some(hash),
        usages: MAC_USAGES,
    }
}

/// Every derived key type of the sweep
pub const DERIVED_KEY_TYPES: [DerivedKeyType; 16] = [
    aes("AES-CBC", 128, CIPHER_USAGES),
    aes("AES-CBC", 192, CIPHER_USAGES),
    aes("AES-CBC", 256, CIPHER_USAGES),
    aes("AES-CTR", 128, CIPHER_USAGES),
    aes("AES-CTR", 192, CIPHER_USAGES),
    aes("AES-CTR", 256, CIPHER_USAGES),
    aes("AES-GCM", 128, CIPHER_USAGES),
    aes("AES-GCM", 192, CIPHER_USAGES),
    aes("AES-GCM", 256, CIPHER_USAGES),
    aes("AES-KW", 128, WRAP_USAGES),
    aes("AES-KW", 192, WRAP_USAGES),
    aes("AES-KW", 256, WRAP_USAGES),
    hmac("SHA-1"),
    hmac("SHA-256"),
    hmac("SHA-384"),
    hmac("SHA-512"),
];

/// Installs a fmt subscriber writing through the test harness.
///
/// Runs once per process. `RUST_LOG` selects targets; the default is
/// `debug` for everything.
pub fn init_tracing() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let targets = std::env::var("RUST_LOG")
            .ok()
            .and_then(|var| var.parse::<Targets>().ok())
            .unwrap_or_else(|| Targets::new().with_default(LevelFilter::DEBUG));

        // Another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .with_thread_ids(true)
            .finish()
            .with(targets)
            .try_init();
    });
}
