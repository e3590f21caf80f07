// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use derivo_hkdf::HashAlgorithm;
use derivo_keys::{AesMode, CryptoKey, KeyAlgorithm, KeyFormat, KeyType, KeyUsage, KeyUsages};

use crate::engine::DerivationEngine;
use crate::error::ErrorKind;
use crate::params::{DerivedKeyParams, HkdfParams, ImportParams};

const ZERO_SCENARIO: &str = "91e4e0640eb3242eb4ab90de0ba63abbebbf31fe6b97ff01ebdaaadf0d9d8012";

fn base_key(engine: &DerivationEngine, usages: KeyUsages) -> CryptoKey {
    engine.import_hkdf_key(b"password", usages).expect("Failed to import_hkdf_key(..)")
}

fn pbkdf2_key(engine: &DerivationEngine) -> CryptoKey {
    engine
        .import_key(KeyFormat::Raw, b"password", &ImportParams::new("PBKDF2"), false, KeyUsages::DERIVE)
        .expect("Failed to import_key(..)")
}

fn cipher_usages() -> KeyUsages {
    KeyUsages::from([KeyUsage::Encrypt, KeyUsage::Decrypt])
}

#[test]
fn test_engine_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<DerivationEngine>();
    assert_send_sync::<CryptoKey>();
}

#[test]
fn test_derive_bits_zero_scenario() {
    let engine = DerivationEngine::new();
    let key = engine.import_hkdf_key(&[0u8; 16], KeyUsages::DERIVE).expect("Failed to import_hkdf_key(..)");
    let params = HkdfParams::new("SHA-256", &[0u8; 16]);

    let bits = engine.derive_bits(&params, &key, Some(256)).expect("Failed to derive_bits(..)");

    assert_eq!(hex::encode(bits), ZERO_SCENARIO);
}

#[test]
fn test_derive_bits_idempotent() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-512", b"salt").with_info(b"info");

    let first = engine.derive_bits(&params, &key, Some(512)).expect("Failed to derive_bits(..)");
    let second = engine.derive_bits(&params, &key, Some(512)).expect("Failed to derive_bits(..)");

    assert_eq!(first, second);
    assert_eq!(first.len(), 64);
}

#[test]
fn test_derive_bits_missing_info_equals_empty() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);

    let missing = engine
        .derive_bits(&HkdfParams::new("SHA-1", b"salt"), &key, Some(256))
        .expect("Failed to derive_bits(..)");
    let empty = engine
        .derive_bits(&HkdfParams::new("SHA-1", b"salt").with_info(&[]), &key, Some(256))
        .expect("Failed to derive_bits(..)");

    assert_eq!(missing, empty);
}

#[test]
fn test_derive_bits_case_insensitive_hash() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);

    let upper = engine
        .derive_bits(&HkdfParams::new("SHA-384", b""), &key, Some(128))
        .expect("Failed to derive_bits(..)");
    let lower = engine
        .derive_bits(&HkdfParams::new("sha-384", b""), &key, Some(128))
        .expect("Failed to derive_bits(..)");

    assert_eq!(upper, lower);
}

#[test]
fn test_derive_bits_invalid_lengths() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");

    for length in [None, Some(0), Some(44), Some(255 * 32 * 8 + 8)] {
        let err = engine.derive_bits(&params, &key, length).expect_err("Expected derive_bits(..) to fail");
        assert_eq!(err.kind(), ErrorKind::Operation, "{length:?}");
    }

    assert!(engine.derive_bits(&params, &key, Some(255 * 32 * 8)).is_ok());
}

#[test]
fn test_derive_bits_max_length_per_hash() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);

    for hash in HashAlgorithm::ALL {
        let params = HkdfParams::new(hash.name(), b"salt");
        let max_bits = hash.max_okm_len() * 8;

        let bits = engine.derive_bits(&params, &key, Some(max_bits)).expect("Failed to derive_bits(..)");
        assert_eq!(bits.len(), hash.max_okm_len());

        let err = engine
            .derive_bits(&params, &key, Some(max_bits + 8))
            .expect_err("Expected derive_bits(..) to fail");
        assert_eq!(err.kind(), ErrorKind::Operation);
    }
}

#[test]
fn test_derive_bits_validation_order() {
    let engine = DerivationEngine::new();
    let no_bits = base_key(&engine, KeyUsages::from([KeyUsage::DeriveKey]));
    let wrong = pbkdf2_key(&engine);

    // Bad hash wins over a bad key and a bad length
    let err = engine
        .derive_bits(&HkdfParams::new("SHA256", b""), &wrong, None)
        .expect_err("Expected derive_bits(..) to fail");
    assert_eq!(err.kind(), ErrorKind::NotSupported);

    // Wrong algorithm wins over a bad length
    let err = engine
        .derive_bits(&HkdfParams::new("SHA-256", b""), &wrong, None)
        .expect_err("Expected derive_bits(..) to fail");
    assert_eq!(err.kind(), ErrorKind::InvalidAccess);

    // Missing usage wins over a bad length
    let err = engine
        .derive_bits(&HkdfParams::new("SHA-256", b""), &no_bits, Some(0))
        .expect_err("Expected derive_bits(..) to fail");
    assert_eq!(err.kind(), ErrorKind::InvalidAccess);
}

#[test]
fn test_derive_bits_non_digest_hash() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);

    let err = engine
        .derive_bits(&HkdfParams::new("PBKDF2", b"salt"), &key, Some(256))
        .expect_err("Expected derive_bits(..) to fail");

    assert_eq!(err.kind(), ErrorKind::NotSupported);
}

#[test]
fn test_derive_key_aes_matches_derive_bits() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt").with_info(b"info");
    let bits = engine.derive_bits(&params, &key, Some(256)).expect("Failed to derive_bits(..)");

    for mode in AesMode::ALL {
        for length in [128, 192, 256] {
            let usages = mode.permitted_usages();
            let derived = engine
                .derive_key(&params, &key, &DerivedKeyParams::aes(mode.name(), length), true, usages)
                .expect("Failed to derive_key(..)");

            assert_eq!(*derived.algorithm(), KeyAlgorithm::Aes { mode, length });
            assert_eq!(derived.key_type(), KeyType::Secret);
            assert_eq!(derived.usages(), usages);
            assert_eq!(
                engine.export_key(KeyFormat::Raw, &derived).expect("Failed to export_key(..)"),
                bits[..length / 8]
            );
        }
    }
}

#[test]
fn test_derive_key_hmac_default_length() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");

    for hash in HashAlgorithm::ALL {
        let derived = engine
            .derive_key(&params, &key, &DerivedKeyParams::hmac(hash.name(), None), true, KeyUsages::MAC)
            .expect("Failed to derive_key(..)");

        let length = hash.block_len() * 8;
        assert_eq!(*derived.algorithm(), KeyAlgorithm::Hmac { hash, length });

        let bits = engine.derive_bits(&params, &key, Some(length)).expect("Failed to derive_bits(..)");
        assert_eq!(engine.export_key(KeyFormat::Raw, &derived).expect("Failed to export_key(..)"), bits);
    }
}

#[test]
fn test_derive_key_non_extractable() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let derived = engine
        .derive_key(
            &HkdfParams::new("SHA-256", b"salt"),
            &key,
            &DerivedKeyParams::aes("AES-CBC", 128),
            false,
            cipher_usages(),
        )
        .expect("Failed to derive_key(..)");

    let err = engine
        .export_key(KeyFormat::Raw, &derived)
        .expect_err("Expected export_key(..) to fail");
    assert_eq!(err.kind(), ErrorKind::InvalidAccess);
}

#[test]
fn test_derive_key_unique_ids() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");
    let target = DerivedKeyParams::aes("AES-GCM", 256);

    let a = engine.derive_key(&params, &key, &target, true, cipher_usages()).expect("Failed to derive_key(..)");
    let b = engine.derive_key(&params, &key, &target, true, cipher_usages()).expect("Failed to derive_key(..)");

    assert_ne!(a.id(), b.id());
    assert_ne!(a.id(), key.id());
}

#[test]
fn test_key_ids_unique_across_engines() {
    let first = DerivationEngine::new();
    let second = DerivationEngine::new();
    let params = HkdfParams::new("SHA-256", b"salt");

    let a = base_key(&first, KeyUsages::DERIVE);
    let b = base_key(&second, KeyUsages::DERIVE);
    assert_ne!(a.id(), b.id());

    let derived_a = first
        .derive_key(&params, &a, &DerivedKeyParams::aes("AES-GCM", 128), true, cipher_usages())
        .expect("Failed to derive_key(..)");
    let derived_b = second
        .derive_key(&params, &b, &DerivedKeyParams::aes("AES-GCM", 128), true, cipher_usages())
        .expect("Failed to derive_key(..)");
    assert_ne!(derived_a.id(), derived_b.id());

    // Keys are not bound to the engine that issued them
    assert_eq!(
        first.derive_bits(&params, &b, Some(256)).expect("Failed to derive_bits(..)"),
        second.derive_bits(&params, &b, Some(256)).expect("Failed to derive_bits(..)")
    );
}

#[test]
fn test_derive_key_invalid_targets() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");

    let cases = [
        (DerivedKeyParams::aes("AES-CFB", 128), ErrorKind::NotSupported),
        (DerivedKeyParams::aes("HKDF", 128), ErrorKind::NotSupported),
        (DerivedKeyParams::aes("PBKDF2", 128), ErrorKind::NotSupported),
        (DerivedKeyParams::aes("SHA-256", 128), ErrorKind::NotSupported),
        (DerivedKeyParams::aes("AES-GCM", 64), ErrorKind::Operation),
        (DerivedKeyParams::aes("AES-GCM", 512), ErrorKind::Operation),
        (
            DerivedKeyParams {
                name: "AES-CTR",
                length: None,
                hash: None,
            },
            ErrorKind::Type,
        ),
        (
            DerivedKeyParams {
                name: "HMAC",
                length: Some(256),
                hash: None,
            },
            ErrorKind::Type,
        ),
        (DerivedKeyParams::hmac("SHA-3", None), ErrorKind::NotSupported),
        (DerivedKeyParams::hmac("SHA-256", Some(0)), ErrorKind::Operation),
        (DerivedKeyParams::hmac("SHA-256", Some(100)), ErrorKind::Operation),
    ];

    for (target, kind) in cases {
        let err = engine
            .derive_key(&params, &key, &target, true, KeyUsages::MAC)
            .expect_err("Expected derive_key(..) to fail");
        assert_eq!(err.kind(), kind, "{target:?}");
    }
}

#[test]
fn test_derive_key_rejects_target_usages() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");

    let cases = [
        (DerivedKeyParams::aes("AES-KW", 128), cipher_usages()),
        (DerivedKeyParams::aes("AES-CBC", 128), KeyUsages::MAC),
        (DerivedKeyParams::aes("AES-CBC", 128), KeyUsages::empty()),
        (DerivedKeyParams::hmac("SHA-1", None), cipher_usages()),
        (DerivedKeyParams::hmac("SHA-1", None), KeyUsages::DERIVE),
    ];

    for (target, usages) in cases {
        let err = engine
            .derive_key(&params, &key, &target, true, usages)
            .expect_err("Expected derive_key(..) to fail");
        assert_eq!(err.kind(), ErrorKind::Syntax, "{target:?} {usages}");
    }
}

#[test]
fn test_derive_key_validation_order() {
    let engine = DerivationEngine::new();
    let no_key = base_key(&engine, KeyUsages::from([KeyUsage::DeriveBits]));
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");

    // Unknown target is detected with the hash, before the key checks
    let err = engine
        .derive_key(&params, &no_key, &DerivedKeyParams::aes("AES-XTS", 128), true, cipher_usages())
        .expect_err("Expected derive_key(..) to fail");
    assert_eq!(err.kind(), ErrorKind::NotSupported);

    // Missing usage wins over a bad length
    let err = engine
        .derive_key(&params, &no_key, &DerivedKeyParams::aes("AES-CBC", 100), true, cipher_usages())
        .expect_err("Expected derive_key(..) to fail");
    assert_eq!(err.kind(), ErrorKind::InvalidAccess);

    // Bad length wins over bad usages
    let err = engine
        .derive_key(&params, &key, &DerivedKeyParams::aes("AES-CBC", 100), true, KeyUsages::MAC)
        .expect_err("Expected derive_key(..) to fail");
    assert_eq!(err.kind(), ErrorKind::Operation);
}

#[test]
fn test_derive_key_wrong_base_key() {
    let engine = DerivationEngine::new();
    let wrong = pbkdf2_key(&engine);

    let err = engine
        .derive_key(
            &HkdfParams::new("SHA-256", b"salt"),
            &wrong,
            &DerivedKeyParams::aes("AES-CBC", 128),
            true,
            cipher_usages(),
        )
        .expect_err("Expected derive_key(..) to fail");

    assert_eq!(err.kind(), ErrorKind::InvalidAccess);
}

#[test]
fn test_derived_key_cannot_be_base_key() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);
    let params = HkdfParams::new("SHA-256", b"salt");
    let derived = engine
        .derive_key(&params, &key, &DerivedKeyParams::hmac("SHA-256", None), true, KeyUsages::MAC)
        .expect("Failed to derive_key(..)");

    let err = engine
        .derive_bits(&params, &derived, Some(256))
        .expect_err("Expected derive_bits(..) to fail");
    assert_eq!(err.kind(), ErrorKind::InvalidAccess);
}

#[test]
fn test_export_base_key_rejected() {
    let engine = DerivationEngine::new();
    let key = base_key(&engine, KeyUsages::DERIVE);

    for format in [KeyFormat::Raw, KeyFormat::Jwk] {
        let err = engine.export_key(format, &key).expect_err("Expected export_key(..) to fail");
        assert_eq!(err.kind(), ErrorKind::InvalidAccess);
    }
}
