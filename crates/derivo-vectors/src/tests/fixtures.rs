// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;

use crate::{Case, DERIVATION_BITS, DERIVED_KEY_TYPES, InfoSize, PasswordSize, SaltSize, cross_product};

#[test]
fn test_cross_product_size() {
    let cases: HashSet<Case> = cross_product().collect();
    assert_eq!(cases.len(), 3 * 2 * 4 * 3);
}

#[test]
fn test_every_case_has_fixture() {
    for case in cross_product() {
        assert_eq!(case.expected().len(), DERIVATION_BITS / 8, "{case}");
    }
}

#[test]
fn test_missing_info_matches_empty_info() {
    for case in cross_product().filter(|case| case.info == InfoSize::Missing) {
        let empty = Case {
            info: InfoSize::Empty,
            ..case
        };
        assert_eq!(case.expected(), empty.expected(), "{case}");
    }
}

#[test]
fn test_size_classes() {
    assert_eq!(PasswordSize::Short.bytes(), b"password");
    assert_eq!(PasswordSize::Long.bytes().len(), 64);
    assert_eq!(PasswordSize::Long.bytes()[63], 0x3f);
    assert!(PasswordSize::Empty.bytes().is_empty());
    assert_eq!(SaltSize::Normal.bytes()[0], 0x10);
    assert_eq!(SaltSize::Normal.bytes().len(), 16);
    assert_eq!(InfoSize::Missing.bytes(), None);
    assert_eq!(InfoSize::Empty.bytes(), Some(&[][..]));
}

#[test]
fn test_corrupted_hash() {
    let case = Case {
        password: PasswordSize::Short,
        salt: SaltSize::Normal,
        hash: "SHA-256",
        info: InfoSize::Normal,
    };

    assert_eq!(case.corrupted_hash(), "SHA256");
    assert_eq!(case.to_string(), "short password, normal salt, SHA-256, with normal info");
}

#[test]
fn test_derived_key_types_fit_fixture() {
    for key_type in DERIVED_KEY_TYPES {
        assert!(key_type.length <= DERIVATION_BITS, "{key_type}");
        assert_eq!(key_type.hash.is_some(), key_type.name == "HMAC");
    }
}
