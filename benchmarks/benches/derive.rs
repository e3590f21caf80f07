// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use derivo::{DerivationEngine, DerivedKeyParams, HkdfParams, KeyUsages};
use derivo_vectors::{DERIVATION_BITS, HASH_NAMES, PasswordSize, SaltSize};

fn benchmark_derive_bits(c: &mut Criterion) {
    let engine = DerivationEngine::new();
    let key = engine
        .import_hkdf_key(PasswordSize::Long.bytes(), KeyUsages::DERIVE)
        .expect("import failed");
    let mut group = c.benchmark_group("derive_bits");

    for hash in HASH_NAMES {
        let params = HkdfParams::new(hash, SaltSize::Normal.bytes()).with_info(b"benchmark-context-info");

        group.bench_function(hash, |b| {
            b.iter(|| {
                engine
                    .derive_bits(black_box(&params), &key, black_box(Some(DERIVATION_BITS)))
                    .expect("derive_bits failed")
            });
        });
    }
    group.finish();
}

fn benchmark_derive_key(c: &mut Criterion) {
    let engine = DerivationEngine::new();
    let key = engine
        .import_hkdf_key(PasswordSize::Long.bytes(), KeyUsages::DERIVE)
        .expect("import failed");
    let params = HkdfParams::new("SHA-256", SaltSize::Normal.bytes());
    let mut group = c.benchmark_group("derive_key");

    for (name, target, usages) in [
        ("AES-GCM 256", DerivedKeyParams::aes("AES-GCM", 256), KeyUsages::CIPHER),
        ("HMAC SHA-256", DerivedKeyParams::hmac("SHA-256", None), KeyUsages::MAC),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                engine
                    .derive_key(black_box(&params), &key, black_box(&target), true, usages)
                    .expect("derive_key failed")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_derive_bits, benchmark_derive_key);
criterion_main!(benches);
