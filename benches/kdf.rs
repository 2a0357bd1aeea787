//! benches/kdf.rs
//! PBKDF2-HMAC-SHA256 cost at several iteration counts
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use notecrypt::aliases::PasswordString;
use notecrypt::consts::KEY_LEN;
use notecrypt::derive_secure_pbkdf2_key;
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    // Faster runs for slow high-iter benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let pw = PasswordString::new("benchmark-password".to_string());
    let salt = [0x42u8; 16];

    for &iters in &[1_000u32, 10_000, 100_000] {
        let id = BenchmarkId::new("pbkdf2_sha256_iterations", iters);
        group.bench_with_input(id, &iters, |b, &iters| {
            b.iter(|| {
                let mut key = [0u8; KEY_LEN];
                derive_secure_pbkdf2_key(black_box(&pw), black_box(&salt), iters, &mut key)
                    .unwrap();
                black_box(key);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
