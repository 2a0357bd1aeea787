// benches/roundtrip.rs
//! Round-trip (write → read) throughput for each layer combination

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notecrypt::aliases::PasswordString;
use notecrypt::{StreamDecoratorFactory, StreamOptions};
use std::hint::black_box;
use std::io::{Read, Write};

// Low on purpose: this measures the stream layers, not the KDF
const KDF_ITERATIONS: u32 = 1_000;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.note");
    let password = PasswordString::new("benchmark-password".to_string());

    let sizes = [KB, 64 * KB, MB];
    let flags = [("plain", false, false), ("aes", false, true), ("zlib", true, false), ("zlib+aes", true, true)];

    for (label, compress, encrypt) in flags {
        let factory = StreamDecoratorFactory::new(
            StreamOptions::new(compress, encrypt).with_kdf_iterations(KDF_ITERATIONS),
        );

        for &size in &sizes {
            // repeating note text, so compression has something to do
            let input: Vec<u8> = b"meeting notes: ship it on friday\n"
                .iter()
                .copied()
                .cycle()
                .take(size)
                .collect();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(label, format_size(size)),
                &size,
                |b, _| {
                    b.iter(|| {
                        let mut stream = factory.open_write(&path, Some(&password)).unwrap();
                        stream.write_all(black_box(&input)).unwrap();
                        stream.close().unwrap();

                        let mut decrypted = Vec::with_capacity(size);
                        factory
                            .open_read(&path, Some(&password))
                            .unwrap()
                            .read_to_end(&mut decrypted)
                            .unwrap();
                        black_box(decrypted);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
