use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use symkit_algorithms::{Aes, BlockCipher, Cbc, Ctr, Ecb, Iv};
use symkit_symmetric::{encrypt, Mode, Padding};

fn bench_block_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-128 modes");
    let iv = [0u8; 16];
    let key = [0u8; 16];

    for size in [16usize, 256, 1024, 16384] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for mode in Mode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.to_string(), size), &data, |b, data| {
                b.iter(|| encrypt(mode, data, &key, Some(&iv), Padding::Pkcs7));
            });
        }
    }

    group.finish();
}

fn bench_key_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-CBC raw");
    let iv = Iv::new([0u8; 16]);
    let data = vec![0u8; 4096];
    group.throughput(Throughput::Bytes(data.len() as u64));

    for key_len in [16usize, 24, 32] {
        let key = vec![0u8; key_len];
        group.bench_with_input(BenchmarkId::new("AES", key_len * 8), &data, |b, data| {
            let cbc = Cbc::new(Aes::new(&key).unwrap(), &iv);
            b.iter(|| cbc.encrypt(data));
        });
    }

    group.bench_function("ECB 4096", |b| {
        let ecb = Ecb::new(Aes::new(&[0u8; 16]).unwrap());
        b.iter(|| ecb.encrypt(&data));
    });

    group.bench_function("CTR 4096", |b| {
        b.iter(|| Ctr::new(Aes::new(&[0u8; 16]).unwrap(), &iv).encrypt(&data));
    });

    group.finish();
}

criterion_group!(benches, bench_block_modes, bench_key_sizes);
criterion_main!(benches);
