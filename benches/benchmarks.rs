use criterion::{criterion_group, criterion_main, Criterion};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

use bloom64::{BloomFilter, Fnv1aHash, Hash64, XxHash};

fn key() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

fn populate(filter: &mut BloomFilter, n: usize) {
    for _ in 0..n {
        filter.insert(key());
    }
}

fn bench_insert(c: &mut Criterion) {
    for (name, hash) in [
        ("fnv1a", Box::new(Fnv1aHash) as Box<dyn Hash64>),
        ("xxh64", Box::new(XxHash::default()) as Box<dyn Hash64>),
    ] {
        let mut filter = BloomFilter::new(hash, 10_000, 8).unwrap();

        c.bench_function(&format!("insert-10000-{}", name), |b| {
            b.iter(|| {
                filter.insert(key());
            });
        });
    }
}

fn bench_contains(c: &mut Criterion) {
    for (name, hash) in [
        ("fnv1a", Box::new(Fnv1aHash) as Box<dyn Hash64>),
        ("xxh64", Box::new(XxHash::default()) as Box<dyn Hash64>),
    ] {
        let n = 10_000;
        let mut filter = BloomFilter::new(hash, n, 8).unwrap();
        populate(&mut filter, n);

        c.bench_function(&format!("contains-10000-{}", name), |b| {
            b.iter(|| {
                filter.contains(key());
            });
        });
    }
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
