use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha2::Sha256;
use sha3::Sha3_256;
use txmerkle::{merkle_root, MerkleTreeStore};

pub fn generate_random_digests(count: usize) -> Vec<[u8; 32]> {
    (0..count).map(|_| rand::random()).collect()
}

fn bench_merkle_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("Merkle Root");

    for count in [1, 100, 1_000, 1_025, 10_000] {
        let digests = generate_random_digests(count);

        group.bench_with_input(BenchmarkId::new("SHA3-256", count), &digests, |b, digests| {
            b.iter(|| merkle_root::<32, Sha3_256, _>(black_box(digests)))
        });

        group.bench_with_input(BenchmarkId::new("SHA-256", count), &digests, |b, digests| {
            b.iter(|| merkle_root::<32, Sha256, _>(black_box(digests)))
        });
    }

    group.finish();
}

fn bench_tree_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Store");

    // a power of two and the count right after it, which doubles the store
    for count in [1_024, 1_025] {
        let digests = generate_random_digests(count);
        group.bench_with_input(BenchmarkId::new("build", count), &digests, |b, digests| {
            b.iter(|| MerkleTreeStore::<32, Sha3_256>::build(black_box(digests)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merkle_root, bench_tree_store);
criterion_main!(benches);
