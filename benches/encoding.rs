//! Benchmarks for order encoding.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- signing_bytes
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use matcher_order::{Asset, AssetId, AssetPair, Order, OrderStatus, OrderType, PublicKey, Signable};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

fn make_order(pair: AssetPair) -> Order {
    Order::new(
        OrderType::Buy,
        pair,
        100_000_000,
        300_000_000,
        1_577_836_800_000,
        0,
        OrderStatus::Accepted,
        1_577_923_200_000,
        300_000,
        PublicKey::new([1u8; 32]),
        PublicKey::new([2u8; 32]),
    )
}

/// Generate a batch of orders with varied numeric fields
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let pair = AssetPair::new(Asset::Issued(AssetId::new(rng.gen())), Asset::Native);
            Order::new(
                if rng.gen_bool(0.5) { OrderType::Buy } else { OrderType::Sell },
                pair,
                rng.gen(),
                rng.gen(),
                rng.gen(),
                0,
                OrderStatus::Accepted,
                rng.gen(),
                rng.gen(),
                PublicKey::new(rng.gen()),
                PublicKey::new(rng.gen()),
            )
        })
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_signing_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing_bytes");

    let token = Asset::Issued(AssetId::new([0x5A; 32]));
    let cases = [
        ("native_native", AssetPair::new(Asset::Native, Asset::Native)),
        ("issued_native", AssetPair::new(token, Asset::Native)),
        ("issued_issued", AssetPair::new(token, token)),
    ];

    for (name, pair) in cases {
        let order = make_order(pair);
        group.bench_with_input(BenchmarkId::from_parameter(name), &order, |b, order| {
            b.iter(|| black_box(order.signing_bytes().unwrap()))
        });
    }

    group.finish();
}

fn bench_id(c: &mut Criterion) {
    let order = make_order(AssetPair::default());
    c.bench_function("order_id", |b| b.iter(|| black_box(order.id().unwrap())));
}

fn bench_field_map(c: &mut Criterion) {
    let order = make_order(AssetPair::default());
    c.bench_function("field_map", |b| b.iter(|| black_box(order.to_field_map())));
}

fn bench_batch_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100usize, 1_000, 10_000] {
        let orders = generate_order_batch(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_and_id", size), &orders, |b, orders| {
            b.iter(|| {
                for order in orders {
                    black_box(order.id().unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_signing_bytes,
    bench_id,
    bench_field_map,
    bench_batch_throughput
);
criterion_main!(benches);
