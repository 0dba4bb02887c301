//! Allocation cost of the ticket-number registry
//!
//! The dense case sits near the end of a category's 9000-number space,
//! where rejection sampling gives up and the indexed-scan fallback kicks
//! in.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ticketdesk::core::TicketNumberRegistry;

fn bench_allocate_sparse(c: &mut Criterion) {
    c.bench_function("allocate_sparse", |b| {
        b.iter_batched(
            || (TicketNumberRegistry::new(), StdRng::seed_from_u64(7)),
            |(mut registry, mut rng)| registry.allocate("IT", &mut rng).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_allocate_dense(c: &mut Criterion) {
    c.bench_function("allocate_dense", |b| {
        b.iter_batched(
            || {
                let mut registry = TicketNumberRegistry::new();
                let mut rng = StdRng::seed_from_u64(7);
                for _ in 0..8_990 {
                    registry.allocate("IT", &mut rng).unwrap();
                }
                (registry, rng)
            },
            |(mut registry, mut rng)| registry.allocate("IT", &mut rng).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_allocate_sparse, bench_allocate_dense);
criterion_main!(benches);
