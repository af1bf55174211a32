//! Benchmarks for the packing engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stowpack::{pack, BoxSpec, Container};

fn workload(units_per_spec: usize) -> (Container, Vec<BoxSpec>) {
    let container = Container::new(240.0, 235.0, 239.0);
    let specs = vec![
        BoxSpec::new("pallet", 40.0, 30.0, 25.0).with_quantity(units_per_spec),
        BoxSpec::new("carton", 20.0, 20.0, 20.0).with_quantity(units_per_spec),
        BoxSpec::new("glass", 15.0, 15.0, 10.0)
            .with_fragile(true)
            .with_quantity(units_per_spec),
        BoxSpec::new("tube", 60.0, 10.0, 10.0).with_quantity(units_per_spec),
    ];
    (container, specs)
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for units in [10, 50, 100] {
        let (container, specs) = workload(units);
        group.bench_function(format!("{}_per_spec", units), |b| {
            b.iter(|| pack(black_box(&container), black_box(&specs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
