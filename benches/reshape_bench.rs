//! Benchmarks for lattice enumeration and mesh reshaping.
//!
//! Run with: `cargo bench --bench reshape_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cvm_grid::{AxisSpec, GridEnumerator, GridShape, MeshRecord, reshape, write_grid_points};

/// Cubic-ish lattice over the CVM-H region with `n` horizontal steps.
fn region_shape(n: usize) -> GridShape {
    GridShape::new(
        AxisSpec::new(-120.862, -113.333, n).unwrap(),
        AxisSpec::new(30.956, 36.613, n).unwrap(),
        AxisSpec::new(4000.0, -15000.0, n / 2).unwrap(),
    )
    .unwrap()
}

/// Records with every tenth point undefined.
fn synthetic_records(shape: &GridShape) -> Vec<MeshRecord> {
    GridEnumerator::new(shape)
        .enumerate()
        .map(|(i, p)| {
            let (vp, vs) = if i % 10 == 0 { (0.0, 0.0) } else { (6000.0, 3464.0) };
            MeshRecord::new(p.lon, p.lat, p.elev as f64, vp, vs, 2700.0)
        })
        .collect()
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for n in [16, 32, 64] {
        let shape = region_shape(n);
        group.bench_with_input(BenchmarkId::new("points", shape.len()), &shape, |b, s| {
            b.iter(|| GridEnumerator::new(black_box(s)).map(|p| p.elev).sum::<i64>());
        });
        group.bench_with_input(BenchmarkId::new("write", shape.len()), &shape, |b, s| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(s.len() * 24);
                write_grid_points(&mut buf, black_box(s)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape");

    for n in [16, 32, 64] {
        let shape = region_shape(n);
        let records = synthetic_records(&shape);
        group.bench_with_input(BenchmarkId::new("volumes", shape.len()), &records, |b, r| {
            b.iter(|| reshape(black_box(r), &shape).unwrap().missing_count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_reshape);
criterion_main!(benches);
