use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use stretch_mem::{GrowVec, Doubling, Exact, HalfOccupancy};

fn bench_push(c: &mut Criterion) {
    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..1000 {
                v.push(black_box(i));
            }
            v
        })
    });
    c.bench_function("grow_vec_push_overallocate", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            for i in 0..1000 {
                let _ = v.push(black_box(i));
            }
            v
        })
    });
    c.bench_function("grow_vec_push_doubling", |b| {
        b.iter(|| {
            let mut v = GrowVec::new().with_growth_policy(Doubling);
            for i in 0..1000 {
                let _ = v.push(black_box(i));
            }
            v
        })
    });
    c.bench_function("grow_vec_push_exact", |b| {
        b.iter(|| {
            let mut v = GrowVec::new().with_growth_policy(Exact);
            for i in 0..1000 {
                let _ = v.push(black_box(i));
            }
            v
        })
    });
}

fn bench_drain(c: &mut Criterion) {
    c.bench_function("grow_vec_pop_half_occupancy", |b| {
        b.iter(|| {
            let mut v: GrowVec<_> = (0..1000).collect();
            v.set_shrink_policy(HalfOccupancy::default());
            while let Ok(value) = v.pop() {
                black_box(value);
            }
            v
        })
    });
}

criterion_group!(benches, bench_push, bench_drain);
criterion_main!(benches);
