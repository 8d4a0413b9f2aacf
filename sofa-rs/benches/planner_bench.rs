use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sofa_rs::build_layout;
use sofa_rs::cushions::{CushionPolicy, SizeClass, choose_sizes};
use sofa_rs::entities::{Side, Sides, SofaSpec, Topology};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, planner_bench, layout_bench);

const LENGTHS: [u32; 3] = [287, 413, 256];

/// Benchmark the anchor sweep of the planner on three branches, for every size class.
fn planner_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner_3_branches");
    for (name, class) in [
        ("valise", SizeClass::Free),
        ("p", SizeClass::Small),
        ("g", SizeClass::Large),
    ] {
        let policy = CushionPolicy::Valise { class, same: false };
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| choose_sizes(black_box(&LENGTHS), &policy))
        });
    }
    group.finish();
}

/// Benchmark the full pipeline on a U-shaped sofa whose layout is left to the selector.
fn layout_bench(c: &mut Criterion) {
    let spec = SofaSpec::u_shaped(Topology::UOneCorner { variant: None }, 420.0, 280.0, 260.0, 70.0)
        .with_backrests(Sides::ALL)
        .with_armrests(Sides::of(&[Side::Left, Side::Right]))
        .with_cushions(CushionPolicy::Valise {
            class: SizeClass::Free,
            same: false,
        });
    c.bench_function("build_layout_u_one_corner", |b| {
        b.iter(|| build_layout(black_box(&spec)))
    });
}
