use amlich_canchi::{
    Element, HeavenlyStem, constellation_for_day, day_pair, element_compatibility, hour_pair,
    month_pair, year_pair,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn pairs_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sexagenary");
    group.bench_function("year_pair", |b| b.iter(|| year_pair(black_box(2024))));
    group.bench_function("month_pair", |b| {
        b.iter(|| month_pair(black_box(2024), black_box(6)))
    });
    group.bench_function("day_pair", |b| b.iter(|| day_pair(black_box(2_460_351))));
    group.bench_function("hour_pair", |b| {
        b.iter(|| hour_pair(black_box(HeavenlyStem::Giap), black_box(13)))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.bench_function("constellation_for_day", |b| {
        b.iter(|| constellation_for_day(black_box(2_460_351)))
    });
    group.bench_function("element_compatibility", |b| {
        b.iter(|| element_compatibility(black_box(Element::Fire), black_box(Element::Metal)))
    });
    group.finish();
}

criterion_group!(benches, pairs_bench, lookup_bench);
criterion_main!(benches);
