use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use vith_core::alphabet::EquivalenceTable;
use vith_core::settings::UnmappedPolicy;
use vith_core::{transliterate, Direction, Transliterator};

const LATIN: &str = "Xhorxh W. Bush dhe Bill Klinton shtrënguan duart në mirënjohje.";

fn bench_transliterate(c: &mut Criterion) {
    let vithkuqi = transliterate(LATIN);
    let mut group = c.benchmark_group("transliterate");

    for (name, input) in [("latin", LATIN), ("vithkuqi", vithkuqi.as_str())] {
        group.bench_with_input(BenchmarkId::new("auto", name), input, |b, s| {
            b.iter(|| transliterate(s))
        });
    }

    let long = LATIN.repeat(200);
    group.bench_with_input(BenchmarkId::new("auto", "latin_x200"), &long, |b, s| {
        b.iter(|| transliterate(s))
    });

    let to_latin = Transliterator::new(EquivalenceTable::global(), UnmappedPolicy::Keep)
        .with_direction(Direction::ToLatin);
    group.bench_with_input(
        BenchmarkId::new("to_latin", "vithkuqi"),
        vithkuqi.as_str(),
        |b, s| b.iter(|| to_latin.transliterate(s)),
    );

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    c.bench_function("build_table", |b| {
        b.iter(|| EquivalenceTable::from_entries(&vith_core::alphabet::ENTRIES))
    });
}

criterion_group!(benches, bench_transliterate, bench_table);
criterion_main!(benches);
