use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reflex_core::Dialect;
use reflex_dialects::{Pronunciation, RenderStyle};

fn render_parse_bench(c: &mut Criterion) {
    let style = RenderStyle::default();
    for dialect in Dialect::ALL {
        let readings = Pronunciation::enumerate(dialect);
        let texts: Vec<String> = readings.iter().map(|reading| reading.render(&style)).collect();

        c.bench_function(&format!("render_{}", dialect.code()), |b| {
            b.iter(|| {
                for reading in &readings {
                    black_box(reading.render(&style));
                }
            });
        });
        c.bench_function(&format!("parse_{}", dialect.code()), |b| {
            b.iter(|| {
                for text in &texts {
                    black_box(Pronunciation::parse(dialect, text).unwrap());
                }
            });
        });
    }
}

fn strict_bench(c: &mut Criterion) {
    let readings: Vec<_> = Dialect::ALL
        .into_iter()
        .flat_map(Pronunciation::enumerate)
        .collect();
    c.bench_function("strict_ipa_all", |b| {
        b.iter(|| {
            for reading in &readings {
                black_box(reading.strict_ipa());
            }
        });
    });
}

criterion_group!(benches, render_parse_bench, strict_bench);
criterion_main!(benches);
