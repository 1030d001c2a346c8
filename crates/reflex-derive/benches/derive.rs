use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reflex_core::ToneClass;
use reflex_derive::record::RHYME_GROUPS;
use reflex_derive::{
    derive_parts, Department, GanRules, Grade, HakkaRules, Initial, Openness, RhymeClass,
    RhymeGroup,
};

fn sweep() -> Vec<RhymeClass> {
    let groups: Vec<RhymeGroup> = RHYME_GROUPS.chars().filter_map(RhymeGroup::new).collect();
    let mut records = Vec::new();
    for (index, initial) in Initial::ALL.iter().enumerate() {
        for department in Department::ALL {
            for grade in Grade::ALL {
                records.push(RhymeClass {
                    id: records.len() as u32,
                    initial: *initial,
                    rhyme_group: groups[index % groups.len()],
                    department: *department,
                    grade: *grade,
                    openness: Openness::Open,
                    tone: ToneClass::Level,
                });
            }
        }
    }
    records
}

fn bench_derive(c: &mut Criterion) {
    let records = sweep();
    c.bench_function("derive_gan_sweep", |b| {
        b.iter(|| {
            for record in &records {
                let _ = black_box(derive_parts::<GanRules>(black_box(record)));
            }
        })
    });
    c.bench_function("derive_hakka_sweep", |b| {
        b.iter(|| {
            for record in &records {
                let _ = black_box(derive_parts::<HakkaRules>(black_box(record)));
            }
        })
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
