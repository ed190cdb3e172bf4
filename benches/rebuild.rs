use astral_cycle::constellation::{ConstellationDef, ConstellationRegistry, Tier};
use astral_cycle::schedule::{DaySkySchedule, WorldCycleState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn registry(weak: usize, minor: usize) -> ConstellationRegistry {
    let mut registry = ConstellationRegistry::new();
    for i in 0..weak {
        let tier = if i % 3 == 0 { Tier::Major } else { Tier::Weak };
        registry
            .register(ConstellationDef::new(format!("weak_{}", i), tier))
            .expect("unique name");
    }
    for i in 0..minor {
        registry
            .register(ConstellationDef::new(format!("minor_{}", i), Tier::Minor).with_seeded_phases(2))
            .expect("unique name");
    }
    registry
}

fn bench_rebuild(c: &mut Criterion) {
    let registry = registry(16, 8);
    let mut schedule = DaySkySchedule::new();

    c.bench_function("rebuild_24_constellations", |b| {
        b.iter(|| schedule.rebuild(black_box(42), &registry))
    });
}

fn bench_daily_ticks(c: &mut Criterion) {
    let registry = registry(16, 8);

    c.bench_function("tick_one_year_forward", |b| {
        b.iter(|| {
            let mut state = WorldCycleState::new(black_box(42), &registry);
            for day in 0..360 {
                state.tick(day, &registry);
            }
            state.generation()
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_daily_ticks);
criterion_main!(benches);
