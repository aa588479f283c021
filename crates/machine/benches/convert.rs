//! Benchmarks for Mealy/Moore conversion.
//!
//! Run with: cargo bench
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealy_moore_machine::{MealyMachine, MooreMachine};

/// A Mealy machine with `states` states and `symbols` symbols where each
/// state is entered with several different outputs.
fn ring_mealy(states: usize, symbols: usize) -> MealyMachine {
    let mut mealy = MealyMachine::new("q0");
    for s in 0..states {
        for a in 0..symbols {
            let next = format!("q{}", (s + a + 1) % states);
            let output = format!("o{}", (s * a) % 3);
            mealy = mealy.with_transition(&format!("q{}", s), &format!("a{}", a), &next, &output);
        }
    }
    mealy
}

fn ring_moore(states: usize, symbols: usize) -> MooreMachine {
    let mut moore = MooreMachine::new("q0");
    for s in 0..states {
        moore = moore.with_output(&format!("q{}", s), &format!("o{}", s % 3));
        for a in 0..symbols {
            let next = format!("q{}", (s + a + 1) % states);
            moore = moore.with_transition(&format!("q{}", s), &format!("a{}", a), &next);
        }
    }
    moore
}

fn bench_mealy_to_moore(c: &mut Criterion) {
    let mut group = c.benchmark_group("mealy_to_moore");

    for states in [8, 64, 256] {
        let mealy = ring_mealy(states, 4);
        group.throughput(Throughput::Elements(mealy.transition_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(states), &mealy, |b, m| {
            b.iter(|| black_box(m.to_moore()))
        });
    }

    group.finish();
}

fn bench_moore_to_mealy(c: &mut Criterion) {
    let mut group = c.benchmark_group("moore_to_mealy");

    for states in [8, 64, 256] {
        let moore = ring_moore(states, 4);
        group.throughput(Throughput::Elements(moore.transition_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(states), &moore, |b, m| {
            b.iter(|| black_box(m.to_mealy()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mealy_to_moore, bench_moore_to_mealy);
criterion_main!(benches);
