use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lifeclock::{ClockTime, Config, Grid, Life, Stepper};
use rand::{SeedableRng, rngs::StdRng};

fn make_grid(size: usize) -> Grid {
    Grid::random(size, size, 0.5, &mut StdRng::seed_from_u64(size as u64))
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("reused", size), &grid, |b, grid| {
            let mut stepper = Stepper::new();
            b.iter_batched(
                || grid.clone(),
                |mut grid| stepper.step(&mut grid),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("fresh", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.next_generation(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let now = ClockTime::new(23, 59).expect("valid clock time");
    let mut group = c.benchmark_group("draw");
    for clock in [false, true] {
        let config = Config::new(1920, 1080).with_clock(clock);
        let mut life = Life::new(&config, &mut StdRng::seed_from_u64(1)).expect("life");

        group.bench_function(BenchmarkId::new("clock", clock), |b| {
            b.iter(|| life.draw(now))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_draw);
criterion_main!(benches);
