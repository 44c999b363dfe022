use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use testset::core::models::Exception;
use testset::reporting::NullObserver;
use testset::{Registry, RequestedCases, TestSet, TestSuite, test_err, test_true};

fn passing(set: &mut TestSet<'_>) -> anyhow::Result<()> {
    for _ in 0..100 {
        set.case("arithmetic", |t| {
            test_true!(t, black_box(2) + 2 == 4);
            test_err!(t, black_box("x").parse::<u32>());
        });
    }
    Ok(())
}

fn raising(set: &mut TestSet<'_>) -> anyhow::Result<()> {
    for _ in 0..100 {
        set.case("raises", |_t| -> () {
            std::panic::panic_any(Exception::new("bench"));
        });
    }
    Ok(())
}

fn bench_suite(c: &mut Criterion, name: &str, runner: testset::core::registry::TestSetFn) {
    testset::infra::panic::install_quiet_hook();
    let mut registry = Registry::new();
    registry.register(name, runner);
    let suite = TestSuite::new(registry);
    let requested = RequestedCases::all();

    c.bench_function(name, |b| {
        b.iter(|| black_box(suite.run(&requested, Box::new(NullObserver))));
    });
}

fn bench_passing_cases(c: &mut Criterion) {
    bench_suite(c, "run_passing_cases", passing);
}

fn bench_contained_panics(c: &mut Criterion) {
    bench_suite(c, "run_contained_panics", raising);
}

criterion_group!(benches, bench_passing_cases, bench_contained_panics);
criterion_main!(benches);
