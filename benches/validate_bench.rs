use criterion::{Criterion, black_box, criterion_group, criterion_main};

use eurovat::*;

const MIXED: &[&str] = &[
    "DE136695976",
    "ATU13585627",
    " be 0403.170.701",
    "FR40303265045",
    "NL123456789B13",
    "NL004495445B01",
    "ESA13585625",
    "IE6433435F",
    "SE123456789701",
    "DE123456789",
    "XX123456789",
    "",
];

fn bench_validate_single(c: &mut Criterion) {
    c.bench_function("validate_de", |b| {
        b.iter(|| black_box(validate(black_box("DE136695976"))));
    });
}

fn bench_validate_nl_mod97(c: &mut Criterion) {
    c.bench_function("validate_nl_mod97", |b| {
        b.iter(|| black_box(validate(black_box("NL123456789B13"))));
    });
}

fn bench_validate_mixed(c: &mut Criterion) {
    c.bench_function("validate_mixed_12", |b| {
        b.iter(|| {
            for raw in MIXED {
                let _ = black_box(validate(black_box(raw)));
            }
        });
    });
}

fn bench_sanitize(c: &mut Criterion) {
    c.bench_function("sanitize_decorated", |b| {
        b.iter(|| black_box(sanitize(black_box("  nl 1234.5678.9-b13  "))));
    });
}

fn bench_all_rules(c: &mut Criterion) {
    c.bench_function("rule_dispatch_all_countries", |b| {
        b.iter(|| {
            for cc in CountryCode::ALL {
                let _ = black_box(rule_for(cc).validate(black_box("123456789")));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_validate_single,
    bench_validate_nl_mod97,
    bench_validate_mixed,
    bench_sanitize,
    bench_all_rules,
);
criterion_main!(benches);
