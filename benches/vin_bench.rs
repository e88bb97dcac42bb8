use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vindecode::*;

const VINS: &[&str] = &[
    "1HGCM82633A004352",
    "WBA3A5C50DF123456",
    "5YJ3E1EA2KF317000",
    "9BWAAAB115P000123",
    "1G9CM82683A004352",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("is_valid", |b| {
        b.iter(|| {
            for raw in VINS {
                black_box(Vin::new(black_box(raw)).is_valid());
            }
        })
    });
}

fn bench_lookups(c: &mut Criterion) {
    let vins: Vec<Vin> = VINS.iter().map(|raw| Vin::new(raw)).collect();
    c.bench_function("country_region_manufacturer", |b| {
        b.iter(|| {
            for vin in &vins {
                black_box(vin.country());
                black_box(vin.region());
                black_box(vin.manufacturer());
            }
        })
    });
    c.bench_function("year", |b| {
        b.iter(|| {
            for vin in &vins {
                let _ = black_box(vin.year());
            }
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let vin = Vin::new(VINS[0]);
    c.bench_function("report", |b| b.iter(|| black_box(vin.report())));
}

criterion_group!(benches, bench_validate, bench_lookups, bench_report);
criterion_main!(benches);
