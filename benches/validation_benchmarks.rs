//! Performance benchmarks for phone number validation.
//!
//! These benchmarks measure the service layer under its main paths:
//! - International number parsed on the first attempt
//! - National number resolved through the region hint
//! - Early rejection by the spacing/character check

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phone_validator_api::{LibPhoneNumberPlan, PhoneNumberService, PhoneValidator};
use std::hint::black_box;

fn bench_normalize(c: &mut Criterion) {
    let validator = PhoneValidator::new(LibPhoneNumberPlan::new());
    let mut group = c.benchmark_group("normalize");

    for (label, phone, region) in [
        ("international", "+34915872200", ""),
        ("national_with_region", "915872200", "ES"),
        ("grouped_digits", "+34 915 872200", ""),
        ("invalid_format", "+34 915 872 200", ""),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(phone, region), |b, &(p, r)| {
            b.iter(|| validator.normalize(black_box(p), black_box(r)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
