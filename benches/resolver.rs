//! Benchmarks for section resolution.
//!
//! Run with: cargo bench
//!
//! Resolution runs on every scroll event, so it has to stay cheap even for
//! long pages. Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sitekit::{resolve_active_section, MergeRule, Section};

/// A page of `count` stacked sections, 600px each with 40px gaps.
fn stacked_sections(count: u32) -> Vec<Section> {
    (0..count)
        .map(|i| Section::new(format!("section-{i}"), 500.0 + f64::from(i) * 640.0, 600.0))
        .collect()
}

/// Typical marketing page: a handful of sections and one merge rule
fn bench_site_page(c: &mut Criterion) {
    let sections = vec![
        Section::new("services", 700.0, 900.0),
        Section::new("about", 1640.0, 600.0),
        Section::new("service-areas", 2280.0, 400.0),
        Section::new("testimonials", 2720.0, 700.0),
        Section::new("contact", 3460.0, 500.0),
    ];
    let rules = vec![MergeRule::new("about", "service-areas")];

    c.bench_function("resolve_site_page", |b| {
        b.iter(|| resolve_active_section(black_box(2400.0), black_box(&sections), &rules))
    });
}

/// Worst case: position past every section
fn bench_long_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_past_end");
    let rules = vec![MergeRule::new("section-1", "section-3")];
    for count in [10u32, 100, 1000] {
        let sections = stacked_sections(count);
        let past_end = 500.0 + f64::from(count) * 640.0 + 1.0;
        group.bench_with_input(BenchmarkId::from_parameter(count), &sections, |b, s| {
            b.iter(|| resolve_active_section(black_box(past_end), s, &rules))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_site_page, bench_long_pages);
criterion_main!(benches);
