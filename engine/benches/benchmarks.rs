//! Performance benchmarks for guestbook-engine

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use guestbook_engine::{export, Guest, GuestFields, GuestFilter, SortDirection, SortField};

fn create_roster(size: usize) -> Vec<Guest> {
    let now = Utc.timestamp_opt(1_735_722_000, 0).unwrap();
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    (0..size)
        .map(|i| {
            let check_in = base + chrono::Days::new((i % 365) as u64);
            let fields = GuestFields::new(
                format!("Guest {}", i),
                check_in,
                check_in + chrono::Days::new(2),
            )
            .with_room_number(format!("{}", 100 + i % 50))
            .with_purpose_of_visit(if i % 3 == 0 { "Business" } else { "Leisure" });
            Guest::new(format!("guest_{}", i), fields, now)
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100, 1000, 5000].iter() {
        let roster = create_roster(*size);

        group.bench_with_input(BenchmarkId::new("search", size), &roster, |b, roster| {
            let filter = GuestFilter::new().search("business");
            b.iter(|| filter.apply(black_box(roster.clone())))
        });

        group.bench_with_input(BenchmarkId::new("sort_by_name", size), &roster, |b, roster| {
            let filter = GuestFilter::new().sort_by(SortField::Name, SortDirection::Ascending);
            b.iter(|| filter.apply(black_box(roster.clone())))
        });

        group.bench_with_input(
            BenchmarkId::new("search_then_sort", size),
            &roster,
            |b, roster| {
                let filter = GuestFilter::new()
                    .search("guest 1")
                    .sort_by(SortField::CheckIn, SortDirection::Descending);
                b.iter(|| filter.apply(black_box(roster.clone())))
            },
        );
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for size in [100, 1000, 5000].iter() {
        let roster = create_roster(*size);

        group.bench_with_input(BenchmarkId::new("to_csv", size), &roster, |b, roster| {
            b.iter(|| export::to_csv(black_box(roster)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query, bench_export);
criterion_main!(benches);
