use campaign_calendar::calendar::{MonthGrid, WeekStart};
use campaign_calendar::costs::summarize_month;
use campaign_calendar::filter::{apply_filters, FilterState, ThresholdMetric};
use campaign_calendar::schedule::{CalendarMonth, Category, ScheduledItem};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_items(count: usize) -> Vec<ScheduledItem> {
    let base = NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date");
    (0..count)
        .map(|idx| {
            let start = base + Duration::days((idx % 90) as i64);
            let end = start + Duration::days((idx % 6) as i64);
            let mut item = ScheduledItem::new(format!("item-{idx}"), format!("Campaign {idx}"))
                .with_category(Category::ALL[idx % Category::ALL.len()])
                .with_budget((idx as u64 % 50) * 10_000)
                .with_reach(idx as u64 * 1_000)
                .with_tags([if idx % 2 == 0 { "instagram" } else { "email" }]);
            if idx % 10 != 0 {
                item = item.scheduled(start, Some(end));
            }
            item
        })
        .collect()
}

fn bench_grid(c: &mut Criterion) {
    let month = CalendarMonth::new(2024, 3).expect("valid month");
    let mut group = c.benchmark_group("month_grid");
    for size in [100usize, 1_000, 5_000] {
        let items = synthetic_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| MonthGrid::build(month, WeekStart::Sunday, black_box(items)))
        });
    }
    group.finish();
}

fn bench_filters_and_totals(c: &mut Criterion) {
    let month = CalendarMonth::new(2024, 3).expect("valid month");
    let items = synthetic_items(5_000);
    let filters = FilterState::default()
        .with_search("campaign 1")
        .with_threshold(ThresholdMetric::Reach, "100K")
        .with_tag("instagram");

    c.bench_function("apply_filters_5000", |b| {
        b.iter(|| apply_filters(black_box(&items), &filters))
    });
    c.bench_function("summarize_month_5000", |b| {
        b.iter(|| summarize_month(black_box(&items), month, &filters))
    });
}

criterion_group!(benches, bench_grid, bench_filters_and_totals);
criterion_main!(benches);
