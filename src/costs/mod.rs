//! Start-month anchored budget aggregation over scheduled items.
//!
//! A multi-day item's budget is attributed once, to the month containing its
//! start date, even when the item runs into following months. Historical
//! aggregate figures depend on this rule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::{apply_filters_with_report, FilterState, FilterWarning};
use crate::schedule::{CalendarMonth, Category, ScheduledItem};

/// Budget total for a single month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: CalendarMonth,
    pub total_cents: u64,
}

/// Budget total for one category; `None` collects uncategorized items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Option<Category>,
    pub total_cents: u64,
}

/// Aggregates for one month after filters have been applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostSummary {
    pub month: CalendarMonth,
    pub total_cents: u64,
    pub item_count: usize,
    pub by_category: Vec<CategoryTotal>,
    pub unscheduled_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FilterWarning>,
}

fn starts_in(item: &ScheduledItem, month: CalendarMonth) -> bool {
    item.start_date.is_some_and(|start| month.contains(start))
}

/// Sums budgets of items whose start date falls in `month`, saturating at `u64::MAX`.
pub fn total_for_period(items: &[ScheduledItem], month: CalendarMonth) -> u64 {
    items
        .iter()
        .filter(|item| starts_in(item, month))
        .map(|item| item.budget_cents)
        .fold(0, u64::saturating_add)
}

/// Same anchoring as [`total_for_period`], grouped by category.
pub fn totals_by_category(
    items: &[ScheduledItem],
    month: CalendarMonth,
) -> BTreeMap<Option<Category>, u64> {
    let mut totals = BTreeMap::new();
    for item in items.iter().filter(|item| starts_in(item, month)) {
        let total = totals.entry(item.category).or_insert(0u64);
        *total = total.saturating_add(item.budget_cents);
    }
    totals
}

/// Twelve monthly totals for `year`, January first.
pub fn monthly_totals(items: &[ScheduledItem], year: i32) -> Vec<MonthTotal> {
    (1..=12)
        .filter_map(|month| CalendarMonth::new(year, month).ok())
        .map(|month| MonthTotal {
            month,
            total_cents: total_for_period(items, month),
        })
        .collect()
}

/// Filters the snapshot, then aggregates the month.
pub fn summarize_month(
    items: &[ScheduledItem],
    month: CalendarMonth,
    filters: &FilterState,
) -> CostSummary {
    let outcome = apply_filters_with_report(items, filters);
    let visible = &outcome.items;
    CostSummary {
        month,
        total_cents: total_for_period(visible, month),
        item_count: visible.iter().filter(|item| starts_in(item, month)).count(),
        by_category: totals_by_category(visible, month)
            .into_iter()
            .map(|(category, total_cents)| CategoryTotal {
                category,
                total_cents,
            })
            .collect(),
        unscheduled_count: visible.iter().filter(|item| !item.is_scheduled()).count(),
        warnings: outcome.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> CalendarMonth {
        CalendarMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(total_for_period(&[], march()), 0);
        assert!(totals_by_category(&[], march()).is_empty());
    }

    #[test]
    fn item_spanning_months_counts_once_in_start_month() {
        let items = vec![ScheduledItem::new("a", "Quarter push")
            .scheduled(date(2024, 3, 30), Some(date(2024, 4, 2)))
            .with_budget(5_000)];
        assert_eq!(total_for_period(&items, march()), 5_000);
        assert_eq!(total_for_period(&items, march().next()), 0);
    }

    #[test]
    fn huge_budgets_saturate_instead_of_overflowing() {
        let items = vec![
            ScheduledItem::new("a", "A")
                .scheduled(date(2024, 3, 5), None)
                .with_budget(u64::MAX),
            ScheduledItem::new("b", "B")
                .scheduled(date(2024, 3, 5), None)
                .with_budget(u64::MAX),
        ];
        assert_eq!(total_for_period(&items, march()), u64::MAX);
        assert_eq!(totals_by_category(&items, march()).get(&None), Some(&u64::MAX));
    }

    #[test]
    fn uncategorized_items_group_under_none() {
        let items = vec![
            ScheduledItem::new("a", "A")
                .scheduled(date(2024, 3, 1), None)
                .with_budget(100),
            ScheduledItem::new("b", "B")
                .scheduled(date(2024, 3, 2), None)
                .with_category(Category::Email)
                .with_budget(200),
        ];
        let totals = totals_by_category(&items, march());
        assert_eq!(totals.get(&None), Some(&100));
        assert_eq!(totals.get(&Some(Category::Email)), Some(&200));
    }

    #[test]
    fn monthly_totals_cover_the_year() {
        let items = vec![ScheduledItem::new("a", "A")
            .scheduled(date(2024, 11, 5), None)
            .with_budget(700)];
        let totals = monthly_totals(&items, 2024);
        assert_eq!(totals.len(), 12);
        assert_eq!(totals[10].total_cents, 700);
        assert_eq!(totals.iter().map(|t| t.total_cents).sum::<u64>(), 700);
    }

    #[test]
    fn summary_respects_filters() {
        let items = vec![
            ScheduledItem::new("a", "Spring flyers")
                .scheduled(date(2024, 3, 1), None)
                .with_category(Category::Flyer)
                .with_budget(1_000),
            ScheduledItem::new("b", "Newsletter")
                .scheduled(date(2024, 3, 8), None)
                .with_category(Category::Email)
                .with_budget(2_500),
            ScheduledItem::new("c", "Unplanned idea").with_category(Category::Email),
        ];
        let filters = FilterState {
            category: crate::filter::CategoryFilter::Only(Category::Email),
            ..FilterState::default()
        };
        let summary = summarize_month(&items, march(), &filters);
        assert_eq!(summary.total_cents, 2_500);
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.unscheduled_count, 1);
        assert_eq!(
            summary.by_category,
            vec![CategoryTotal {
                category: Some(Category::Email),
                total_cents: 2_500
            }]
        );
        assert!(summary.warnings.is_empty());
    }
}
