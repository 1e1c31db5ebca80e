mod common;

use campaign_calendar::calendar::{MonthGrid, WeekStart};
use campaign_calendar::cli::output::{set_preferences, OutputPreferences};
use campaign_calendar::cli::render::{render_grid, render_items, render_totals, Money};
use campaign_calendar::costs::summarize_month;
use campaign_calendar::currency::{CurrencyCode, LocaleConfig};
use campaign_calendar::filter::FilterState;
use campaign_calendar::schedule::{Category, ScheduledItem};
use common::{date, march_plan, month};
use regex::Regex;

fn plain() {
    set_preferences(OutputPreferences {
        plain_mode: true,
        quiet_mode: false,
    });
    colored::control::set_override(false);
}

#[test]
fn totals_table_in_plain_mode() {
    plain();
    let items = vec![
        ScheduledItem::new("a", "Sticker run")
            .scheduled(date(2024, 3, 2), None)
            .with_budget(5),
        ScheduledItem::new("b", "Newsletter")
            .scheduled(date(2024, 3, 5), None)
            .with_category(Category::Email)
            .with_budget(250_000),
        ScheduledItem::new("c", "Campus flyers")
            .scheduled(date(2024, 3, 30), Some(date(2024, 4, 2)))
            .with_category(Category::Flyer)
            .with_budget(1_000),
    ];
    let currency = CurrencyCode::new("USD");
    let locale = LocaleConfig::default();
    let money = Money {
        currency: &currency,
        locale: &locale,
    };
    let summary = summarize_month(&items, month(2024, 3), &FilterState::default());

    insta::assert_snapshot!(render_totals(&summary, &money), @r"
=== Budget March 2024 ===
 CATEGORY             TOTAL
----------------------------
 Uncategorized        $0.05
 Email            $2,500.00
 Flyer               $10.00
 All              $2,510.05
3 item(s) starting this month, 0 unscheduled
");
}

#[test]
fn grid_marks_padding_days_and_item_counts() {
    plain();
    let grid = MonthGrid::build(month(2024, 3), WeekStart::Sunday, &march_plan());
    let rendered = render_grid(&grid);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "=== March 2024 ===");
    assert!(Regex::new(r"^\s+Sun\s+Mon\s+Tue\s+Wed\s+Thu\s+Fri\s+Sat$")
        .unwrap()
        .is_match(lines[1]));
    // Header, rule and six weeks.
    let first_week = lines[3];
    assert!(Regex::new(r"^\s+\(25\)\s+\(26 \[1\]\)").unwrap().is_match(first_week));
    assert!(rendered.contains("Unscheduled (1):"));
    assert!(rendered.contains("  s-4 Summer teaser"));
    let last_week = lines[8];
    assert!(Regex::new(r"\(2 \[1\]\)\s+\(3\)").unwrap().is_match(last_week));
}

#[test]
fn item_list_uses_locale_formatting() {
    plain();
    let currency = CurrencyCode::new("EUR");
    let locale = LocaleConfig::for_tag("de-DE");
    let money = Money {
        currency: &currency,
        locale: &locale,
    };
    let rendered = render_items(&march_plan()[..1], &money);
    assert!(rendered.contains("€100,00"));
    assert!(rendered.contains("2024-03-05..2024-03-08"));
    assert!(rendered.ends_with("1 item(s)"));
}
