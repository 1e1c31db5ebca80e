//! Text renderings of grids, totals and item lists.

use chrono::Datelike;

use super::output::{dimmed, styled, MessageKind};
use super::table::{Alignment, Table, TableColumn};
use crate::calendar::{CalendarCell, MonthGrid};
use crate::costs::CostSummary;
use crate::currency::{format_cents, CurrencyCode, LocaleConfig};
use crate::schedule::ScheduledItem;

/// Formatting context shared by the renderers.
pub struct Money<'a> {
    pub currency: &'a CurrencyCode,
    pub locale: &'a LocaleConfig,
}

impl Money<'_> {
    pub fn format(&self, cents: u64) -> String {
        format_cents(cents, self.currency, self.locale)
    }
}

fn cell_label(cell: &CalendarCell) -> String {
    let day = cell.date.day().to_string();
    let label = if cell.items.is_empty() {
        day
    } else {
        format!("{day} [{}]", cell.items.len())
    };
    if cell.is_current_period {
        label
    } else {
        dimmed(&format!("({label})"))
    }
}

/// Six rows of seven cells; padding days are parenthesised.
pub fn render_grid(grid: &MonthGrid) -> String {
    let columns = grid
        .weekday_headers()
        .iter()
        .map(|header| TableColumn::new(*header, Alignment::Right).min_width(8))
        .collect();
    let mut table = Table::new(columns);
    for week in grid.weeks() {
        table.push_row(week.iter().map(cell_label).collect());
    }

    let mut out = vec![styled(MessageKind::Section, grid.month.label()), table.render()];

    let assignment = &grid.assignment;
    if !assignment.unscheduled.is_empty() {
        out.push(String::new());
        out.push(format!("Unscheduled ({}):", assignment.unscheduled.len()));
        out.extend(
            assignment
                .unscheduled
                .iter()
                .map(|item| format!("  {} {}", item.id, item.name)),
        );
    }
    if !assignment.invalid.is_empty() {
        out.push(String::new());
        out.push(format!("Invalid ({}):", assignment.invalid.len()));
        out.extend(
            assignment
                .invalid
                .iter()
                .map(|invalid| format!("  {} {}: {}", invalid.item.id, invalid.item.name, invalid.error)),
        );
    }
    out.join("\n")
}

pub fn render_totals(summary: &CostSummary, money: &Money<'_>) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("CATEGORY", Alignment::Left).min_width(12),
        TableColumn::new("TOTAL", Alignment::Right).min_width(10),
    ]);
    for entry in &summary.by_category {
        let label = entry
            .category
            .map(|category| category.label().to_string())
            .unwrap_or_else(|| "Uncategorized".into());
        table.push_row(vec![label, money.format(entry.total_cents)]);
    }
    table.push_row(vec!["All".into(), money.format(summary.total_cents)]);

    let mut out = vec![
        styled(MessageKind::Section, format!("Budget {}", summary.month.label())),
        table.render(),
        format!(
            "{} item(s) starting this month, {} unscheduled",
            summary.item_count, summary.unscheduled_count
        ),
    ];
    out.extend(summary.warnings.iter().map(|warning| {
        styled(MessageKind::Warning, super::describe_warning(warning))
    }));
    out.join("\n")
}

fn date_range_label(item: &ScheduledItem) -> String {
    match (item.start_date, item.end_date) {
        (None, _) => "-".into(),
        (Some(start), None) => start.to_string(),
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{start}..{end}"),
    }
}

pub fn render_items(items: &[ScheduledItem], money: &Money<'_>) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("ID", Alignment::Left),
        TableColumn::new("NAME", Alignment::Left).max_width(28),
        TableColumn::new("CATEGORY", Alignment::Left),
        TableColumn::new("DATES", Alignment::Left),
        TableColumn::new("BUDGET", Alignment::Right),
        TableColumn::new("REACH", Alignment::Right),
    ]);
    for item in items {
        table.push_row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category
                .map(|category| category.label().to_string())
                .unwrap_or_else(|| "-".into()),
            date_range_label(item),
            money.format(item.budget_cents),
            item.reach.map(|reach| reach.to_string()).unwrap_or_else(|| "-".into()),
        ]);
    }
    format!("{}\n{} item(s)", table.render(), items.len())
}
