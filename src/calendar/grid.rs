//! Fixed six-week month grids and item-to-cell assignment.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::date_range::cells_for_item;
use crate::errors::ScheduleError;
use crate::schedule::{CalendarMonth, ScheduledItem};

/// Number of cells in every month grid: six rows of seven days.
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// First column of the grid. Sunday matches a Sun–Sat header row.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Number of leading cells needed before `date` lands in its column.
    pub fn offset_of(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    pub fn headers(&self) -> [&'static str; DAYS_PER_WEEK] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => f.write_str("sunday"),
            WeekStart::Monday => f.write_str("monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sun" | "sunday" => Ok(WeekStart::Sunday),
            "mon" | "monday" => Ok(WeekStart::Monday),
            other => Err(ScheduleError::Config(format!("unknown week start `{other}`"))),
        }
    }
}

/// One date slot of a rendered month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_period: bool,
    pub items: Vec<ScheduledItem>,
}

impl CalendarCell {
    fn empty(date: NaiveDate, month: CalendarMonth) -> Self {
        Self {
            date,
            is_current_period: month.contains(date),
            items: Vec::new(),
        }
    }
}

/// An item that could not be placed, together with the reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvalidItem {
    pub item: ScheduledItem,
    pub error: String,
}

/// Cells with items attached, plus the items that could not be placed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridAssignment {
    pub cells: Vec<CalendarCell>,
    pub unscheduled: Vec<ScheduledItem>,
    pub invalid: Vec<InvalidItem>,
}

/// Builds the Sunday-start 42-cell grid for `month`.
pub fn build_month_grid(month: CalendarMonth) -> Vec<CalendarCell> {
    build_month_grid_with(month, WeekStart::Sunday)
}

/// Builds the 42-cell grid for `month`, padding with adjacent-month days.
pub fn build_month_grid_with(month: CalendarMonth, week_start: WeekStart) -> Vec<CalendarCell> {
    let first = month.first_day();
    let leading = Days::new(u64::from(week_start.offset_of(first)));
    // Supported years keep the window far from chrono's limits; clamp instead of panicking.
    let grid_start = first.checked_sub_days(leading).unwrap_or(first);
    grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell::empty(date, month))
        .collect()
}

/// Appends every item to each cell it occupies, preserving input order.
///
/// Unscheduled items and items with an invalid range are collected separately;
/// neither aborts assignment of the remaining items.
pub fn assign_items(mut cells: Vec<CalendarCell>, items: &[ScheduledItem]) -> GridAssignment {
    let grid_dates: Vec<NaiveDate> = cells.iter().map(|cell| cell.date).collect();
    let mut unscheduled = Vec::new();
    let mut invalid = Vec::new();

    for item in items {
        if !item.is_scheduled() {
            unscheduled.push(item.clone());
            continue;
        }
        match cells_for_item(item, &grid_dates) {
            Ok(dates) => {
                for cell in cells.iter_mut().filter(|cell| dates.contains(&cell.date)) {
                    cell.items.push(item.clone());
                }
            }
            Err(err) => {
                tracing::warn!(item = %item.id, error = %err, "skipping item with invalid range");
                invalid.push(InvalidItem {
                    item: item.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        cells = cells.len(),
        unscheduled = unscheduled.len(),
        invalid = invalid.len(),
        "assigned items to grid"
    );

    GridAssignment {
        cells,
        unscheduled,
        invalid,
    }
}

/// A month grid bundled with its assignment, ready for a rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: CalendarMonth,
    pub week_start: WeekStart,
    pub assignment: GridAssignment,
}

impl MonthGrid {
    pub fn build(month: CalendarMonth, week_start: WeekStart, items: &[ScheduledItem]) -> Self {
        let cells = build_month_grid_with(month, week_start);
        Self {
            month,
            week_start,
            assignment: assign_items(cells, items),
        }
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.assignment.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.assignment.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.assignment.cells.iter().find(|cell| cell.date == date)
    }

    pub fn weekday_headers(&self) -> [&'static str; DAYS_PER_WEEK] {
        self.week_start.headers()
    }

    pub fn leading_days(&self) -> usize {
        self.cells()
            .iter()
            .take_while(|cell| !cell.is_current_period)
            .count()
    }

    pub fn trailing_days(&self) -> usize {
        self.cells()
            .iter()
            .rev()
            .take_while(|cell| !cell.is_current_period)
            .count()
    }
}
