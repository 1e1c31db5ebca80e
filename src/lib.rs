#![doc(test(attr(deny(warnings))))]

//! Campaign Calendar places marketing strategies and flyer events on monthly
//! calendar grids, totals their budgets and filters them for dashboard views.
//!
//! The calendar, cost and filter modules are pure functions over a snapshot of
//! [`schedule::ScheduledItem`]s: they hold no state between calls and can be
//! re-run against every new (or provisional) snapshot the host supplies.
//!
//! ```
//! use campaign_calendar::calendar::MonthGrid;
//! use campaign_calendar::schedule::{CalendarMonth, ScheduledItem};
//! use chrono::NaiveDate;
//!
//! let march = CalendarMonth::from_zero_based(2024, 2).unwrap();
//! let start = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
//! let items = vec![ScheduledItem::new("s-1", "Spring push").scheduled(start, Some(end))];
//!
//! let grid = MonthGrid::build(march, Default::default(), &items);
//! let occupied = grid.cells().iter().filter(|cell| !cell.items.is_empty()).count();
//! assert_eq!(occupied, 4);
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod costs;
pub mod currency;
pub mod drafts;
pub mod errors;
pub mod filter;
pub mod records;
pub mod schedule;
pub mod utils;

pub use errors::{Result, ScheduleError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Campaign Calendar tracing initialized.");
    });
}
