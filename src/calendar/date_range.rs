//! Converts scheduled items into the calendar dates they occupy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;
use crate::schedule::ScheduledItem;

/// Where a date sits inside an item's span, used to draw continuous bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpanPosition {
    Single,
    First,
    Middle,
    Last,
}

/// Returns every grid date inside the item's inclusive span, in grid order.
///
/// Unscheduled items occupy nothing. Items whose end precedes their start are
/// rejected with [`ScheduleError::InvalidRange`].
pub fn cells_for_item(
    item: &ScheduledItem,
    grid_dates: &[NaiveDate],
) -> Result<Vec<NaiveDate>, ScheduleError> {
    let Some(span) = item.span()? else {
        return Ok(Vec::new());
    };
    Ok(grid_dates
        .iter()
        .copied()
        .filter(|date| span.contains(*date))
        .collect())
}

/// Classifies `date` within the item's span. Dates outside the span yield `None`.
pub fn position_in_range(
    item: &ScheduledItem,
    date: NaiveDate,
) -> Result<Option<SpanPosition>, ScheduleError> {
    let Some(span) = item.span()? else {
        return Ok(None);
    };
    if !span.contains(date) {
        return Ok(None);
    }
    let position = if span.is_single_day() {
        SpanPosition::Single
    } else if date == span.start {
        SpanPosition::First
    } else if date == span.end {
        SpanPosition::Last
    } else {
        SpanPosition::Middle
    };
    Ok(Some(position))
}

/// Lists every date of the item's span regardless of any grid.
pub fn span_days(item: &ScheduledItem) -> Result<Vec<NaiveDate>, ScheduleError> {
    Ok(item
        .span()?
        .map(|span| span.days().collect())
        .unwrap_or_default())
}
