use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Inclusive range of calendar days occupied by a scheduled item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Builds a span, refusing ranges that end before they start.
    pub fn new(id: &str, start: NaiveDate, end: NaiveDate) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::InvalidRange {
                id: id.to_string(),
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Iterates every date of the span in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.len_days()).map(move |offset| start + Duration::days(offset))
    }
}
