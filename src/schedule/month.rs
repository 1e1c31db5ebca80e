use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years whose six-week grids stay well inside chrono's date range.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// A validated calendar month. `month` is stored 1-based like chrono.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "RawMonth")]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonth> for CalendarMonth {
    type Error = ScheduleError;

    fn try_from(raw: RawMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ScheduleError> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::MonthOutOfRange(month));
        }
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(ScheduleError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Builds a month from a 0-11 index, the convention used by browser date APIs.
    pub fn from_zero_based(year: i32, month_index: u32) -> Result<Self, ScheduleError> {
        if month_index > 11 {
            return Err(ScheduleError::MonthOutOfRange(month_index));
        }
        Self::new(year, month_index + 1)
    }

    pub fn containing(date: NaiveDate) -> Result<Self, ScheduleError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn zero_based_month(&self) -> u32 {
        self.month - 1
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first_of_next = self.next().first_day();
        first_of_next.pred_opt().unwrap_or(first_of_next)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.zero_based_month() as usize]
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
