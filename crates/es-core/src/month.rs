//! # YearMonth
//!
//! The anchor month a grid is generated for.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A calendar month. Always holds a valid (year, month) pair inside
/// `MIN_YEAR..=MAX_YEAR`, so its neighbours are representable too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month a given day belongs to. Days outside the supported year
    /// range are clamped to its nearest end.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year().clamp(Self::MIN_YEAR, Self::MAX_YEAR);
        let month = if year == date.year() {
            date.month()
        } else if year == Self::MIN_YEAR {
            1
        } else {
            12
        };
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.day(1)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.day(self.days_in_month())
    }

    fn day(&self, day: u32) -> NaiveDate {
        // (year, month) is validated on construction and `day` never exceeds
        // `days_in_month`, so this always resolves.
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Moves by `delta` months, crossing year boundaries as needed.
    pub fn shift(&self, delta: i32) -> Result<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        i32::try_from(year)
            .ok()
            .and_then(|year| Self::new(year, month).ok())
            .ok_or_else(|| CalendarError::MonthOutOfRange {
                from: self.to_string(),
                delta,
            })
    }

    pub fn next(&self) -> Result<Self> {
        self.shift(1)
    }

    pub fn previous(&self) -> Result<Self> {
        self.shift(-1)
    }

    /// Human title, e.g. "February 2024".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidMonthLiteral(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
