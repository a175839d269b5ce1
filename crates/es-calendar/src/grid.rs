//! # Date Grid Builder
//!
//! Lays a month out as six full weeks. The leading run borrows the tail of
//! the previous month, the trailing run the head of the next one, so every
//! grid is exactly [`GRID_CELLS`] long.

use chrono::{Datelike, Days, NaiveDate};
use es_core::{CalendarCell, WeekStart, YearMonth};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// The 42 cells displayed for one anchor month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Six rows of seven, in display order.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells.first().map(|cell| cell.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.last().map(|cell| cell.date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.cell(date).is_some()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Previous-month days shown before the 1st.
    pub fn leading(&self) -> &[CalendarCell] {
        let end = self.cells.iter().position(|c| c.is_current_month).unwrap_or(0);
        &self.cells[..end]
    }

    pub fn current(&self) -> &[CalendarCell] {
        let start = self.leading().len();
        let len = self.month.days_in_month() as usize;
        &self.cells[start..start + len]
    }

    /// Next-month days shown after the last day of the month.
    pub fn trailing(&self) -> &[CalendarCell] {
        let start = self.leading().len() + self.month.days_in_month() as usize;
        &self.cells[start..]
    }
}

/// Sunday-first grid for `month`.
pub fn build_month_grid(month: YearMonth) -> MonthGrid {
    build_month_grid_from(month, WeekStart::Sunday)
}

pub fn build_month_grid_from(month: YearMonth, week_start: WeekStart) -> MonthGrid {
    let first = month.first_day();
    let leading = u64::from(week_start.column_of(first.weekday()));
    // YearMonth stays far inside chrono's range, so a week back always exists.
    let start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            is_current_month: month.contains(date),
        })
        .collect();

    MonthGrid {
        month,
        week_start,
        cells,
    }
}
