//! # CalendarError
//!
//! Centralized error handling for the Elevate Social calendar.
//! Only caller mistakes surface here; bad post data degrades to "not shown".

use chrono::NaiveDate;
use thiserror::Error;

/// The primary error type for all es-core and es-calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Year/month pair that does not name a real month (e.g., month 13)
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// A `YYYY-MM` literal that could not be parsed
    #[error("invalid month literal {0:?}, expected YYYY-MM")]
    InvalidMonthLiteral(String),

    /// Month navigation walked off the supported calendar range
    #[error("month navigation out of range: {from} shifted by {delta}")]
    MonthOutOfRange { from: String, delta: i32 },

    /// The date is not one of the 42 cells currently displayed
    #[error("{0} is not part of the displayed grid")]
    DateOutsideGrid(NaiveDate),

    /// "+N more" is only offered when a cell overflows its inline cap
    #[error("{date} has {matches} post(s), which fits the inline cap of {cap}")]
    NothingToExpand {
        date: NaiveDate,
        matches: usize,
        cap: usize,
    },
}

/// A specialized Result type for calendar logic.
pub type Result<T> = std::result::Result<T, CalendarError>;
