//! # Selection & Expansion State
//!
//! Three fields, five transitions. Every transition consumes the current
//! state and returns the next one; nothing here reads a clock or the post
//! list. Guarding `expand` needs the grid and the posts, so the view model
//! checks it before calling [`CalendarState::expand`].

use chrono::NaiveDate;
use es_core::{Result, YearMonth};
use serde::{Deserialize, Serialize};

/// What the calendar is currently showing on top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// The "view all" modal is open for this day.
    Expanded(NaiveDate),
}

/// User interactions the calendar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CalendarEvent {
    SelectDate(NaiveDate),
    /// Signed number of months to move.
    NavigateMonth(i32),
    Expand(NaiveDate),
    CollapseExpanded,
    JumpToToday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    current_month: YearMonth,
    selected_date: NaiveDate,
    expanded_date: Option<NaiveDate>,
}

impl CalendarState {
    /// Opens on the month containing `today`, with `today` selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_month: YearMonth::containing(today),
            selected_date: today,
            expanded_date: None,
        }
    }

    pub fn current_month(&self) -> YearMonth {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn expanded_date(&self) -> Option<NaiveDate> {
        self.expanded_date
    }

    pub fn mode(&self) -> Mode {
        match self.expanded_date {
            Some(date) => Mode::Expanded(date),
            None => Mode::Browsing,
        }
    }

    pub fn select_date(self, date: NaiveDate) -> Self {
        Self {
            selected_date: date,
            ..self
        }
    }

    /// Selection and expansion are left untouched.
    pub fn navigate_month(self, delta: i32) -> Result<Self> {
        Ok(Self {
            current_month: self.current_month.shift(delta)?,
            ..self
        })
    }

    /// Unchecked: callers make sure `date` overflows its cell first.
    pub fn expand(self, date: NaiveDate) -> Self {
        Self {
            expanded_date: Some(date),
            ..self
        }
    }

    pub fn collapse_expanded(self) -> Self {
        Self {
            expanded_date: None,
            ..self
        }
    }

    pub fn jump_to_today(self, today: NaiveDate) -> Self {
        Self {
            current_month: YearMonth::containing(today),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_state_is_browsing_today() {
        let state = CalendarState::new(day(2024, 2, 10));
        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.selected_date(), day(2024, 2, 10));
        assert_eq!(state.current_month(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_select_keeps_month_and_expansion() {
        let state = CalendarState::new(day(2024, 2, 10)).expand(day(2024, 2, 12));
        let next = state.select_date(day(2024, 3, 1));
        assert_eq!(next.selected_date(), day(2024, 3, 1));
        assert_eq!(next.current_month(), state.current_month());
        assert_eq!(next.mode(), Mode::Expanded(day(2024, 2, 12)));
    }

    #[test]
    fn test_navigate_keeps_selection_and_expansion() {
        let state = CalendarState::new(day(2024, 12, 31)).expand(day(2024, 12, 30));
        let next = state.navigate_month(1).unwrap();
        assert_eq!(next.current_month(), YearMonth::new(2025, 1).unwrap());
        assert_eq!(next.selected_date(), day(2024, 12, 31));
        assert_eq!(next.expanded_date(), Some(day(2024, 12, 30)));
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let state = CalendarState::new(day(2024, 2, 10)).expand(day(2024, 2, 12));
        let once = state.collapse_expanded();
        let twice = once.collapse_expanded();
        assert_eq!(once, twice);
        assert_eq!(twice.mode(), Mode::Browsing);
    }

    #[test]
    fn test_jump_to_today_only_moves_month() {
        let state = CalendarState::new(day(2024, 2, 10))
            .navigate_month(-7)
            .unwrap()
            .select_date(day(2023, 7, 4))
            .expand(day(2023, 7, 4));
        let back = state.jump_to_today(day(2024, 2, 11));
        assert_eq!(back.current_month(), YearMonth::new(2024, 2).unwrap());
        assert_eq!(back.selected_date(), day(2023, 7, 4));
        assert_eq!(back.mode(), Mode::Expanded(day(2023, 7, 4)));
    }

    #[test]
    fn test_event_wire_format() {
        let event: CalendarEvent =
            serde_json::from_str(r#"{"type": "navigate_month", "value": -1}"#).unwrap();
        assert_eq!(event, CalendarEvent::NavigateMonth(-1));
        let collapse: CalendarEvent =
            serde_json::from_str(r#"{"type": "collapse_expanded"}"#).unwrap();
        assert_eq!(collapse, CalendarEvent::CollapseExpanded);
    }
}
