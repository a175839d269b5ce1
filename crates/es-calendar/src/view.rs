//! # Calendar View Model
//!
//! Owns the post snapshot and the [`CalendarState`], and derives everything a
//! renderer needs from them. Nothing derived is cached: every call rebuilds
//! the grid and reclassifies the posts against the `today` it is handed.

use chrono::NaiveDate;
use es_core::{CalendarError, ComposeTarget, Post, Result, WeekStart, YearMonth};
use tracing::{debug, instrument};

use crate::classify::{Classifier, DayResolver};
use crate::display::{CellView, DisplayPolicy};
use crate::filter::PostFilter;
use crate::grid::{build_month_grid_from, MonthGrid};
use crate::state::{CalendarEvent, CalendarState, Mode};
use crate::summary::MonthSummary;

/// Knobs fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub policy: DisplayPolicy,
    pub resolver: DayResolver,
    pub week_start: WeekStart,
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    posts: Vec<Post>,
    state: CalendarState,
    filter: PostFilter,
    options: ViewOptions,
}

impl CalendarView {
    pub fn new(posts: Vec<Post>, today: NaiveDate, options: ViewOptions) -> Self {
        Self {
            posts,
            state: CalendarState::new(today),
            filter: PostFilter::default(),
            options,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Swaps in a freshly fetched snapshot. Month, selection and expansion stay.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        debug!(count = posts.len(), "post snapshot replaced");
        self.posts = posts;
    }

    pub fn filter(&self) -> &PostFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: PostFilter) {
        self.filter = filter;
    }

    pub fn grid(&self) -> MonthGrid {
        build_month_grid_from(self.state.current_month(), self.options.week_start)
    }

    pub fn classifier(&self, today: NaiveDate) -> Classifier {
        Classifier::new(today, self.options.resolver)
    }

    fn visible_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|post| self.filter.accepts(post))
    }

    /// Every post placed on `date`, in snapshot order.
    pub fn posts_on(&self, date: NaiveDate, today: NaiveDate) -> Vec<&Post> {
        self.classifier(today).posts_on(self.visible_posts(), date)
    }

    /// The 42 cells of the current month, laid out per the display policy.
    pub fn cells(&self, today: NaiveDate) -> Vec<CellView<'_>> {
        let classifier = self.classifier(today);
        let selected = self.state.selected_date();

        self.grid()
            .cells()
            .iter()
            .map(|cell| {
                let matches = classifier.posts_on(self.visible_posts(), cell.date);
                CellView {
                    cell: *cell,
                    is_today: cell.date == today,
                    is_selected: cell.date == selected,
                    total: matches.len(),
                    content: self.options.policy.lay_out(cell, matches),
                }
            })
            .collect()
    }

    /// Lower detail panel: everything on the selected day.
    pub fn selected_posts(&self, today: NaiveDate) -> Vec<&Post> {
        self.posts_on(self.state.selected_date(), today)
    }

    /// Modal contents while a day is expanded.
    pub fn expanded_posts(&self, today: NaiveDate) -> Option<Vec<&Post>> {
        self.state
            .expanded_date()
            .map(|date| self.posts_on(date, today))
    }

    pub fn summary(&self, today: NaiveDate) -> MonthSummary {
        MonthSummary::collect(
            self.visible_posts(),
            self.state.current_month(),
            &self.classifier(today),
        )
    }

    /// Applies one interaction. On error the state is left as it was.
    #[instrument(level = "debug", skip(self), fields(month = %self.state.current_month()))]
    pub fn dispatch(&mut self, event: CalendarEvent, today: NaiveDate) -> Result<()> {
        let next = match event {
            CalendarEvent::SelectDate(date) => self.state.select_date(date),
            CalendarEvent::NavigateMonth(delta) => self.state.navigate_month(delta)?,
            CalendarEvent::Expand(date) => {
                self.check_expandable(date, today)?;
                self.state.expand(date)
            }
            CalendarEvent::CollapseExpanded => self.state.collapse_expanded(),
            CalendarEvent::JumpToToday => self.state.jump_to_today(today),
        };

        debug!(?next, "calendar state updated");
        self.state = next;
        Ok(())
    }

    /// Navigates straight to `month`; selection and expansion stay.
    pub fn show_month(&mut self, month: YearMonth) -> Result<()> {
        let current = self.state.current_month();
        let delta = (month.year() - current.year()) * 12 + month.month() as i32
            - current.month() as i32;
        self.state = self.state.navigate_month(delta)?;
        Ok(())
    }

    fn check_expandable(&self, date: NaiveDate, today: NaiveDate) -> Result<()> {
        if !self.grid().contains(date) {
            return Err(CalendarError::DateOutsideGrid(date));
        }
        let matches = self.posts_on(date, today).len();
        if !self.options.policy.overflows(matches) {
            return Err(CalendarError::NothingToExpand {
                date,
                matches,
                cap: self.options.policy.inline_cap(),
            });
        }
        Ok(())
    }

    /// The "create/schedule post" affordance. Available from any cell.
    pub fn request_new_post(&self, target: &dyn ComposeTarget) {
        debug!("handing off to composer");
        target.open_composer();
    }
}
