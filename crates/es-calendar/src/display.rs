//! # Inline Display Policy
//!
//! How many posts a day cell shows before it collapses the rest behind a
//! "+N more" link, and what an empty cell offers instead.

use std::fmt;

use chrono::NaiveDate;
use es_core::{CalendarCell, Post};

pub const DEFAULT_INLINE_CAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPolicy {
    inline_cap: usize,
}

impl DisplayPolicy {
    /// A cap of zero would hide every post, so it is raised to one.
    pub fn new(inline_cap: usize) -> Self {
        Self {
            inline_cap: inline_cap.max(1),
        }
    }

    pub fn inline_cap(&self) -> usize {
        self.inline_cap
    }

    /// Whether a cell with `matches` posts offers the "+N more" link.
    pub fn overflows(&self, matches: usize) -> bool {
        matches > self.inline_cap
    }

    pub fn lay_out<'a>(&self, cell: &CalendarCell, matches: Vec<&'a Post>) -> CellContent<'a> {
        if matches.is_empty() {
            return if cell.is_current_month {
                CellContent::AddPost
            } else {
                CellContent::Blank
            };
        }

        let hidden = matches.len().saturating_sub(self.inline_cap);
        let mut inline = matches;
        inline.truncate(self.inline_cap);
        let more = (hidden > 0).then_some(MoreLink {
            date: cell.date,
            hidden,
        });

        CellContent::Posts { inline, more }
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INLINE_CAP)
    }
}

/// What a single day square renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Current-month day with nothing on it.
    AddPost,
    /// Adjacent-month day with nothing on it.
    Blank,
    Posts {
        inline: Vec<&'a Post>,
        more: Option<MoreLink>,
    },
}

impl<'a> CellContent<'a> {
    pub fn inline(&self) -> &[&'a Post] {
        match self {
            Self::Posts { inline, .. } => inline,
            _ => &[],
        }
    }

    pub fn more(&self) -> Option<MoreLink> {
        match self {
            Self::Posts { more, .. } => *more,
            _ => None,
        }
    }
}

/// The "+N more" affordance; following it expands `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoreLink {
    pub date: NaiveDate,
    pub hidden: usize,
}

impl fmt::Display for MoreLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} more", self.hidden)
    }
}

/// A grid cell with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView<'a> {
    pub cell: CalendarCell,
    pub is_today: bool,
    pub is_selected: bool,
    /// All matching posts, including the hidden ones.
    pub total: usize,
    pub content: CellContent<'a>,
}
