//! # Post-to-Date Classifier
//!
//! Decides which calendar day a post is shown on. Each status has its own
//! fallback chain:
//!
//! | status       | chain                                   |
//! |--------------|-----------------------------------------|
//! | scheduled    | `scheduledFor`, else nowhere            |
//! | published    | `publishedAt`, `scheduledFor`, today    |
//! | draft        | today                                   |
//! | failed/other | `scheduledFor`, today                   |
//!
//! A link that is present but unreadable stops the chain: the post is not
//! placed on any day.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use es_core::{Lifecycle, Post, Timestamp};

/// Turns instants into calendar days at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayResolver {
    offset: FixedOffset,
}

impl DayResolver {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn day_of(&self, timestamp: &Timestamp) -> Option<NaiveDate> {
        timestamp.day_at(&self.offset)
    }
}

impl Default for DayResolver {
    fn default() -> Self {
        Self::utc()
    }
}

/// Where a post lands, before it is compared with any cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    On(NaiveDate),
    /// Scheduled without a date, or the deciding date was unreadable.
    Nowhere,
}

impl Placement {
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::On(day) => Some(*day),
            Self::Nowhere => None,
        }
    }
}

/// Classification context for one render pass: "today" is fixed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    today: NaiveDate,
    resolver: DayResolver,
}

impl Classifier {
    pub fn new(today: NaiveDate, resolver: DayResolver) -> Self {
        Self { today, resolver }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn place(&self, post: &Post) -> Placement {
        let resolved = match &post.lifecycle {
            Lifecycle::Scheduled { scheduled_for } => match scheduled_for {
                Some(at) => self.resolve_link(post, at),
                None => None,
            },
            Lifecycle::Published {
                published_at,
                scheduled_for,
            } => match (published_at, scheduled_for) {
                (Some(at), _) | (None, Some(at)) => self.resolve_link(post, at),
                (None, None) => Some(self.today),
            },
            Lifecycle::Draft => Some(self.today),
            Lifecycle::Failed { scheduled_for, .. }
            | Lifecycle::Unrecognized { scheduled_for, .. } => match scheduled_for {
                Some(at) => self.resolve_link(post, at),
                None => Some(self.today),
            },
        };

        resolved.map_or(Placement::Nowhere, Placement::On)
    }

    /// Calendar day the post is shown on, if any.
    pub fn resolve(&self, post: &Post) -> Option<NaiveDate> {
        self.place(post).day()
    }

    pub fn matches(&self, post: &Post, date: NaiveDate) -> bool {
        self.resolve(post) == Some(date)
    }

    /// Posts shown on `date`, in input order.
    pub fn posts_on<'a, I>(&self, posts: I, date: NaiveDate) -> Vec<&'a Post>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        posts
            .into_iter()
            .filter(|post| self.matches(post, date))
            .collect()
    }

    fn resolve_link(&self, post: &Post, timestamp: &Timestamp) -> Option<NaiveDate> {
        let day = self.resolver.day_of(timestamp);
        if day.is_none() {
            tracing::debug!(
                post_id = %post.id,
                raw = %timestamp,
                "unreadable post date, post is left off the calendar"
            );
        }
        day
    }
}
