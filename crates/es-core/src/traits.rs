//! # Core Traits (Ports)
//!
//! The calendar talks to the rest of the dashboard only through these.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::Post;

/// Source of the post snapshot shown on the calendar.
///
/// Implementations own fetching; the calendar does no caching, paging or retry.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait PostProvider: Send + Sync {
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>>;
}

/// Where the "create/schedule post" affordance hands off to.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait ComposeTarget: Send + Sync {
    fn open_composer(&self);
}

/// The only way calendar code learns what "today" is.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
