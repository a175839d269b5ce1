//! Header counters for the displayed month.

use std::collections::BTreeMap;

use es_core::{Post, PostStatus, YearMonth};
use serde::Serialize;

use crate::classify::Classifier;

/// Per-status counts and engagement totals for posts placed inside a month.
/// Posts shown only on adjacent-month cells are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub by_status: BTreeMap<PostStatus, usize>,
    pub total: usize,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub reach: u64,
}

impl MonthSummary {
    pub fn collect<'a, I>(posts: I, month: YearMonth, classifier: &Classifier) -> Self
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut summary = Self::default();
        for post in posts {
            let Some(day) = classifier.resolve(post) else {
                continue;
            };
            if !month.contains(day) {
                continue;
            }
            *summary.by_status.entry(post.status()).or_default() += 1;
            summary.total += 1;
            if let Some(metrics) = post.metrics {
                summary.likes = summary.likes.saturating_add(metrics.likes);
                summary.comments = summary.comments.saturating_add(metrics.comments);
                summary.shares = summary.shares.saturating_add(metrics.shares);
                summary.reach = summary.reach.saturating_add(metrics.reach);
            }
        }
        summary
    }

    pub fn count(&self, status: PostStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
