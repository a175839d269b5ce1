//! Client-side narrowing of the post snapshot before it reaches the grid.

use std::collections::BTreeSet;

use es_core::{Post, PostStatus};

/// Empty criteria accept everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub platforms: BTreeSet<String>,
    pub statuses: BTreeSet<PostStatus>,
    /// Case-insensitive substring of the post content.
    pub search: Option<String>,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.statuses.is_empty() && self.search_term().is_none()
    }

    pub fn accepts(&self, post: &Post) -> bool {
        let platform_ok = self.platforms.is_empty()
            || post
                .platforms
                .iter()
                .any(|p| self.platforms.iter().any(|want| want.eq_ignore_ascii_case(p)));
        let status_ok = self.statuses.is_empty() || self.statuses.contains(&post.status());
        let search_ok = match self.search_term() {
            Some(term) => post.content.to_lowercase().contains(&term),
            None => true,
        };

        platform_ok && status_ok && search_ok
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}
