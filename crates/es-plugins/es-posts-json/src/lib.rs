//! # es-posts-json
//!
//! File-backed and in-memory implementations of `PostProvider`.
//! Reads the same JSON the backend's post listing returns: either a bare
//! array of posts or an object with a `posts` array.

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use es_core::models::Post;
use es_core::traits::PostProvider;
use serde::Deserialize;
use tokio::fs;

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Bare(Vec<Post>),
    Wrapped { posts: Vec<Post> },
}

impl Listing {
    fn into_posts(self) -> Vec<Post> {
        match self {
            Self::Bare(posts) | Self::Wrapped { posts } => posts,
        }
    }
}

/// Parses a post listing document.
pub fn parse_listing(json: &str) -> anyhow::Result<Vec<Post>> {
    let listing: Listing =
        serde_json::from_str(json).context("expected a JSON array of posts or {\"posts\": [...]}")?;
    let posts = listing.into_posts();
    warn_unreadable_dates(&posts);
    Ok(posts)
}

/// Posts with unreadable dates are kept, but may never reach a cell.
fn warn_unreadable_dates(posts: &[Post]) {
    for post in posts {
        let dates = [
            ("scheduledFor", post.scheduled_for()),
            ("publishedAt", post.published_at()),
        ];
        for (field, timestamp) in dates {
            if let Some(timestamp) = timestamp.filter(|timestamp| timestamp.is_malformed()) {
                tracing::warn!(post_id = %post.id, field, raw = %timestamp, "unreadable post date");
            }
        }
    }
}

pub struct JsonFilePostProvider {
    /// Path to the listing (e.g., "./data/posts.json")
    path: PathBuf,
}

impl JsonFilePostProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostProvider for JsonFilePostProvider {
    /// Re-reads the file on every call; there is no caching.
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>> {
        let raw = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        let posts = parse_listing(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

/// Serves a fixed snapshot. Handy for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPostProvider {
    posts: Vec<Post>,
}

impl StaticPostProvider {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostProvider for StaticPostProvider {
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}
