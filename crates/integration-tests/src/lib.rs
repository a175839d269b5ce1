//! Shared fixtures for the cross-crate tests.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use es_core::{Lifecycle, Post, PostId, Timestamp};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn post(id: &str, lifecycle: Lifecycle) -> Post {
    Post {
        id: PostId::from(id),
        content: format!("post {id}"),
        platforms: BTreeSet::from(["facebook".to_string()]),
        media_count: 0,
        metrics: None,
        lifecycle,
    }
}

pub fn scheduled(id: &str, at: &str) -> Post {
    post(
        id,
        Lifecycle::Scheduled {
            scheduled_for: Some(Timestamp::parse(at)),
        },
    )
}

pub fn draft(id: &str) -> Post {
    post(id, Lifecycle::Draft)
}

pub fn ids(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|p| p.id.0.clone()).collect()
}
