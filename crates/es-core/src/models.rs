//! # Domain Models
//!
//! These structs represent the entities the calendar reads.
//! Posts are owned by the backend; the calendar only ever holds a snapshot.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque backend identifier. Numeric ids are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Engagement counters reported for a published post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub reach: u64,
}

/// A point in time as the backend reported it.
///
/// Only values carrying an offset (`At`) are shifted by the display offset.
/// Zoneless values (`Local`, `Day`) already name a wall-clock date and are
/// never shifted. Anything unreadable is kept verbatim as `Malformed` so the
/// post can still be listed while never landing on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    At(DateTime<Utc>),
    /// Date and time without an offset.
    Local(NaiveDateTime),
    Day(NaiveDate),
    Malformed(String),
}

const ZONED_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    /// Reads RFC 3339 and the looser ISO 8601 shapes the backend emits:
    /// `+hhmm` offsets, a missing seconds field, zoneless date-times and
    /// plain `YYYY-MM-DD` dates.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::At(at.with_timezone(&Utc));
        }

        // %z does not take a bare "Z"
        let zoned = match trimmed.strip_suffix(|c| c == 'Z' || c == 'z') {
            Some(rest) => format!("{rest}+0000"),
            None => trimmed.to_string(),
        };
        for format in ZONED_FORMATS {
            if let Ok(at) = DateTime::parse_from_str(&zoned, format) {
                return Self::At(at.with_timezone(&Utc));
            }
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::Local(naive);
            }
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(day) => Self::Day(day),
            Err(_) => Self::Malformed(raw.to_string()),
        }
    }

    /// Milliseconds since the Unix epoch, the other shape the backend emits.
    pub fn from_epoch_millis(millis: i64) -> Self {
        match DateTime::from_timestamp_millis(millis) {
            Some(at) => Self::At(at),
            None => Self::Malformed(millis.to_string()),
        }
    }

    fn from_wire(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(raw) => Some(Self::parse(&raw)),
            Value::Number(number) => Some(match number.as_i64() {
                Some(millis) => Self::from_epoch_millis(millis),
                None => Self::Malformed(number.to_string()),
            }),
            other => Some(Self::Malformed(other.to_string())),
        }
    }

    fn to_wire(&self) -> Value {
        Value::String(self.to_string())
    }

    /// Calendar day this timestamp falls on when viewed at `offset`.
    pub fn day_at(&self, offset: &FixedOffset) -> Option<NaiveDate> {
        match self {
            Self::At(at) => Some(at.with_timezone(offset).date_naive()),
            Self::Local(naive) => Some(naive.date()),
            Self::Day(day) => Some(*day),
            Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(at) => f.write_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Local(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Self::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            Self::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Where a post is in its publishing life. Each variant carries only the
/// dates its calendar placement depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Published {
        published_at: Option<Timestamp>,
        scheduled_for: Option<Timestamp>,
    },
    Scheduled {
        scheduled_for: Option<Timestamp>,
    },
    /// Drafts always sit on today, so they carry no date. A `scheduledFor`
    /// sent with a draft is not kept and is absent when the post is
    /// serialized again.
    Draft,
    Failed {
        scheduled_for: Option<Timestamp>,
        error: Option<String>,
    },
    /// A status this build does not know; placed like a failed post.
    Unrecognized {
        status: String,
        scheduled_for: Option<Timestamp>,
    },
}

/// Flat status tag, used for badges and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Scheduled,
    Draft,
    Failed,
    Other,
}

impl PostStatus {
    pub const ALL: [PostStatus; 5] = [
        PostStatus::Published,
        PostStatus::Scheduled,
        PostStatus::Draft,
        PostStatus::Failed,
        PostStatus::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Scheduled => "scheduled",
            Self::Draft => "draft",
            Self::Failed => "failed",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown post status {s:?}"))
    }
}

/// A social post as the backend serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPost", into = "RawPost")]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub platforms: BTreeSet<String>,
    pub media_count: u32,
    pub metrics: Option<Metrics>,
    pub lifecycle: Lifecycle,
}

impl Post {
    pub fn status(&self) -> PostStatus {
        match self.lifecycle {
            Lifecycle::Published { .. } => PostStatus::Published,
            Lifecycle::Scheduled { .. } => PostStatus::Scheduled,
            Lifecycle::Draft => PostStatus::Draft,
            Lifecycle::Failed { .. } => PostStatus::Failed,
            Lifecycle::Unrecognized { .. } => PostStatus::Other,
        }
    }

    /// Status string exactly as reported, including unknown ones.
    pub fn status_label(&self) -> &str {
        match &self.lifecycle {
            Lifecycle::Unrecognized { status, .. } => status,
            _ => self.status().as_str(),
        }
    }

    /// Failure message; only failed posts carry one.
    pub fn error(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Failed { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn scheduled_for(&self) -> Option<&Timestamp> {
        match &self.lifecycle {
            Lifecycle::Published { scheduled_for, .. }
            | Lifecycle::Scheduled { scheduled_for }
            | Lifecycle::Failed { scheduled_for, .. }
            | Lifecycle::Unrecognized { scheduled_for, .. } => scheduled_for.as_ref(),
            Lifecycle::Draft => None,
        }
    }

    pub fn published_at(&self) -> Option<&Timestamp> {
        match &self.lifecycle {
            Lifecycle::Published { published_at, .. } => published_at.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Wire shape of a post: flat, camelCase, every date optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    id: RawId,
    #[serde(default)]
    content: String,
    #[serde(default)]
    platforms: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheduled_for: Option<Value>,
    #[serde(default)]
    status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    published_at: Option<Value>,
    #[serde(default)]
    media_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        let scheduled_for = raw.scheduled_for.and_then(Timestamp::from_wire);
        let lifecycle = match raw.status.as_str() {
            "published" => Lifecycle::Published {
                published_at: raw.published_at.and_then(Timestamp::from_wire),
                scheduled_for,
            },
            "scheduled" => Lifecycle::Scheduled { scheduled_for },
            "draft" => Lifecycle::Draft,
            "failed" => Lifecycle::Failed {
                scheduled_for,
                error: raw.error,
            },
            _ => Lifecycle::Unrecognized {
                status: raw.status,
                scheduled_for,
            },
        };
        let id = match raw.id {
            RawId::Text(text) => PostId(text),
            RawId::Number(number) => PostId(number.to_string()),
        };

        Post {
            id,
            content: raw.content,
            platforms: raw.platforms,
            media_count: raw.media_count,
            metrics: raw.metrics,
            lifecycle,
        }
    }
}

impl From<Post> for RawPost {
    fn from(post: Post) -> Self {
        let status = post.status_label().to_string();
        let (scheduled_for, published_at, error) = match post.lifecycle {
            Lifecycle::Published {
                published_at,
                scheduled_for,
            } => (scheduled_for, published_at, None),
            Lifecycle::Scheduled { scheduled_for }
            | Lifecycle::Unrecognized { scheduled_for, .. } => (scheduled_for, None, None),
            Lifecycle::Draft => (None, None, None),
            Lifecycle::Failed {
                scheduled_for,
                error,
            } => (scheduled_for, None, error),
        };

        RawPost {
            id: RawId::Text(post.id.0),
            content: post.content,
            platforms: post.platforms,
            scheduled_for: scheduled_for.as_ref().map(Timestamp::to_wire),
            status,
            published_at: published_at.as_ref().map(Timestamp::to_wire),
            media_count: post.media_count,
            metrics: post.metrics,
            error,
        }
    }
}

/// One day square of the month grid. Recomputed, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// First column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0..7) of `weekday` in a grid starting on `self`.
    pub fn column_of(&self, weekday: chrono::Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(format!("unknown week start {other:?}")),
        }
    }
}
