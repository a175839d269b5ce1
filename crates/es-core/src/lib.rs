//! es-core
//!
//! Domain types and port definitions for the Elevate Social content calendar.

pub mod error;
pub mod models;
pub mod month;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use month::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_published_post() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "content": "Launch day!",
            "platforms": ["facebook", "instagram"],
            "status": "published",
            "publishedAt": "2024-02-14T09:30:00Z",
            "scheduledFor": "2024-02-13T09:30:00Z",
            "mediaCount": 2,
            "metrics": { "likes": 10, "comments": 2, "shares": 1, "reach": 400 }
        }))
        .unwrap();

        assert_eq!(post.id, PostId::from("p1"));
        assert_eq!(post.status(), PostStatus::Published);
        assert_eq!(post.media_count, 2);
        assert_eq!(post.platforms.len(), 2);
        assert_eq!(
            post.published_at(),
            Some(&Timestamp::At(
                Utc.with_ymd_and_hms(2024, 2, 14, 9, 30, 0).unwrap()
            ))
        );
        assert_eq!(post.metrics.unwrap().reach, 400);
    }

    #[test]
    fn test_numeric_id_and_missing_fields() {
        let post: Post = serde_json::from_str(r#"{"id": 42, "status": "draft"}"#).unwrap();
        assert_eq!(post.id.0, "42");
        assert_eq!(post.lifecycle, Lifecycle::Draft);
        assert!(post.platforms.is_empty());
        assert_eq!(post.media_count, 0);
    }

    #[test]
    fn test_error_only_kept_for_failed_posts() {
        let failed: Post = serde_json::from_str(
            r#"{"id": "a", "status": "failed", "error": "token expired"}"#,
        )
        .unwrap();
        assert_eq!(failed.error(), Some("token expired"));

        let scheduled: Post = serde_json::from_str(
            r#"{"id": "b", "status": "scheduled", "error": "stale"}"#,
        )
        .unwrap();
        assert_eq!(scheduled.error(), None);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let post: Post =
            serde_json::from_str(r#"{"id": "c", "status": "archived"}"#).unwrap();
        assert_eq!(post.status(), PostStatus::Other);
        assert_eq!(post.status_label(), "archived");

        let wire = serde_json::to_value(&post).unwrap();
        assert_eq!(wire["status"], "archived");
    }

    #[test]
    fn test_timestamp_shapes() {
        assert_eq!(Timestamp::parse("2025-01-01"), Timestamp::Day(day(2025, 1, 1)));
        assert_eq!(
            Timestamp::parse("2025-01-01T23:30:00"),
            Timestamp::Local(day(2025, 1, 1).and_hms_opt(23, 30, 0).unwrap())
        );
        assert_eq!(
            Timestamp::parse("2025-01-01 23:30"),
            Timestamp::Local(day(2025, 1, 1).and_hms_opt(23, 30, 0).unwrap())
        );
        assert!(Timestamp::parse("next tuesday").is_malformed());
        assert_eq!(
            Timestamp::from_epoch_millis(0),
            Timestamp::At(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_day_respects_offset() {
        let late = Timestamp::parse("2025-01-01T23:30:00Z");
        let utc = FixedOffset::east_opt(0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(late.day_at(&utc), Some(day(2025, 1, 1)));
        assert_eq!(late.day_at(&tokyo), Some(day(2025, 1, 2)));

        // date-only values never shift
        let plain = Timestamp::parse("2025-01-01");
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();
        assert_eq!(plain.day_at(&honolulu), Some(day(2025, 1, 1)));
    }

    #[test]
    fn test_loose_iso_offsets_are_instants() {
        let ten_utc = Timestamp::At(Utc.with_ymd_and_hms(2024, 6, 14, 10, 0, 0).unwrap());
        assert_eq!(Timestamp::parse("2024-06-14T10:00:00+0000"), ten_utc);
        assert_eq!(Timestamp::parse("2024-06-14T10:00Z"), ten_utc);
        assert_eq!(Timestamp::parse("2024-06-14T19:00+09:00"), ten_utc);
        assert_eq!(
            Timestamp::parse("2024-06-14 12:00:00+0200"),
            ten_utc
        );
    }

    #[test]
    fn test_zoneless_datetime_never_shifts() {
        let naive = Timestamp::parse("2024-06-14T23:30:00");
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();
        assert_eq!(naive.day_at(&tokyo), Some(day(2024, 6, 14)));
        assert_eq!(naive.day_at(&honolulu), Some(day(2024, 6, 14)));

        // written back without an offset, so it reads the same way again
        assert_eq!(naive.to_string(), "2024-06-14T23:30:00.000");
        assert_eq!(Timestamp::parse(&naive.to_string()), naive);
    }

    #[test]
    fn test_draft_schedule_is_not_kept() {
        let post: Post = serde_json::from_str(
            r#"{"id": "e", "status": "draft", "scheduledFor": "2024-06-14T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.scheduled_for(), None);

        let wire = serde_json::to_value(&post).unwrap();
        assert_eq!(wire["status"], "draft");
        assert!(wire.get("scheduledFor").is_none());
    }

    #[test]
    fn test_non_string_timestamp_is_malformed() {
        let post: Post = serde_json::from_str(
            r#"{"id": "d", "status": "scheduled", "scheduledFor": true}"#,
        )
        .unwrap();
        assert!(post.scheduled_for().unwrap().is_malformed());
    }
}
