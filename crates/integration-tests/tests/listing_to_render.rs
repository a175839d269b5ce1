use std::io::Write;

use chrono::FixedOffset;
use es_calendar::{CalendarEvent, CalendarView, DayResolver, ViewOptions};
use es_core::PostProvider;
use es_posts_json::JsonFilePostProvider;
use integration_tests::day;

fn tokyo_options() -> ViewOptions {
    ViewOptions {
        resolver: DayResolver::new(FixedOffset::east_opt(9 * 3600).unwrap()),
        ..ViewOptions::default()
    }
}

async fn fetch_listing() -> Vec<es_core::Post> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let listing = serde_json::json!([
        {"id": 1, "content": "Teaser", "platforms": ["facebook"], "status": "scheduled",
         "scheduledFor": "2024-03-14T09:00Z"},
        {"id": 2, "content": "Countdown", "platforms": ["instagram"], "status": "scheduled",
         "scheduledFor": "2024-03-14T10:00:00+0000"},
        {"id": 3, "content": "Late night reminder", "platforms": ["facebook"], "status": "scheduled",
         "scheduledFor": "2024-03-14T23:30:00"},
        {"id": 4, "content": "Launch", "platforms": ["facebook", "instagram"], "status": "published",
         "publishedAt": "2024-03-14T12:00:00Z", "mediaCount": 2,
         "metrics": {"likes": 40, "comments": 5, "shares": 2, "reach": 1200}},
        {"id": 5, "content": "Oops", "platforms": ["facebook"], "status": "failed",
         "scheduledFor": "2024-03-14", "error": "Token expired"},
        {"id": 6, "content": "Ideas", "status": "draft"}
    ]);
    write!(file, "{listing}").unwrap();

    JsonFilePostProvider::new(file.path())
        .fetch_posts()
        .await
        .unwrap()
}

#[tokio::test]
async fn fetched_listing_renders_overflow_and_detail() {
    let today = day(2024, 3, 10);
    let busy = day(2024, 3, 14);
    let mut view = CalendarView::new(fetch_listing().await, today, tokyo_options());

    {
        let cells = view.cells(today);
        let cell = cells.iter().find(|c| c.cell.date == busy).unwrap();
        assert_eq!(cell.total, 5);
        assert_eq!(cell.content.more().unwrap().to_string(), "+2 more");
    }

    view.dispatch(CalendarEvent::SelectDate(busy), today).unwrap();
    view.dispatch(CalendarEvent::Expand(busy), today).unwrap();
    let text = es_ui::render_month(&view, today).unwrap();

    assert!(text.starts_with("March 2024\n"));
    assert!(text.contains("6 posts: 1 published, 3 scheduled, 1 draft, 1 failed"));
    assert!(text.contains("[10] D"));
    assert!(text.contains("*14  SSS+2"));
    assert!(text.contains("Posts for Thursday, March 14, 2024"));
    assert!(text.contains("[scheduled] facebook: Late night reminder"));
    assert!(text.contains("[published] facebook,instagram: Launch (2 media) likes 40"));
    assert!(text.contains("[failed] facebook: Oops error: Token expired"));
    assert!(text.contains("All posts on Thursday, March 14, 2024 (5)"));
    assert!(!text.contains("Ideas"));
}

#[tokio::test]
async fn collapsing_drops_the_expanded_list() {
    let today = day(2024, 3, 10);
    let busy = day(2024, 3, 14);
    let mut view = CalendarView::new(fetch_listing().await, today, tokyo_options());

    view.dispatch(CalendarEvent::Expand(busy), today).unwrap();
    view.dispatch(CalendarEvent::CollapseExpanded, today).unwrap();
    let text = es_ui::render_month(&view, today).unwrap();

    assert!(!text.contains("All posts on"));
    assert!(text.contains("Posts for Sunday, March 10, 2024"));
    assert!(text.contains("[draft] Ideas"));
}
