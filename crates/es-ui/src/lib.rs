//! Plain-text rendering of the calendar view, used by the CLI.

use askama::Template;
use chrono::{Datelike, NaiveDate, Weekday};
use es_calendar::{CalendarView, CellContent, CellView, MonthSummary};
use es_core::{Post, PostStatus, WeekStart};

const CELL_WIDTH: usize = 11;
const PREVIEW_CHARS: usize = 60;

#[derive(Template)]
#[template(path = "month.txt")]
pub struct MonthTemplate {
    pub title: String,
    pub summary: String,
    pub header: String,
    pub weeks: Vec<String>,
    pub cap: usize,
    pub detail_title: String,
    pub detail_lines: Vec<String>,
    pub expanded_title: String,
    pub expanded_lines: Vec<String>,
}

impl MonthTemplate {
    pub fn from_view(view: &CalendarView, today: NaiveDate) -> Self {
        let state = view.state();
        let cells = view.cells(today);
        let weeks = cells
            .chunks(7)
            .map(|week| week.iter().map(cell_label).collect::<String>().trim_end().to_string())
            .collect();

        let selected = state.selected_date();
        let detail_lines = view.selected_posts(today).into_iter().map(post_line).collect();

        let (expanded_title, expanded_lines) = match view.expanded_posts(today) {
            Some(posts) => (
                format!(
                    "All posts on {} ({})",
                    long_date(state.expanded_date().unwrap_or(selected)),
                    posts.len()
                ),
                posts.into_iter().map(post_line).collect(),
            ),
            None => (String::new(), Vec::new()),
        };

        Self {
            title: state.current_month().title(),
            summary: summary_line(&view.summary(today)),
            header: header(view.options().week_start),
            weeks,
            cap: view.options().policy.inline_cap(),
            detail_title: format!("Posts for {}", long_date(selected)),
            detail_lines,
            expanded_title,
            expanded_lines,
        }
    }
}

pub fn render_month(view: &CalendarView, today: NaiveDate) -> Result<String, askama::Error> {
    MonthTemplate::from_view(view, today).render()
}

fn header(week_start: WeekStart) -> String {
    let first = match week_start {
        WeekStart::Sunday => Weekday::Sun,
        WeekStart::Monday => Weekday::Mon,
    };
    std::iter::successors(Some(first), |day| Some(day.succ()))
        .take(7)
        .map(|day| format!("{:<width$}", day.to_string(), width = CELL_WIDTH))
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn cell_label(view: &CellView<'_>) -> String {
    let day = view.cell.date.day();
    let date = if view.is_today {
        format!("[{day:02}]")
    } else if view.is_selected {
        format!("*{day:02} ")
    } else if !view.cell.is_current_month {
        format!("({day:02})")
    } else {
        format!(" {day:02} ")
    };

    let content = match &view.content {
        CellContent::AddPost => " .".to_string(),
        CellContent::Blank => String::new(),
        CellContent::Posts { inline, more } => {
            let badges: String = inline.iter().map(|post| status_badge(post.status())).collect();
            match more {
                Some(link) => format!(" {badges}+{}", link.hidden),
                None => format!(" {badges}"),
            }
        }
    };

    format!("{:<width$}", format!("{date}{content}"), width = CELL_WIDTH)
}

fn status_badge(status: PostStatus) -> char {
    match status {
        PostStatus::Published => 'P',
        PostStatus::Scheduled => 'S',
        PostStatus::Draft => 'D',
        PostStatus::Failed => 'F',
        PostStatus::Other => '?',
    }
}

fn post_line(post: &Post) -> String {
    let mut line = format!("[{}] ", post.status_label());
    if !post.platforms.is_empty() {
        let platforms: Vec<_> = post.platforms.iter().map(String::as_str).collect();
        line.push_str(&platforms.join(","));
        line.push_str(": ");
    }
    line.push_str(&preview(&post.content));
    if post.media_count > 0 {
        line.push_str(&format!(" ({} media)", post.media_count));
    }
    if let Some(metrics) = post.metrics {
        line.push_str(&format!(
            " likes {} comments {} shares {} reach {}",
            metrics.likes, metrics.comments, metrics.shares, metrics.reach
        ));
    }
    if let Some(error) = post.error() {
        line.push_str(&format!(" error: {error}"));
    }
    line
}

fn preview(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{}...", cut.trim_end())
}

fn summary_line(summary: &MonthSummary) -> String {
    let counts: Vec<String> = PostStatus::ALL
        .into_iter()
        .filter_map(|status| match summary.count(status) {
            0 => None,
            n => Some(format!("{n} {status}")),
        })
        .collect();
    if counts.is_empty() {
        return "No posts this month".to_string();
    }
    format!(
        "{} posts: {} | reach {} | likes {}",
        summary.total,
        counts.join(", "),
        summary.reach,
        summary.likes
    )
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_calendar::{CalendarEvent, ViewOptions};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view(today: NaiveDate) -> CalendarView {
        let posts: Vec<Post> = serde_json::from_value(serde_json::json!([
            {"id": 1, "status": "scheduled", "scheduledFor": "2024-02-14T10:00:00Z", "content": "one", "platforms": ["facebook"]},
            {"id": 2, "status": "scheduled", "scheduledFor": "2024-02-14T11:00:00Z", "content": "two"},
            {"id": 3, "status": "published", "publishedAt": "2024-02-14T12:00:00Z", "content": "three",
             "metrics": {"likes": 4, "comments": 0, "shares": 0, "reach": 90}},
            {"id": 4, "status": "failed", "scheduledFor": "2024-02-14T13:00:00Z", "content": "four", "error": "token expired"},
            {"id": 5, "status": "draft", "content": "five"}
        ]))
        .unwrap();
        CalendarView::new(posts, today, ViewOptions::default())
    }

    #[test]
    fn test_renders_overflow_and_detail() {
        let today = day(2024, 2, 14);
        let mut view = view(today);
        view.dispatch(CalendarEvent::Expand(today), today).unwrap();
        let text = render_month(&view, today).unwrap();

        assert!(text.starts_with("February 2024\n"));
        assert!(text.contains("Sun        Mon"));
        assert!(text.contains("[14] SSP+2"));
        assert!(text.contains("(28)"));
        assert!(text.contains("Posts for Wednesday, February 14, 2024"));
        assert!(text.contains("[failed] four error: token expired"));
        assert!(text.contains("All posts on Wednesday, February 14, 2024 (5)"));
        assert!(text.contains("5 posts: 1 published, 2 scheduled, 1 draft, 1 failed"));
    }

    #[test]
    fn test_empty_month() {
        let today = day(2024, 2, 14);
        let empty = CalendarView::new(Vec::new(), today, ViewOptions::default());
        let text = render_month(&empty, today).unwrap();
        assert!(text.contains("No posts this month"));
        assert!(text.contains("[14] ."));
        assert!(text.contains("nothing planned"));
        assert!(!text.contains("All posts on"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "word ".repeat(40);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= PREVIEW_CHARS);
    }
}
