//! # elevate-calendar
//!
//! Prints one month of the content calendar: the grid, the selected day's
//! posts and, when a day is expanded, its full list.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use es_calendar::{
    CalendarEvent, CalendarView, DayResolver, DisplayPolicy, PostFilter, SystemClock, ViewOptions,
};
use es_configs::{LogSettings, Settings};
use es_core::{Clock, ComposeTarget, PostProvider, PostStatus, YearMonth};
use es_posts_json::JsonFilePostProvider;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "elevate-calendar", version, about = "Show the Elevate Social content calendar")]
struct Args {
    /// Post listing to read (overrides source.posts_path)
    #[arg(long)]
    posts: Option<PathBuf>,

    /// Month to show, as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<YearMonth>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Day whose posts fill the detail panel
    #[arg(long)]
    select: Option<NaiveDate>,

    /// Day to open the "view all" list for; must have more posts than fit in its cell
    #[arg(long)]
    expand: Option<NaiveDate>,

    /// Only show posts for this platform (repeatable)
    #[arg(long = "platform")]
    platforms: Vec<String>,

    /// Only show posts with this status (repeatable)
    #[arg(long = "status")]
    statuses: Vec<PostStatus>,

    /// Only show posts whose content contains this text
    #[arg(long)]
    search: Option<String>,

    /// Hand off to the post composer after printing
    #[arg(long)]
    compose: bool,
}

/// Terminal stand-in for the dashboard's "create post" route.
struct TerminalComposer;

impl ComposeTarget for TerminalComposer {
    fn open_composer(&self) {
        println!("\nOpen Create Post in the dashboard to schedule something new.");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dotenv = Settings::load_dotenv();
    let settings = Settings::load().context("loading settings")?;
    if let Err(err) = init_tracing(&settings.log) {
        eprintln!("logging disabled: {err}");
    }
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let offset = settings.calendar.utc_offset()?;
    let today = args
        .today
        .unwrap_or_else(|| SystemClock::new(offset).today());

    let posts_path = args.posts.clone().unwrap_or(settings.source.posts_path.clone());
    let provider = JsonFilePostProvider::new(posts_path);
    let posts = provider.fetch_posts().await?;
    tracing::info!(count = posts.len(), %today, "📅 building calendar");

    let options = ViewOptions {
        policy: DisplayPolicy::new(settings.calendar.inline_cap),
        resolver: DayResolver::new(offset),
        week_start: settings.calendar.week_start,
    };
    let mut view = CalendarView::new(posts, today, options);
    view.set_filter(PostFilter {
        platforms: args.platforms.iter().cloned().collect(),
        statuses: args.statuses.iter().copied().collect(),
        search: args.search.clone(),
    });

    if let Some(month) = args.month {
        view.show_month(month)?;
    }
    if let Some(date) = args.select {
        view.dispatch(CalendarEvent::SelectDate(date), today)?;
    }
    if let Some(date) = args.expand {
        view.dispatch(CalendarEvent::Expand(date), today)
            .with_context(|| format!("cannot expand {date}"))?;
    }

    let text = es_ui::render_month(&view, today).context("rendering calendar")?;
    print!("{text}");

    if args.compose {
        view.request_new_post(&TerminalComposer);
    }
    Ok(())
}

fn init_tracing(log: &LogSettings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // stdout carries the calendar itself, so logs go to stderr
    if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_tracing_init_is_reported() {
        let log = LogSettings {
            level: "debug".to_string(),
            json: false,
        };
        let _ = init_tracing(&log);
        assert!(init_tracing(&log).is_err());
    }
}
