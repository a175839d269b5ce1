//! # es-configs
//!
//! Layered settings: built-in defaults, then an optional `elevate.toml`,
//! then `ELEVATE__SECTION__KEY` environment variables (a `.env` file is
//! loaded into the environment first).

use std::path::PathBuf;

use chrono::FixedOffset;
use config::{Config, Environment, File, FileFormat};
use es_core::WeekStart;
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "ELEVATE";
pub const CONFIG_FILE: &str = "elevate";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub calendar: CalendarSettings,
    pub source: SourceSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarSettings {
    /// Posts shown per cell before "+N more".
    pub inline_cap: usize,
    pub week_start: WeekStart,
    /// Offset used to turn post timestamps into calendar days.
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceSettings {
    /// JSON file holding the post snapshot.
    pub posts_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// Fallback filter when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Loads `.env` into the process environment, returning its path if one
    /// was found. Call before [`Settings::load`] and before logging is set up,
    /// since `RUST_LOG` may come from it.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    /// Reads `elevate.toml` (if present) and the environment.
    pub fn load() -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::finish(config)
    }

    /// Defaults overlaid with a TOML document; ignores files and environment.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.inline_cap", 3_i64)?
            .set_default("calendar.week_start", "sunday")?
            .set_default("calendar.utc_offset_minutes", 0_i64)?
            .set_default("source.posts_path", "posts.json")?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?)
    }

    fn finish(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.calendar.inline_cap == 0 {
            return Err(ConfigError::Invalid {
                key: "calendar.inline_cap",
                reason: "must be at least 1".into(),
            });
        }
        self.calendar.utc_offset()?;
        if self.source.posts_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "source.posts_path",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

impl CalendarSettings {
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        let invalid = || ConfigError::Invalid {
            key: "calendar.utc_offset_minutes",
            reason: format!("{} is not within a day of UTC", self.utc_offset_minutes),
        };
        let seconds = self.utc_offset_minutes.checked_mul(60).ok_or_else(invalid)?;
        FixedOffset::east_opt(seconds).ok_or_else(invalid)
    }
}
