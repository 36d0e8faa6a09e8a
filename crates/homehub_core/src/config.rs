//! Dashboard runtime configuration.
//!
//! # Responsibility
//! - Hold the few knobs the host passes in at startup.
//! - Parse textual config values (CLI flags, FFI strings) into typed form.
//!
//! # Invariants
//! - `DashboardConfig::default()` is always valid.
//! - Week boundaries never depend on host locale; `week_start` decides.

use crate::logging::default_log_level;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// First day of the week used for the expense "week" period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Sunday => "sunday",
        }
    }

    fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Most recent week-start day on or before `today`.
    pub fn start_of_week(self, today: NaiveDate) -> NaiveDate {
        let offset = (today.weekday().num_days_from_monday() + 7
            - self.weekday().num_days_from_monday())
            % 7;
        today
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for WeekStart {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "sunday" | "sun" => Ok(Self::Sunday),
            other => Err(ConfigError::UnsupportedWeekStart(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedWeekStart(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedWeekStart(value) => write!(
                f,
                "unsupported week start `{value}`; expected monday|sunday"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Startup configuration for one dashboard process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logs.
    pub log_dir: Option<PathBuf>,
    pub week_start: WeekStart,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            week_start: WeekStart::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig, WeekStart};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_of_week_follows_convention() {
        // 2025-03-12 is a Wednesday.
        let today = date(2025, 3, 12);
        assert_eq!(WeekStart::Monday.start_of_week(today), date(2025, 3, 10));
        assert_eq!(WeekStart::Sunday.start_of_week(today), date(2025, 3, 9));
    }

    #[test]
    fn start_of_week_is_identity_on_start_day() {
        assert_eq!(WeekStart::Monday.start_of_week(date(2025, 3, 10)), date(2025, 3, 10));
        assert_eq!(WeekStart::Sunday.start_of_week(date(2025, 3, 9)), date(2025, 3, 9));
        assert_eq!(WeekStart::Monday.start_of_week(date(2025, 3, 9)), date(2025, 3, 3));
    }

    #[test]
    fn week_start_parses_case_insensitively() {
        assert_eq!(" Sunday ".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert_eq!("MON".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert_eq!(
            "friday".parse::<WeekStart>().unwrap_err(),
            ConfigError::UnsupportedWeekStart("friday".to_string())
        );
    }

    #[test]
    fn default_config_uses_monday_and_no_log_dir() {
        let config = DashboardConfig::default();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert!(config.log_dir.is_none());
        assert!(!config.log_level.is_empty());
    }
}
