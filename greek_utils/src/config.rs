//! Settings file support.
//!
//! This module reads the day window and the default work week from a TOML
//! file:
//!
//! ```toml
//! [day_window]
//! start = "06:00"
//! end = "22:00"
//!
//! [calendar]
//! default_weekdays = "ΔΕΥΤΕΡΑ-ΠΑΡΑΣΚΕΥΗ"
//! ```
//!
//! Every section and key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::{month_specific_days, WeekdaySet, DEFAULT_WEEKDAYS};
use crate::error::{Error, Result};
use crate::time::{daynight_hours_in, parse_time_of_day, time_range, DayNightSplit, DayWindow};

/// Settings from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub day_window: DayWindowSettings,
    #[serde(default)]
    pub calendar: CalendarSettings,
}

/// Day window settings, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindowSettings {
    #[serde(default = "default_day_start")]
    pub start: String,
    #[serde(default = "default_day_end")]
    pub end: String,
}

/// Calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default = "default_weekdays")]
    pub default_weekdays: String,
}

fn default_day_start() -> String {
    "06:00".to_string()
}

fn default_day_end() -> String {
    "22:00".to_string()
}

fn default_weekdays() -> String {
    DEFAULT_WEEKDAYS.to_string()
}

impl Default for DayWindowSettings {
    fn default() -> Self {
        Self {
            start: default_day_start(),
            end: default_day_end(),
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            default_weekdays: default_weekdays(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// * `Ok(Settings)` if successful
    /// * `Err(Error::Config)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read settings file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default location.
    ///
    /// Searches for `greek_utils.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the built-in defaults when none exists.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("greek_utils.toml"),
            PathBuf::from("config/greek_utils.toml"),
            PathBuf::from("../greek_utils.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                log::info!("Loading settings from {}", path.display());
                return Self::from_file(path);
            }
        }

        log::debug!("No greek_utils.toml found, using default settings");
        Ok(Self::default())
    }

    /// Validate every field.
    pub fn validate(&self) -> Result<()> {
        self.day_window()?;
        self.default_weekdays()?;
        Ok(())
    }

    /// The configured day window.
    pub fn day_window(&self) -> Result<DayWindow> {
        let parse = |label: &str, value: &str| {
            parse_time_of_day(value.trim()).ok_or_else(|| {
                Error::Config(format!("Invalid day window {}: {:?}", label, value))
            })
        };
        let start = parse("start", &self.day_window.start)?;
        let end = parse("end", &self.day_window.end)?;
        DayWindow::new(start, end)
    }

    /// The configured default work week.
    pub fn default_weekdays(&self) -> Result<WeekdaySet> {
        WeekdaySet::parse_greek(&self.calendar.default_weekdays).map_err(|e| {
            Error::Config(format!("Invalid default_weekdays: {}", e))
        })
    }

    /// Day/night split of a compact shift string using the configured window.
    pub fn day_night_hours_from_range(&self, range: &str) -> Result<DayNightSplit> {
        let (from, to) = time_range(range)?;
        daynight_hours_in(&self.day_window()?, from, to)
    }

    /// Count of configured work-week days in a month.
    pub fn month_workdays(&self, year: i32, month: u32) -> Result<u32> {
        month_specific_days(year, month, &self.default_weekdays()?)
    }
}
