//! Global tourcal configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::calendar::HourRange;
use crate::error::{TourCalError, TourCalResult};

static DEFAULT_BOOKINGS_FILE: &str = "~/.local/share/tourcal/bookings.json";
static DEFAULT_STATE_FILE: &str = "~/.local/share/tourcal/state.json";
static DEFAULT_EXPORT_DIR: &str = "~/calendar/tours";
static DEFAULT_TIMEZONE: &str = "Europe/Istanbul";
static DEFAULT_ADMIN_PASSWORD: &str = "admin2025";

fn default_bookings_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOKINGS_FILE)
}

fn default_state_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_FILE)
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

fn default_day_start_hour() -> u32 {
    HourRange::default().first()
}

fn default_day_end_hour() -> u32 {
    HourRange::default().last()
}

fn default_tour_duration_hours() -> u32 {
    2
}

/// Configuration at ~/.config/tourcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_bookings_file")]
    pub bookings_file: PathBuf,

    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// First hour shown in the day view
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    /// Last hour shown in the day view (inclusive)
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,

    /// Length of exported calendar events
    #[serde(default = "default_tour_duration_hours")]
    pub tour_duration_hours: u32,

    /// IANA zone the venue's wall-clock times are in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Password accepted by `tourcal login`
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bookings_file: default_bookings_file(),
            state_file: default_state_file(),
            export_dir: default_export_dir(),
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            tour_duration_hours: default_tour_duration_hours(),
            timezone: default_timezone(),
            admin_password: default_admin_password(),
        }
    }
}

impl Settings {
    pub fn config_path() -> TourCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TourCalError::Config("Could not determine config directory".into()))?
            .join("tourcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/tourcal/config.toml, creating a commented default on first run.
    pub fn load() -> TourCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load settings from a specific file; a missing file gives the defaults.
    pub fn load_from(path: &Path) -> TourCalResult<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| TourCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TourCalError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> TourCalResult<()> {
        self.tz()?;
        if self.day_start_hour > 23 || self.day_end_hour > 23 {
            return Err(TourCalError::Config(format!(
                "Day view hours must be between 0 and 23 (got {}-{})",
                self.day_start_hour, self.day_end_hour
            )));
        }
        Ok(())
    }

    pub fn tz(&self) -> TourCalResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| TourCalError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn hour_range(&self) -> HourRange {
        HourRange::new(self.day_start_hour, self.day_end_hour)
    }

    pub fn bookings_path(&self) -> PathBuf {
        expand(&self.bookings_file)
    }

    pub fn state_path(&self) -> PathBuf {
        expand(&self.state_file)
    }

    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_dir)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TourCalResult<()> {
        let contents = format!(
            "\
# tourcal configuration

# Booking list (JSON array):
# bookings_file = \"{DEFAULT_BOOKINGS_FILE}\"

# Session state (language, chat session):
# state_file = \"{DEFAULT_STATE_FILE}\"

# Where exported .ics files are written:
# export_dir = \"{DEFAULT_EXPORT_DIR}\"

# Hours shown in the day view:
# day_start_hour = 8
# day_end_hour = 18

# Length of exported tour events, in hours:
# tour_duration_hours = 2

# Venue timezone:
# timezone = \"{DEFAULT_TIMEZONE}\"

# Password for `tourcal login`:
# admin_password = \"{DEFAULT_ADMIN_PASSWORD}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TourCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TourCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tourcal/config.toml");

        Settings::create_default_config(&path).unwrap();
        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.bookings_file, default_bookings_file());
        assert_eq!(settings.hour_range(), HourRange::default());
        assert_eq!(settings.tour_duration_hours, 2);
        assert_eq!(settings.tz().unwrap(), chrono_tz::Europe::Istanbul);
        assert_eq!(settings.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn overrides_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "day_start_hour = 7\nday_end_hour = 20\ntimezone = \"Europe/Berlin\"\n\
             admin_password = \"s3cret\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.hour_range(), HourRange::new(7, 20));
        assert_eq!(settings.hour_range().slots(), 14);
        assert_eq!(settings.timezone, "Europe/Berlin");
        assert_eq!(settings.admin_password, "s3cret");
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timezone = \"Mars/Olympus\"\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, TourCalError::InvalidTimezone(_)));
    }

    #[test]
    fn out_of_range_hours_are_rejected() {
        let settings = Settings {
            day_end_hour: 24,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(TourCalError::Config(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
    }
}
