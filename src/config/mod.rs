use crate::core::calculator::significance::{
    DEFAULT_MIN_DISTANCE_M, DEFAULT_MIN_INTERVAL_MS, SignificanceFilter,
};
use crate::errors::{AppError, AppResult};
use crate::tracking::notifier::DEFAULT_NOTIFICATION_TITLE;
use crate::tracking::platform::{PermissionState, PositionOptions};
use crate::tracking::proximity::DEFAULT_PROXIMITY_RADIUS_M;
use crate::tracking::watcher::WatcherSettings;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius_m: f64,
    #[serde(default = "default_min_move_distance")]
    pub min_move_distance_m: f64,
    #[serde(default = "default_min_recheck_interval")]
    pub min_recheck_interval_ms: i64,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_true")]
    pub strict_location_checks: bool,
    #[serde(default)]
    pub location_source: Option<String>,
    #[serde(default = "default_permission")]
    pub location_permission: PermissionState,
    #[serde(default = "default_permission")]
    pub notification_permission: PermissionState,
    #[serde(default = "default_notification_title")]
    pub notification_title: String,
    #[serde(default = "default_true")]
    pub high_accuracy: bool,
    #[serde(default = "default_position_timeout")]
    pub position_timeout_ms: u64,
    #[serde(default)]
    pub maximum_age_ms: u64,
}

fn default_proximity_radius() -> f64 {
    DEFAULT_PROXIMITY_RADIUS_M
}
fn default_min_move_distance() -> f64 {
    DEFAULT_MIN_DISTANCE_M
}
fn default_min_recheck_interval() -> i64 {
    DEFAULT_MIN_INTERVAL_MS
}
fn default_origin() -> String {
    "http://localhost".to_string()
}
fn default_true() -> bool {
    true
}
fn default_permission() -> PermissionState {
    PermissionState::Granted
}
fn default_notification_title() -> String {
    DEFAULT_NOTIFICATION_TITLE.to_string()
}
fn default_position_timeout() -> u64 {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            proximity_radius_m: default_proximity_radius(),
            min_move_distance_m: default_min_move_distance(),
            min_recheck_interval_ms: default_min_recheck_interval(),
            origin: default_origin(),
            strict_location_checks: true,
            location_source: None,
            location_permission: default_permission(),
            notification_permission: default_permission(),
            notification_title: default_notification_title(),
            high_accuracy: true,
            position_timeout_ms: default_position_timeout(),
            maximum_age_ms: 0,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("geotask")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".geotask")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geotask.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("geotask.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("geotask.sqlite")
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            enable_high_accuracy: self.high_accuracy,
            timeout_ms: self.position_timeout_ms,
            maximum_age_ms: self.maximum_age_ms,
        }
    }

    pub fn watcher_settings(&self) -> WatcherSettings {
        WatcherSettings {
            filter: SignificanceFilter::new(self.min_move_distance_m, self.min_recheck_interval_ms),
            options: self.position_options(),
            strict: self.strict_location_checks,
        }
    }
}
