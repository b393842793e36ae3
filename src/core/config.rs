use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Report keys missing from the file compared to the defaults.
    pub fn check(path: &Path) -> AppResult<bool> {
        let missing = crate::config::migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration is complete.");
            Ok(true)
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `geotask config --migrate` to add them with default values.");
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        crate::config::migrate::fill_missing_keys(path)?;
        // the merged file must still parse
        let _: Config = serde_yaml::from_str(&fs::read_to_string(path)?)
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        Command::new(ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}
