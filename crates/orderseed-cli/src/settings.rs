use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderseed_core::Entity;
use orderseed_generate::GenerateOptions;

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "orderseed.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("settings file already exists: {}", .0.display())]
    Exists(PathBuf),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Contents of `orderseed.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tables generated when none are named on the command line. Empty means all.
    pub tables: Vec<Entity>,
    /// Append JSON logs here instead of printing to stderr.
    pub log_file: Option<PathBuf>,
    pub generate: GenerateOptions,
}

/// Load `path`, or the default file when present, or built-in defaults.
pub fn load_settings(path: Option<&Path>) -> SettingsResult<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };
    let content = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// Write `settings` through a temp file so a crash never leaves half a config.
pub fn save_settings(path: &Path, settings: &Settings, overwrite: bool) -> SettingsResult<()> {
    if path.exists() && !overwrite {
        return Err(SettingsError::Exists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let encoded = toml::to_string_pretty(settings)?;
    let tmp_path = path.with_extension("toml.tmp");
    let mut file = std::fs::File::create(&tmp_path)?;
    file.write_all(encoded.as_bytes())?;
    file.sync_all()?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("orderseed_cli_{label}_{}", uuid::Uuid::new_v4()));
        dir.join(DEFAULT_SETTINGS_FILE)
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::default();
        settings.tables = vec![Entity::Workers, Entity::OrderContains];
        settings.generate.seed = Some(9);
        settings.generate.table_rows.insert(Entity::Orders, 50);

        save_settings(&path, &settings, false).expect("save settings");
        let loaded = load_settings(Some(&path)).expect("load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn refuses_to_overwrite_without_flag() {
        let path = temp_path("exists");
        save_settings(&path, &Settings::default(), false).expect("first save");
        let second = save_settings(&path, &Settings::default(), false);
        assert!(matches!(second, Err(SettingsError::Exists(_))));
        save_settings(&path, &Settings::default(), true).expect("overwrite");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            tables = ["orders"]

            [generate]
            rows = 10
            today = "2024-05-01"

            [generate.inputs]
            tasks = "fixtures/tasks.csv"
            "#,
        )
        .expect("parse settings");

        assert_eq!(settings.tables, vec![Entity::Orders]);
        assert_eq!(settings.generate.rows, 10);
        assert_eq!(settings.generate.phone_prefix, "+7");
        assert_eq!(
            settings.generate.inputs.tasks,
            Some(PathBuf::from("fixtures/tasks.csv"))
        );
        assert_eq!(
            settings.generate.today,
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }
}
