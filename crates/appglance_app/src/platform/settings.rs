use std::fs;
use std::path::Path;

use pipeline_logging::{pipeline_info, pipeline_warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = ".appglance.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the analytics service.
    pub endpoint: String,
    /// Maximum end-to-end run latency before the raw-text fallback.
    pub deadline_secs: u64,
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://app.sensortower.com".to_string(),
            deadline_secs: 5,
            notifications_enabled: true,
        }
    }
}

/// Loads settings from `./.appglance.ron`. A missing or unreadable file
/// yields the defaults; a malformed file is reported and ignored.
pub fn load() -> AppSettings {
    load_from(Path::new(SETTINGS_FILENAME))
}

fn load_from(path: &Path) -> AppSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppSettings::default();
        }
        Err(err) => {
            pipeline_warn!("Failed to read settings from {:?}: {}", path, err);
            return AppSettings::default();
        }
    };

    match ron::from_str::<AppSettings>(&content) {
        Ok(settings) => {
            pipeline_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            pipeline_warn!("Malformed settings in {:?}: {}; using defaults", path, err);
            AppSettings::default()
        }
    }
}
