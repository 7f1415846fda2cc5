use serde::{Deserialize, Serialize};

use crate::options::DisplayOptions;

/// Settings of a single live feed window.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// The location whose readings are shown.
    pub location: String,

    /// Name of the data source, used in the window title.
    pub source: String,

    pub display: DisplayOptions,

    /// Seconds between two refreshes.
    pub refresh_interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            location: "Melbourne".into(),
            source: "MelbourneWeather".into(),
            display: DisplayOptions::default(),
            refresh_interval_secs: 5,
        }
    }
}

impl FeedConfig {
    pub fn from_json(json_data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_data)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let json_data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json_data)?;

        log::info!("Loaded feed config from {}", path.display());
        Ok(config)
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

#[test]
fn test_config_defaults() {
    let config = FeedConfig::from_json("{}").unwrap();
    assert_eq!(config, FeedConfig::default());
    assert_eq!(config.refresh_interval(), std::time::Duration::from_secs(5));
}

#[test]
fn test_config_partial() {
    let config = FeedConfig::from_json(
        r#"{
            "location": "Ballarat",
            "display": { "temperature": false },
            "refresh_interval_secs": 0
        }"#,
    )
    .unwrap();

    assert_eq!(config.location, "Ballarat");
    assert_eq!(config.source, "MelbourneWeather");
    assert_eq!(config.display, DisplayOptions::from([false, true]));
    assert_eq!(config.refresh_interval(), std::time::Duration::from_secs(1));
}

#[test]
fn test_config_missing_file() {
    assert!(FeedConfig::load("/nonexistent/weather-monitor.json").is_err());
}
