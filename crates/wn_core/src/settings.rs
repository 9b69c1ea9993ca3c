use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::weather::round_half_up;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a reading expressed in this unit to degrees Celsius.
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Converts a Celsius reading for display. Fahrenheit is rounded to whole degrees.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => round_half_up(celsius * 9.0 / 5.0 + 32.0),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn display(&self, celsius: f64) -> String {
        format!("{}{}", self.from_celsius(celsius), self.symbol())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => f.write_str("celsius"),
            TemperatureUnit::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(Error::InvalidArgument(format!("Unknown temperature unit: {}", other))),
        }
    }
}

/// Keyword overrides as they appear in a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconOverrides {
    #[serde(default)]
    pub depressing: Option<Vec<String>>,
    #[serde(default)]
    pub fear: Option<Vec<String>>,
    #[serde(default)]
    pub positive: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub temperature_unit: TemperatureUnit,
    pub news_categories: Vec<String>,
    pub lexicons: Option<LexiconOverrides>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Celsius,
            news_categories: vec![
                "general".to_string(),
                "technology".to_string(),
                "health".to_string(),
            ],
            lexicons: None,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_round_trip() {
        let unit = TemperatureUnit::Fahrenheit;
        assert!((unit.to_celsius(50.0) - 10.0).abs() < 1e-9);
        assert!((unit.to_celsius(86.0) - 30.0).abs() < 1e-9);
        assert_eq!(unit.from_celsius(18.0), 64.0);
        assert_eq!(unit.display(-40.0), "-40°F");
    }

    #[test]
    fn test_celsius_display_is_unchanged() {
        assert_eq!(TemperatureUnit::Celsius.display(21.0), "21°C");
        assert_eq!(TemperatureUnit::Celsius.to_celsius(21.5), 21.5);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("celsius".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert!(matches!("kelvin".parse::<TemperatureUnit>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"temperatureUnit": "fahrenheit"}"#).unwrap();
        assert_eq!(settings.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(settings.news_categories, vec!["general", "technology", "health"]);
        assert!(settings.lexicons.is_none());
    }

    #[test]
    fn test_settings_load_from_file() {
        let path = std::env::temp_dir().join(format!("wn-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"lexicons": {"fear": ["storm"]}}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lexicons = settings.lexicons.unwrap();
        assert_eq!(lexicons.fear, Some(vec!["storm".to_string()]));
        assert!(lexicons.positive.is_none());
    }
}
