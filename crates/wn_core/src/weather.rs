//! OpenWeather payloads (`units=metric`) reduced to what the app shows.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of days kept from a forecast payload.
pub const FORECAST_DAYS: usize = 5;

/// Rounds to the nearest whole number with halves going up, so -2.5 becomes -2.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for any value with a fractional part
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub location: String,
    pub temperature: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub feels_like: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub high: f64,
    pub low: f64,
    pub condition: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conditions {
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherPayload {
    #[serde(default)]
    pub name: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Conditions>,
    #[serde(default)]
    pub wind: Wind,
}

impl CurrentWeatherPayload {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_weather(self) -> Result<WeatherData> {
        let conditions = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| Error::Feed("Weather payload has no conditions".to_string()))?;

        Ok(WeatherData {
            location: self.name,
            temperature: round_half_up(self.main.temp),
            condition: conditions.main,
            description: conditions.description,
            icon: conditions.icon,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            feels_like: round_half_up(self.main.feels_like.unwrap_or(self.main.temp)),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Conditions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

impl ForecastPayload {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Groups three-hourly entries by calendar date, in first-seen order, keeping
    /// the first [`FORECAST_DAYS`] days.
    pub fn daily(&self) -> Vec<ForecastDay> {
        let mut days: Vec<(&str, Vec<&ForecastEntry>)> = Vec::new();
        for entry in &self.list {
            let date = entry.dt_txt.split(' ').next().unwrap_or_default();
            match days.iter_mut().find(|(d, _)| *d == date) {
                Some((_, entries)) => entries.push(entry),
                None => days.push((date, vec![entry])),
            }
        }

        days.into_iter()
            .take(FORECAST_DAYS)
            .map(|(date, entries)| {
                let high = entries.iter().map(|e| e.main.temp).fold(f64::NEG_INFINITY, f64::max);
                let low = entries.iter().map(|e| e.main.temp).fold(f64::INFINITY, f64::min);
                let first = entries[0].weather.first();
                ForecastDay {
                    date: date.to_string(),
                    high: round_half_up(high),
                    low: round_half_up(low),
                    condition: first.map(|c| c.main.clone()).unwrap_or_default(),
                    icon: first.map(|c| c.icon.clone()).unwrap_or_default(),
                }
            })
            .collect()
    }
}
