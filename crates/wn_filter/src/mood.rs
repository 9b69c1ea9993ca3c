use serde::{Deserialize, Serialize};
use std::fmt;
use wn_core::{Error, Result};

/// Below this (°C) is cold.
pub const COLD_BELOW: f64 = 10.0;
/// Above this (°C) is hot.
pub const HOT_ABOVE: f64 = 30.0;
/// Cool runs from [`COLD_BELOW`] up to and including this.
pub const COOL_UP_TO: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBucket {
    Cold,
    Hot,
    Cool,
    /// Anything the other three checks leave over, i.e. above 25 up to 30.
    Moderate,
}

impl MoodBucket {
    /// Buckets a Celsius reading. Checks run cold, hot, cool in that order.
    pub fn from_celsius(temperature: f64) -> Result<Self> {
        if !temperature.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "temperature must be a finite number, got {}",
                temperature
            )));
        }

        let bucket = if temperature < COLD_BELOW {
            MoodBucket::Cold
        } else if temperature > HOT_ABOVE {
            MoodBucket::Hot
        } else if temperature >= COLD_BELOW && temperature <= COOL_UP_TO {
            MoodBucket::Cool
        } else {
            MoodBucket::Moderate
        };
        Ok(bucket)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodBucket::Cold => "Cold Weather",
            MoodBucket::Hot => "Hot Weather",
            MoodBucket::Cool => "Cool Weather",
            MoodBucket::Moderate => "Moderate Weather",
        }
    }
}

impl fmt::Display for MoodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
