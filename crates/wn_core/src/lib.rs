pub mod error;
pub mod feed;
pub mod settings;
pub mod types;
pub mod weather;

pub use error::{Error, Result};
pub use settings::{LexiconOverrides, Settings, TemperatureUnit};
pub use types::{Article, Sentiment};
pub use weather::{ForecastDay, WeatherData};
