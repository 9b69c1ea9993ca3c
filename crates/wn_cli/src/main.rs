use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use wn_core::feed::{category_query, TopHeadlines};
use wn_core::weather::{CurrentWeatherPayload, ForecastPayload};
use wn_core::{Article, Settings, TemperatureUnit};
use wn_filter::{Lexicons, MoodBucket, WeatherNewsFilter};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Filter a set of articles for the current weather
    Filter {
        /// JSON array of articles, or a NewsAPI top-headlines payload
        #[arg(long)]
        articles: PathBuf,
        #[arg(
            long,
            allow_negative_numbers = true,
            required_unless_present = "weather",
            conflicts_with = "weather"
        )]
        temperature: Option<f64>,
        /// OpenWeather current-weather payload to read the temperature from
        #[arg(long)]
        weather: Option<PathBuf>,
        /// Unit of --temperature (defaults to the settings file, then celsius)
        #[arg(long)]
        unit: Option<TemperatureUnit>,
        /// Keyword lexicons (JSON), replacing the settings file's
        #[arg(long)]
        lexicons: Option<PathBuf>,
        /// Print the bucket and selection rule along with the articles
        #[arg(long)]
        report: bool,
    },
    /// Print the sentiment label for a headline
    Classify {
        title: String,
        description: Option<String>,
    },
    /// Print the mood bucket for a temperature
    Mood {
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
        #[arg(long)]
        unit: Option<TemperatureUnit>,
    },
    /// Summarise an OpenWeather forecast payload by day
    Forecast {
        file: PathBuf,
        #[arg(long)]
        unit: Option<TemperatureUnit>,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        #[arg(long)]
        lexicons: Option<PathBuf>,
    },
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Accepts either a plain article array or a NewsAPI payload.
fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let value: Value = serde_json::from_str(&read_file(path)?)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let articles = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        let headlines: TopHeadlines = serde_json::from_value(value)?;
        headlines.into_articles(Utc::now())?
    };
    debug!("Loaded {} articles from {}", articles.len(), path.display());
    Ok(articles)
}

fn load_lexicons(path: Option<&Path>, settings: &Settings) -> Result<Lexicons> {
    if let Some(path) = path {
        let lexicons = serde_json::from_str(&read_file(path)?)
            .with_context(|| format!("Invalid lexicons in {}", path.display()))?;
        return Ok(lexicons);
    }
    match &settings.lexicons {
        Some(overrides) => Ok(Lexicons::with_overrides(overrides)?),
        None => Ok(Lexicons::default()),
    }
}

fn build_filter(path: Option<&Path>, settings: &Settings) -> Result<WeatherNewsFilter> {
    Ok(WeatherNewsFilter::new(Arc::new(load_lexicons(path, settings)?)))
}

/// Celsius temperature from either the flag or a weather payload.
fn resolve_temperature(
    temperature: Option<f64>,
    weather: Option<&Path>,
    unit: TemperatureUnit,
) -> Result<f64> {
    if let Some(value) = temperature {
        return Ok(unit.to_celsius(value));
    }
    let path = weather.context("Either --temperature or --weather is required")?;
    let current = CurrentWeatherPayload::from_json(&read_file(path)?)?.into_weather()?;
    info!(
        "🌡️ {} is at {}°C ({})",
        current.location, current.temperature, current.description
    );
    Ok(current.temperature)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::Filter { articles, temperature, weather, unit, lexicons, report } => {
            let filter = build_filter(lexicons.as_deref(), &settings)?;
            let unit = unit.unwrap_or(settings.temperature_unit);
            let celsius = resolve_temperature(temperature, weather.as_deref(), unit)?;
            let articles = load_articles(&articles)?;
            debug!("News categories: {}", category_query(&settings.news_categories));

            let filtered = filter.filter_with_report(&articles, celsius)?;
            info!(
                "📰 Kept {} of {} articles ({:?})",
                filtered.articles.len(),
                articles.len(),
                filtered.selection
            );
            let output = if report {
                serde_json::to_string_pretty(&filtered)?
            } else {
                serde_json::to_string_pretty(&filtered.articles)?
            };
            println!("{}", output);
        }
        Commands::Classify { title, description } => {
            let filter = build_filter(None, &settings)?;
            let description = description.as_deref().unwrap_or_default();
            let sentiment = filter.classifier().classify(&title, description);
            println!("{}", sentiment);
        }
        Commands::Mood { temperature, unit } => {
            let unit = unit.unwrap_or(settings.temperature_unit);
            let celsius = unit.to_celsius(temperature);
            let bucket = MoodBucket::from_celsius(celsius)?;
            println!("{} ({})", bucket.label(), unit.display(celsius));
        }
        Commands::Forecast { file, unit } => {
            let unit = unit.unwrap_or(settings.temperature_unit);
            let forecast = ForecastPayload::from_json(&read_file(&file)?)?;
            for day in forecast.daily() {
                println!(
                    "{}  {} / {}  {}",
                    day.date,
                    unit.display(day.high),
                    unit.display(day.low),
                    day.condition
                );
            }
        }
        Commands::Serve { addr, lexicons } => {
            let filter = build_filter(lexicons.as_deref(), &settings)?;
            info!("🧭 Filter ready: {:?}", filter.classifier());
            wn_web::serve(addr, wn_web::AppState::new(filter)).await?;
        }
    }

    Ok(())
}
