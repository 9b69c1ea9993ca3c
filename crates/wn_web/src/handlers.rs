use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wn_core::{Article, Sentiment, TemperatureUnit};
use wn_filter::{FilteredNews, MoodBucket};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub articles: Vec<Article>,
    pub temperature: f64,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub bucket: MoodBucket,
    pub label: &'static str,
}

pub async fn filter_news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<FilteredNews>, ApiError> {
    let celsius = request.unit.to_celsius(request.temperature);
    let report = state.filter.filter_with_report(&request.articles, celsius)?;
    Ok(Json(report))
}

pub async fn classify_article(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let sentiment = state.filter.classifier().classify(&request.title, &request.description);
    Json(ClassifyResponse { sentiment })
}

pub async fn get_mood(Path(temperature): Path<f64>) -> Result<Json<MoodResponse>, ApiError> {
    let bucket = MoodBucket::from_celsius(temperature)?;
    Ok(Json(MoodResponse {
        bucket,
        label: bucket.label(),
    }))
}

pub async fn health() -> impl IntoResponse {
    "ok"
}
