//! Mapping of the NewsAPI `top-headlines` payload into [`Article`]s.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::{Article, Error, Result};

pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlines {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: RawSource,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TopHeadlines {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Converts the payload into articles. Ids are `{index}-{fetched_at millis}` and
    /// stay stable for the lifetime of one fetch.
    pub fn into_articles(self, fetched_at: DateTime<Utc>) -> Result<Vec<Article>> {
        if self.status != "ok" {
            return Err(Error::Feed(format!(
                "{}: {}",
                self.code.unwrap_or_else(|| self.status.clone()),
                self.message.unwrap_or_else(|| "Failed to fetch news data".to_string())
            )));
        }

        let stamp = fetched_at.timestamp_millis();
        let mut articles = Vec::with_capacity(self.articles.len());
        for (index, raw) in self.articles.into_iter().enumerate() {
            let title = match raw.title.map(|t| t.trim().to_string()) {
                Some(title) if !title.is_empty() => title,
                _ => {
                    debug!("Skipping untitled article at index {}", index);
                    continue;
                }
            };

            articles.push(Article {
                id: format!("{}-{}", index, stamp),
                title,
                description: raw.description.unwrap_or_default(),
                url: raw.url.unwrap_or_default(),
                url_to_image: raw.url_to_image,
                published_at: raw
                    .published_at
                    .as_deref()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                    .map(|dt| dt.with_timezone(&Utc)),
                source: raw.source.name.unwrap_or_default(),
                category: DEFAULT_CATEGORY.to_string(),
                sentiment: None,
            });
        }
        Ok(articles)
    }
}

/// The `category` query value for a set of categories.
pub fn category_query(categories: &[String]) -> String {
    categories.join(",")
}
