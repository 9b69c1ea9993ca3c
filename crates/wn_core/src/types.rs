use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-way label attached to an article by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl Article {
    /// Builds an article with only the fields the filter looks at.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            url: String::new(),
            url_to_image: None,
            published_at: None,
            source: String::new(),
            category: String::new(),
            sentiment: None,
        }
    }

    /// Title and description joined with a single space, lowercased.
    pub fn join_text(title: &str, description: &str) -> String {
        format!("{} {}", title, description).to_lowercase()
    }

    pub fn search_text(&self) -> String {
        Self::join_text(&self.title, &self.description)
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_json_shape() {
        let json = r#"{
            "id": "0-1700000000000",
            "title": "Storm warning",
            "url": "https://example.com/storm",
            "urlToImage": null,
            "publishedAt": "2024-01-15T10:00:00Z",
            "source": "Example News",
            "category": "general"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.description, "");
        assert_eq!(article.sentiment, None);
        assert!(article.published_at.is_some());

        let tagged = article.with_sentiment(Sentiment::Negative);
        let value = serde_json::to_value(&tagged).unwrap();
        assert_eq!(value["sentiment"], "negative");
        assert_eq!(value["urlToImage"], serde_json::Value::Null);
    }

    #[test]
    fn test_search_text_lowercases_both_fields() {
        let article = Article::new("1", "Market CRASH", "Deepening Crisis");
        assert_eq!(article.search_text(), "market crash deepening crisis");
    }
}
