use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use wn_core::{Article, Result, Sentiment};

use crate::lexicon::Lexicons;
use crate::mood::MoodBucket;
use crate::sentiment::KeywordClassifier;

/// Size of every fallback selection.
pub const FALLBACK_LIMIT: usize = 10;
/// Size of the unfiltered selection in the moderate range.
pub const MODERATE_LIMIT: usize = 15;
/// Hard cap on any result.
pub const MAX_RESULTS: usize = 20;

/// Which rule produced a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// No input articles.
    Empty,
    /// The bucket's own keyword/sentiment rule matched.
    Primary,
    NeutralFallback,
    NegativeFallback,
    /// First articles of the input, taken when nothing else matched.
    Leading,
    Moderate,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilteredNews {
    pub bucket: Option<MoodBucket>,
    pub selection: Selection,
    pub articles: Vec<Article>,
}

struct Tagged {
    text: String,
    sentiment: Sentiment,
    article: Article,
}

/// Picks the articles that suit the current temperature.
#[derive(Debug, Clone, Default)]
pub struct WeatherNewsFilter {
    classifier: KeywordClassifier,
}

impl WeatherNewsFilter {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self {
            classifier: KeywordClassifier::new(lexicons),
        }
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    pub fn filter_by_weather(
        &self,
        articles: &[Article],
        temperature: f64,
    ) -> Result<Vec<Article>> {
        Ok(self.filter_with_report(articles, temperature)?.articles)
    }

    /// Like [`filter_by_weather`](Self::filter_by_weather), also reporting the bucket
    /// and the rule that produced the list.
    pub fn filter_with_report(
        &self,
        articles: &[Article],
        temperature: f64,
    ) -> Result<FilteredNews> {
        if articles.is_empty() {
            return Ok(FilteredNews {
                bucket: None,
                selection: Selection::Empty,
                articles: Vec::new(),
            });
        }

        let bucket = MoodBucket::from_celsius(temperature)?;
        let tagged = self.tag_all(articles);
        let lexicons = self.classifier.lexicons();

        let (mut selection, mut picked) = match bucket {
            MoodBucket::Cold => select(
                &tagged,
                |t| lexicons.mentions_depressing(&t.text) || t.sentiment == Sentiment::Negative,
                Sentiment::Neutral,
                Selection::NeutralFallback,
            ),
            MoodBucket::Hot => select(
                &tagged,
                |t| lexicons.mentions_fear(&t.text),
                Sentiment::Negative,
                Selection::NegativeFallback,
            ),
            MoodBucket::Cool => select(
                &tagged,
                |t| t.sentiment == Sentiment::Positive || lexicons.mentions_positive(&t.text),
                Sentiment::Neutral,
                Selection::NeutralFallback,
            ),
            MoodBucket::Moderate => (Selection::Moderate, leading(&tagged, MODERATE_LIMIT)),
        };

        if picked.is_empty() {
            selection = Selection::Leading;
            picked = leading(&tagged, FALLBACK_LIMIT);
        }
        picked.truncate(MAX_RESULTS);

        debug!(
            "{} at {}°C: {:?} kept {} of {} articles",
            bucket,
            temperature,
            selection,
            picked.len(),
            tagged.len()
        );

        Ok(FilteredNews {
            bucket: Some(bucket),
            selection,
            articles: picked.into_iter().map(|t| t.article.clone()).collect(),
        })
    }

    fn tag_all(&self, articles: &[Article]) -> Vec<Tagged> {
        articles
            .iter()
            .map(|article| {
                let text = article.search_text();
                let sentiment = self.classifier.classify_text(&text);
                Tagged {
                    text,
                    sentiment,
                    article: article.clone().with_sentiment(sentiment),
                }
            })
            .collect()
    }
}

/// Filters with the built-in lexicons.
pub fn filter_by_weather(articles: &[Article], temperature: f64) -> Result<Vec<Article>> {
    WeatherNewsFilter::default().filter_by_weather(articles, temperature)
}

/// Primary rule first, then up to [`FALLBACK_LIMIT`] articles with the fallback
/// sentiment, then the leading articles.
fn select<'a, F>(
    tagged: &'a [Tagged],
    primary: F,
    fallback: Sentiment,
    fallback_selection: Selection,
) -> (Selection, Vec<&'a Tagged>)
where
    F: Fn(&Tagged) -> bool,
{
    let matched: Vec<&Tagged> = tagged.iter().filter(|&t| primary(t)).collect();
    if !matched.is_empty() {
        return (Selection::Primary, matched);
    }

    let matched: Vec<&Tagged> = tagged
        .iter()
        .filter(|t| t.sentiment == fallback)
        .take(FALLBACK_LIMIT)
        .collect();
    if !matched.is_empty() {
        return (fallback_selection, matched);
    }

    (Selection::Leading, leading(tagged, FALLBACK_LIMIT))
}

fn leading(tagged: &[Tagged], limit: usize) -> Vec<&Tagged> {
    tagged.iter().take(limit).collect()
}
