use wn_filter::filter::{FALLBACK_LIMIT, MAX_RESULTS, MODERATE_LIMIT};
use wn_filter::prelude::*;
use wn_filter::Selection;

fn article(id: usize, title: &str) -> Article {
    Article::new(format!("a{}", id), title, "")
}

/// A pool mixing depressing, fear, positive and neutral headlines.
fn mixed_pool(len: usize) -> Vec<Article> {
    let titles = [
        "Flooding disaster hits coastal towns",
        "Local bakery opens second shop",
        "Scientists announce battery breakthrough",
        "Health officials issue outbreak alert",
        "City council meets on Tuesday",
        "Striker scores late to win derby",
        "Unemployment figures rise again",
        "Hazard lights recalled on trucks",
    ];
    (0..len).map(|i| article(i, titles[i % titles.len()])).collect()
}

fn positions(input: &[Article], output: &[Article]) -> Vec<usize> {
    output
        .iter()
        .map(|a| input.iter().position(|b| b.id == a.id).unwrap())
        .collect()
}

#[test]
fn test_cold_depressing_match() {
    let input = vec![
        Article::new("1", "Market Crash Triggers Crisis", ""),
        Article::new("2", "Cats are cute", ""),
    ];
    let result = filter_by_weather(&input, 5.0).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "1");
    assert_eq!(result[0].sentiment, Some(Sentiment::Negative));
}

#[test]
fn test_hot_fear_match() {
    let input = vec![
        Article::new("1", "Cats are cute", ""),
        Article::new("2", "Emergency warning issued for region", ""),
    ];
    let result = filter_by_weather(&input, 35.0).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "2");
    assert_eq!(result[0].sentiment, Some(Sentiment::Negative));
}

#[test]
fn test_cool_positive_match() {
    let input = vec![
        Article::new("1", "Team wins championship in stunning victory", ""),
        Article::new("2", "Cats are cute", ""),
    ];
    let result = filter_by_weather(&input, 18.0).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "1");
    assert_eq!(result[0].sentiment, Some(Sentiment::Positive));
}

#[test]
fn test_moderate_gap_takes_leading_articles() {
    let input = mixed_pool(16);
    let report = WeatherNewsFilter::default().filter_with_report(&input, 27.0).unwrap();
    assert_eq!(report.bucket, Some(MoodBucket::Moderate));
    assert_eq!(report.selection, Selection::Moderate);
    assert_eq!(report.articles.len(), MODERATE_LIMIT);
    assert_eq!(positions(&input, &report.articles), (0..MODERATE_LIMIT).collect::<Vec<_>>());
    assert!(report.articles.iter().all(|a| a.sentiment.is_some()));
}

#[test]
fn test_cold_all_neutral_returns_neutral_fallback() {
    let input: Vec<Article> = (0..25)
        .map(|i| article(i, "Weekly farmers market schedule"))
        .collect();
    let report = WeatherNewsFilter::default().filter_with_report(&input, -3.0).unwrap();
    assert_eq!(report.selection, Selection::NeutralFallback);
    assert_eq!(report.articles.len(), FALLBACK_LIMIT);
    assert!(report.articles.iter().all(|a| a.sentiment == Some(Sentiment::Neutral)));
}

#[test]
fn test_empty_input() {
    for temperature in [-20.0, 5.0, 18.0, 27.0, 35.0] {
        assert!(filter_by_weather(&[], temperature).unwrap().is_empty());
    }
}

#[test]
fn test_order_preserved_and_capped() {
    let filter = WeatherNewsFilter::default();
    for len in [1, 3, 9, 24, 57] {
        let input = mixed_pool(len);
        for temperature in [-8.0, 9.9, 10.0, 22.0, 25.0, 26.0, 30.0, 31.0, 42.0] {
            let result = filter.filter_by_weather(&input, temperature).unwrap();
            assert!(!result.is_empty());

            let limit = if MoodBucket::from_celsius(temperature).unwrap() == MoodBucket::Moderate {
                MODERATE_LIMIT
            } else {
                MAX_RESULTS
            };
            assert!(result.len() <= limit, "{} articles at {}", result.len(), temperature);

            let found = positions(&input, &result);
            assert!(found.windows(2).all(|w| w[0] < w[1]), "order changed at {}", temperature);
        }
    }
}

#[test]
fn test_sentiment_ignores_context() {
    let input = mixed_pool(8);
    let filter = WeatherNewsFilter::default();
    for temperature in [0.0, 18.0, 27.0, 40.0] {
        for tagged in filter.filter_by_weather(&input, temperature).unwrap() {
            assert_eq!(tagged.sentiment, Some(classify(&tagged.title, &tagged.description)));
        }
    }
}

#[test]
fn test_passthrough_fields_untouched() {
    let mut input = Article::new("x", "Charity gala a huge success", "Organisers celebrate");
    input.url = "https://example.com/gala".to_string();
    input.source = "Example Times".to_string();
    input.category = "general".to_string();

    let result = filter_by_weather(&[input.clone()], 20.0).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].url, input.url);
    assert_eq!(result[0].source, input.source);
    assert_eq!(result[0].category, input.category);
}
