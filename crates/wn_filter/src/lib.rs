pub mod filter;
pub mod lexicon;
pub mod mood;
pub mod sentiment;

pub use filter::{filter_by_weather, FilteredNews, Selection, WeatherNewsFilter};
pub use lexicon::{Lexicons, DEFAULT_LEXICONS};
pub use mood::MoodBucket;
pub use sentiment::{classify, KeywordClassifier};

pub mod prelude {
    pub use super::{classify, filter_by_weather, MoodBucket, WeatherNewsFilter};
    pub use wn_core::{Article, Error, Result, Sentiment};
}
