use std::fmt;
use std::sync::Arc;
use wn_core::{Article, Sentiment};

use crate::lexicon::{Lexicons, DEFAULT_LEXICONS};

/// Labels text by counting distinct lexicon hits.
#[derive(Clone)]
pub struct KeywordClassifier {
    lexicons: Arc<Lexicons>,
}

impl fmt::Debug for KeywordClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordClassifier")
            .field("depressing", &self.lexicons.depressing().len())
            .field("fear", &self.lexicons.fear().len())
            .field("positive", &self.lexicons.positive().len())
            .finish()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_LEXICONS.clone())
    }
}

impl KeywordClassifier {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn classify(&self, title: &str, description: &str) -> Sentiment {
        self.classify_text(&Article::join_text(title, description))
    }

    /// Classifies text that is already lowercased.
    pub fn classify_text(&self, text: &str) -> Sentiment {
        let positive = self.lexicons.positive_score(text);
        let negative = self.lexicons.negative_score(text);

        if positive > negative && positive > 0 {
            Sentiment::Positive
        } else if negative > positive && negative > 0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Classifies with the built-in lexicons.
pub fn classify(title: &str, description: &str) -> Sentiment {
    KeywordClassifier::default().classify(title, description)
}
