use lazy_static::lazy_static;
use serde::Deserialize;
use std::sync::Arc;
use wn_core::{Error, LexiconOverrides, Result};

pub const DEPRESSING_KEYWORDS: &[&str] = &[
    "death",
    "disaster",
    "crisis",
    "tragedy",
    "accident",
    "violence",
    "crime",
    "war",
    "conflict",
    "recession",
    "unemployment",
    "poverty",
];

pub const FEAR_KEYWORDS: &[&str] = &[
    "danger",
    "threat",
    "warning",
    "alert",
    "emergency",
    "risk",
    "hazard",
    "terror",
    "attack",
    "epidemic",
    "pandemic",
    "outbreak",
];

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "win",
    "victory",
    "success",
    "achievement",
    "celebration",
    "joy",
    "happiness",
    "breakthrough",
    "progress",
    "innovation",
    "award",
    "champion",
];

lazy_static! {
    pub static ref DEFAULT_LEXICONS: Arc<Lexicons> = Arc::new(Lexicons::builtin());
}

/// The three keyword sets the classifier and the filter match against.
///
/// Keywords are stored lowercased and deduplicated, and no keyword appears in
/// more than one set. Matching is plain substring containment on lowercased
/// text, so "war" also matches "warning" and "wardrobe".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "LexiconOverrides")]
pub struct Lexicons {
    depressing: Vec<String>,
    fear: Vec<String>,
    positive: Vec<String>,
}

impl Lexicons {
    pub fn new<S: AsRef<str>>(depressing: &[S], fear: &[S], positive: &[S]) -> Result<Self> {
        let lexicons = Self {
            depressing: normalize("depressing", depressing)?,
            fear: normalize("fear", fear)?,
            positive: normalize("positive", positive)?,
        };
        lexicons.check_disjoint()?;
        Ok(lexicons)
    }

    fn builtin() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            depressing: owned(DEPRESSING_KEYWORDS),
            fear: owned(FEAR_KEYWORDS),
            positive: owned(POSITIVE_KEYWORDS),
        }
    }

    /// Starts from the built-in sets and replaces whichever ones are overridden.
    pub fn with_overrides(overrides: &LexiconOverrides) -> Result<Self> {
        let defaults = Self::builtin();
        Self::new(
            overrides.depressing.as_deref().unwrap_or(&defaults.depressing),
            overrides.fear.as_deref().unwrap_or(&defaults.fear),
            overrides.positive.as_deref().unwrap_or(&defaults.positive),
        )
    }

    pub fn depressing(&self) -> &[String] {
        &self.depressing
    }

    pub fn fear(&self) -> &[String] {
        &self.fear
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn mentions_depressing(&self, text: &str) -> bool {
        mentions(&self.depressing, text)
    }

    pub fn mentions_fear(&self, text: &str) -> bool {
        mentions(&self.fear, text)
    }

    pub fn mentions_positive(&self, text: &str) -> bool {
        mentions(&self.positive, text)
    }

    /// Distinct positive keywords found in `text`.
    pub fn positive_score(&self, text: &str) -> usize {
        count(&self.positive, text)
    }

    /// Distinct depressing or fear keywords found in `text`.
    pub fn negative_score(&self, text: &str) -> usize {
        count(&self.depressing, text) + count(&self.fear, text)
    }

    fn check_disjoint(&self) -> Result<()> {
        let sets = [
            ("depressing", &self.depressing),
            ("fear", &self.fear),
            ("positive", &self.positive),
        ];
        for (i, (name, words)) in sets.iter().enumerate() {
            for (other_name, other) in &sets[i + 1..] {
                if let Some(shared) = words.iter().find(|w| other.contains(w)) {
                    return Err(Error::InvalidLexicon(format!(
                        "'{}' appears in both {} and {}",
                        shared, name, other_name
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        DEFAULT_LEXICONS.as_ref().clone()
    }
}

impl TryFrom<LexiconOverrides> for Lexicons {
    type Error = Error;

    fn try_from(overrides: LexiconOverrides) -> Result<Self> {
        Self::with_overrides(&overrides)
    }
}

fn normalize<S: AsRef<str>>(name: &str, words: &[S]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() {
            return Err(Error::InvalidLexicon(format!("empty keyword in {} lexicon", name)));
        }
        if !normalized.contains(&word) {
            normalized.push(word);
        }
    }
    Ok(normalized)
}

fn mentions(words: &[String], text: &str) -> bool {
    words.iter().any(|w| text.contains(w.as_str()))
}

fn count(words: &[String], text: &str) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_are_disjoint() {
        assert!(DEFAULT_LEXICONS.check_disjoint().is_ok());
        assert_eq!(DEFAULT_LEXICONS.depressing().len(), 12);
        assert_eq!(DEFAULT_LEXICONS.fear().len(), 12);
        assert_eq!(DEFAULT_LEXICONS.positive().len(), 12);
    }

    #[test]
    fn test_substring_matching() {
        let lexicons = Lexicons::default();
        assert!(lexicons.mentions_depressing("new wardrobe trends"));
        assert!(lexicons.mentions_fear("high-risk investments"));
        assert!(lexicons.mentions_positive("twin peaks"));
        assert!(!lexicons.mentions_positive("cats are cute"));
    }

    #[test]
    fn test_scores_count_distinct_keywords() {
        let lexicons = Lexicons::default();
        assert_eq!(lexicons.positive_score("win win win"), 1);
        // "warning" contributes both "war" and "warning"
        assert_eq!(lexicons.negative_score("storm warning"), 2);
        assert_eq!(lexicons.negative_score("crisis and crisis"), 1);
    }

    #[test]
    fn test_new_normalizes() {
        let lexicons = Lexicons::new(&["  Flood ", "flood"], &["Storm"], &["Sunny"]).unwrap();
        assert_eq!(lexicons.depressing(), &["flood".to_string()]);
        assert_eq!(lexicons.fear(), &["storm".to_string()]);
    }

    #[test]
    fn test_new_rejects_invalid_sets() {
        let overlap = Lexicons::new(&["storm"], &["storm"], &["sun"]);
        assert!(matches!(overlap, Err(Error::InvalidLexicon(_))));

        let blank = Lexicons::new(&["storm"], &[" "], &["sun"]);
        assert!(matches!(blank, Err(Error::InvalidLexicon(_))));
    }

    #[test]
    fn test_overrides_keep_unspecified_defaults() {
        let overrides = LexiconOverrides {
            fear: Some(vec!["storm".to_string()]),
            ..Default::default()
        };
        let lexicons = Lexicons::with_overrides(&overrides).unwrap();
        assert_eq!(lexicons.fear(), &["storm".to_string()]);
        assert_eq!(lexicons.positive(), DEFAULT_LEXICONS.positive());
    }

    #[test]
    fn test_deserialize_validates() {
        let lexicons: Lexicons = serde_json::from_str(r#"{"positive": ["Sunshine"]}"#).unwrap();
        assert_eq!(lexicons.positive(), &["sunshine".to_string()]);

        let invalid = serde_json::from_str::<Lexicons>(r#"{"fear": ["crisis"]}"#);
        assert!(invalid.is_err());
    }
}
