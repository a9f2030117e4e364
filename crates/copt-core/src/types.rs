//! Value objects produced and consumed by the scorer
//!
//! Every type here is computed fresh per call and never mutated afterwards.
//! Field names serialize in camelCase to match the JSON contract browser
//! clients expect.

use serde::{Deserialize, Serialize};

/// Input document. `content` is the authoritative body; everything else is
/// optional context that tightens or relaxes individual SEO checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Document {
    /// Create a document with only a body
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_meta_description(mut self, meta_description: impl Into<String>) -> Self {
        self.meta_description = Some(meta_description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Reading difficulty bucket derived from the readability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    Easy,
    Medium,
    Hard,
}

impl ReadingLevel {
    /// Fixed thresholds: 70 and above is easy, 50 and above is medium.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ReadingLevel::Easy
        } else if score >= 50 {
            ReadingLevel::Medium
        } else {
            ReadingLevel::Hard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Easy => "easy",
            ReadingLevel::Medium => "medium",
            ReadingLevel::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Mixed,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Mixed => "mixed",
        }
    }
}

/// Readability sub-score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScore {
    /// Flesch-style reading ease, clamped to 0..=100
    pub score: u8,
    pub level: ReadingLevel,
    /// Words per sentence, one decimal
    pub avg_sentence_length: f64,
    /// Characters per word, one decimal
    pub avg_word_length: f64,
    pub complex_words: usize,
    pub issues: Vec<String>,
}

/// SEO sub-score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoScore {
    pub score: u8,
    /// Keyword occurrences per 100 words, two decimals
    pub keyword_density: f64,
    pub has_meta_title: bool,
    pub has_meta_description: bool,
    pub heading_structure: bool,
    pub internal_links: usize,
    pub external_links: usize,
    pub image_alt_texts: usize,
    pub issues: Vec<String>,
}

/// Content quality sub-score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub score: u8,
    pub word_count: usize,
    pub unique_words: usize,
    pub sentiment: Sentiment,
    pub tone: Tone,
    pub issues: Vec<String>,
}

/// Aggregate analysis returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub overall_score: u8,
    pub readability: ReadabilityScore,
    pub seo: SeoScore,
    pub quality: QualityScore,
    pub suggestions: Vec<String>,
}

impl ContentAnalysis {
    /// Whether a caller should request an automatic rewrite
    pub fn needs_rewrite(&self, threshold: u8) -> bool {
        self.overall_score < threshold
    }

    /// Render the suggestions as a numbered instruction block that can be
    /// handed to a text-generation collaborator. Empty when there is
    /// nothing to improve.
    pub fn rewrite_brief(&self) -> String {
        if self.suggestions.is_empty() {
            return String::new();
        }

        let mut brief = format!(
            "Rewrite the content to raise its score from {}/100. Address the following:\n",
            self.overall_score
        );
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            brief.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }
        brief
    }
}
