//! Word lists used by the sentiment and tone heuristics
//!
//! The defaults are the Turkish vocabularies the site's content is written
//! in. A different language or domain can be targeted by loading another
//! lexicon from JSON without touching the scorer.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

const POSITIVE: &[&str] = &[
    "harika", "mükemmel", "güzel", "iyi", "başarılı", "kaliteli", "özel", "muhteşem",
];
const NEGATIVE: &[&str] = &["kötü", "zor", "problem", "sorun", "eksik", "yetersiz", "başarısız"];
const FORMAL: &[&str] = &["dolayısıyla", "nitekim", "ancak", "lakin", "bilakis"];
const CASUAL: &[&str] = &["yani", "işte", "hani", "falan", "filan"];

/// Category -> terms mapping for the bag-of-words classifiers.
///
/// Deserializing always normalizes terms, whichever entry point is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawLexicon")]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub formal: Vec<String>,
    pub casual: Vec<String>,
}

/// Lexicon as written on disk, before normalization
#[derive(Deserialize)]
struct RawLexicon {
    #[serde(default)]
    positive: Vec<String>,
    #[serde(default)]
    negative: Vec<String>,
    #[serde(default)]
    formal: Vec<String>,
    #[serde(default)]
    casual: Vec<String>,
}

impl From<RawLexicon> for Lexicon {
    fn from(raw: RawLexicon) -> Self {
        Lexicon::new(raw.positive, raw.negative, raw.formal, raw.casual)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: to_owned(POSITIVE),
            negative: to_owned(NEGATIVE),
            formal: to_owned(FORMAL),
            casual: to_owned(CASUAL),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from explicit lists. Terms are normalised the same
    /// way as a loaded lexicon.
    pub fn new(
        positive: Vec<String>,
        negative: Vec<String>,
        formal: Vec<String>,
        casual: Vec<String>,
    ) -> Self {
        Self {
            positive,
            negative,
            formal,
            casual,
        }
        .normalized()
    }

    /// Parse a lexicon from a JSON object with `positive`, `negative`,
    /// `formal` and `casual` arrays. Missing categories are empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Lexicon(format!("invalid lexicon JSON: {}", e)))
    }

    /// Load a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            terms = lexicon.term_count(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Total number of terms across all categories
    pub fn term_count(&self) -> usize {
        self.positive.len() + self.negative.len() + self.formal.len() + self.casual.len()
    }

    // Matching is case-insensitive, so terms are stored lowercase. Blank
    // terms would match everywhere and are dropped.
    fn normalized(self) -> Self {
        Self {
            positive: normalize(self.positive),
            negative: normalize(self.negative),
            formal: normalize(self.formal),
            casual: normalize(self.casual),
        }
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn normalize(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
