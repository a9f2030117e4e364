//! Composite analysis: weighted overall score plus prioritised suggestions

use copt_core::{ContentAnalysis, Document, Lexicon, QualityScore, ReadabilityScore, SeoScore};
use tracing::debug;

use crate::{QualityAnalyzer, ReadabilityAnalyzer, SeoAnalyzer};

const READABILITY_WEIGHT: f64 = 0.30;
const SEO_WEIGHT: f64 = 0.40;
const QUALITY_WEIGHT: f64 = 0.30;

/// Sub-scores below this get a category callout
const CALLOUT_THRESHOLD: u8 = 70;
const ISSUES_PER_CATEGORY: usize = 2;
const MAX_SUGGESTIONS: usize = 8;

const READABILITY_CALLOUT: &str =
    "Improve readability: use shorter sentences and simpler words";

/// Content optimizer combining the readability, SEO and quality scorers.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ContentOptimizer {
    readability: ReadabilityAnalyzer,
    seo: SeoAnalyzer,
    quality: QualityAnalyzer,
}

impl ContentOptimizer {
    /// Create an optimizer with the default Turkish lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer whose sentiment and tone heuristics use `lexicon`
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            readability: ReadabilityAnalyzer::new(),
            seo: SeoAnalyzer::new(),
            quality: QualityAnalyzer::with_lexicon(lexicon),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.quality.lexicon()
    }

    /// Analyze a document
    pub fn analyze(&self, document: &Document) -> ContentAnalysis {
        self.analyze_parts(
            &document.content,
            document.title.as_deref(),
            document.meta_description.as_deref(),
            &document.keywords,
        )
    }

    /// Analyze loose parts without building a `Document`
    pub fn analyze_parts(
        &self,
        content: &str,
        title: Option<&str>,
        meta_description: Option<&str>,
        keywords: &[String],
    ) -> ContentAnalysis {
        let readability = self.readability.score(content);
        let seo = self.seo.score(content, title, meta_description, keywords);
        let quality = self.quality.score(content);

        let overall_score = overall_score(readability.score, seo.score, quality.score);
        let suggestions = suggestions(&readability, &seo, &quality);

        debug!(
            overall_score,
            readability = readability.score,
            seo = seo.score,
            quality = quality.score,
            suggestions = suggestions.len(),
            "content analyzed"
        );

        ContentAnalysis {
            overall_score,
            readability,
            seo,
            quality,
            suggestions,
        }
    }

    /// Analyze several documents, preserving order
    pub fn analyze_batch(&self, documents: &[Document]) -> Vec<ContentAnalysis> {
        documents.iter().map(|d| self.analyze(d)).collect()
    }

    pub fn readability(&self, content: &str) -> ReadabilityScore {
        self.readability.score(content)
    }

    pub fn seo(
        &self,
        content: &str,
        title: Option<&str>,
        meta_description: Option<&str>,
        keywords: &[String],
    ) -> SeoScore {
        self.seo.score(content, title, meta_description, keywords)
    }

    pub fn quality(&self, content: &str) -> QualityScore {
        self.quality.score(content)
    }
}

/// Analyze a document with the default lexicon
pub fn analyze(document: &Document) -> ContentAnalysis {
    ContentOptimizer::new().analyze(document)
}

/// Fixed-weight average of the three sub-scores, rounded
pub fn overall_score(readability: u8, seo: u8, quality: u8) -> u8 {
    let weighted = f64::from(readability) * READABILITY_WEIGHT
        + f64::from(seo) * SEO_WEIGHT
        + f64::from(quality) * QUALITY_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u8
}

// Category callouts come first, then the leading issues of each sub-score.
// A callout quotes issues[0], which also appears in the raw issue list, so
// the same text can show up twice.
fn suggestions(
    readability: &ReadabilityScore,
    seo: &SeoScore,
    quality: &QualityScore,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if readability.score < CALLOUT_THRESHOLD {
        suggestions.push(READABILITY_CALLOUT.to_string());
    }
    if seo.score < CALLOUT_THRESHOLD {
        if let Some(issue) = seo.issues.first() {
            suggestions.push(format!("Improve SEO: {}", issue));
        }
    }
    if quality.score < CALLOUT_THRESHOLD {
        if let Some(issue) = quality.issues.first() {
            suggestions.push(format!("Improve content quality: {}", issue));
        }
    }

    for issues in [&readability.issues, &seo.issues, &quality.issues] {
        suggestions.extend(issues.iter().take(ISSUES_PER_CATEGORY).cloned());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
