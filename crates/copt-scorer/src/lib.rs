//! Content quality scoring engine
//!
//! Scores markdown content on three independent axes and combines them:
//!
//! - [`ReadabilityAnalyzer`] - Flesch-style reading ease with Turkish
//!   syllable counting
//! - [`SeoAnalyzer`] - meta lengths, heading structure, keyword density,
//!   links and image alt text
//! - [`QualityAnalyzer`] - length, vocabulary variety, sentiment, tone and
//!   repeated phrasing
//! - [`ContentOptimizer`] - weighted overall score and suggestions
//!
//! Every function here is pure and total: any input text, including the
//! empty string, produces well-defined scores.

mod analyzer;
mod quality;
mod readability;
mod seo;
mod text;


pub use analyzer::{ContentOptimizer, analyze, overall_score};
pub use quality::QualityAnalyzer;
pub use readability::ReadabilityAnalyzer;
pub use seo::SeoAnalyzer;

// Re-export core types for convenience
pub use copt_core::{
    ContentAnalysis, Document, Lexicon, QualityScore, ReadabilityScore, ReadingLevel, SeoScore,
    Sentiment, Tone,
};
