//! Length, vocabulary, sentiment, tone and repetition heuristics

use copt_core::{Lexicon, QualityScore, Sentiment, Tone};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::text;

const MIN_WORDS: usize = 300;
const RECOMMENDED_WORDS: usize = 500;
const MIN_UNIQUE_RATIO: f64 = 0.4;
const SHINGLE_SIZE: usize = 3;
/// A shingle seen more often than this is a repeated phrase
const MAX_SHINGLE_REPEATS: usize = 2;
const REPORTED_PHRASES: usize = 2;

const TOO_SHORT_PENALTY: i32 = 20;
const SHORT_PENALTY: i32 = 10;
const LOW_VARIETY_PENALTY: i32 = 10;
const REPETITION_PENALTY: i32 = 5;

/// Which side of a two-way vote wins by a 2x majority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Majority {
    First,
    Second,
    Neither,
}

fn majority(first: usize, second: usize) -> Majority {
    if first > 2 * second {
        Majority::First
    } else if second > 2 * first {
        Majority::Second
    } else {
        Majority::Neither
    }
}

/// Quality scorer
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer {
    lexicon: Lexicon,
}

impl QualityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn score(&self, content: &str) -> QualityScore {
        let mut score: i32 = 100;
        let mut issues = Vec::new();

        let words = text::words(content);
        let word_count = words.len();
        if word_count < MIN_WORDS {
            issues.push(format!(
                "Content is too short ({} words, at least {} recommended)",
                word_count, MIN_WORDS
            ));
            score -= TOO_SHORT_PENALTY;
        } else if word_count < RECOMMENDED_WORDS {
            issues.push(format!(
                "Content could be longer ({} words, {}+ recommended)",
                word_count, RECOMMENDED_WORDS
            ));
            score -= SHORT_PENALTY;
        }

        let unique_words = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>()
            .len();
        let unique_ratio = text::ratio(unique_words, word_count);
        if unique_ratio < MIN_UNIQUE_RATIO {
            issues.push(format!(
                "Vocabulary is repetitive ({}% unique words, aim for at least 40%)",
                (unique_ratio * 100.0).round()
            ));
            score -= LOW_VARIETY_PENALTY;
        }

        let lowered = content.to_lowercase();
        let sentiment = self.sentiment(&lowered);
        let tone = self.tone(&lowered);

        let repeated = repeated_phrases(content);
        if !repeated.is_empty() {
            let listed: Vec<String> = repeated
                .iter()
                .take(REPORTED_PHRASES)
                .map(|p| format!("\"{}\"", p))
                .collect();
            issues.push(format!("Repeated phrases: {}", listed.join(", ")));
            score -= REPETITION_PENALTY;
        }

        let score = text::clamp_score(score);
        debug!(
            score,
            word_count,
            unique_words,
            sentiment = sentiment.as_str(),
            tone = tone.as_str(),
            repeated_phrases = repeated.len(),
            "quality scored"
        );

        QualityScore {
            score,
            word_count,
            unique_words,
            sentiment,
            tone,
            issues,
        }
    }

    fn sentiment(&self, lowered: &str) -> Sentiment {
        let positive = text::term_hits(lowered, &self.lexicon.positive);
        let negative = text::term_hits(lowered, &self.lexicon.negative);
        match majority(positive, negative) {
            Majority::First => Sentiment::Positive,
            Majority::Second => Sentiment::Negative,
            Majority::Neither => Sentiment::Neutral,
        }
    }

    fn tone(&self, lowered: &str) -> Tone {
        let formal = text::term_hits(lowered, &self.lexicon.formal);
        let casual = text::term_hits(lowered, &self.lexicon.casual);
        match majority(formal, casual) {
            Majority::First => Tone::Formal,
            Majority::Second => Tone::Casual,
            Majority::Neither => Tone::Mixed,
        }
    }
}

/// Lowercase 3-word shingles occurring more than twice across the document,
/// in order of first appearance. Shingles never span sentence boundaries.
fn repeated_phrases(content: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen = Vec::new();

    for sentence in text::sentences(content) {
        let words: Vec<String> = text::words(sentence)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();

        for window in words.windows(SHINGLE_SIZE) {
            let shingle = window.join(" ");
            let count = counts.entry(shingle.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(shingle);
            }
            *count += 1;
        }
    }

    first_seen
        .into_iter()
        .filter(|s| counts.get(s).is_some_and(|&c| c > MAX_SHINGLE_REPEATS))
        .collect()
}
