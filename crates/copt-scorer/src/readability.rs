//! Flesch-style reading ease tuned with Turkish syllable counting

use copt_core::{ReadabilityScore, ReadingLevel};
use tracing::debug;

use crate::text;

const MAX_AVG_SENTENCE_LENGTH: f64 = 25.0;
const MAX_AVG_WORD_LENGTH: f64 = 6.0;
const MAX_COMPLEX_WORD_RATIO: f64 = 0.15;
/// Words with more syllables than this count as complex
const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Readability scorer
#[derive(Debug, Clone, Default)]
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score the reading ease of `content`. Never fails: every denominator
    /// is floored at 1, so empty input scores as maximally easy.
    pub fn score(&self, content: &str) -> ReadabilityScore {
        let sentences = text::sentences(content);
        let words = text::words(content);

        let syllable_counts: Vec<usize> = words.iter().map(|w| text::syllables(w)).collect();
        let total_syllables: usize = syllable_counts.iter().sum();
        let total_characters: usize = words.iter().map(|w| w.chars().count()).sum();
        let complex_words = syllable_counts
            .iter()
            .filter(|&&s| s > COMPLEX_WORD_SYLLABLES)
            .count();

        let avg_sentence_length = text::ratio(words.len(), sentences.len());
        let avg_syllables_per_word = text::ratio(total_syllables, words.len());
        let avg_word_length = text::ratio(total_characters, words.len());
        let complex_ratio = text::ratio(complex_words, words.len());

        let ease = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
        let score = ease.clamp(0.0, 100.0).round() as u8;

        let mut issues = Vec::new();
        if avg_sentence_length > MAX_AVG_SENTENCE_LENGTH {
            issues.push(format!(
                "Sentences are too long (average {:.1} words)",
                avg_sentence_length
            ));
        }
        if avg_word_length > MAX_AVG_WORD_LENGTH {
            issues.push(format!(
                "Words are too long (average {:.1} characters)",
                avg_word_length
            ));
        }
        if complex_ratio > MAX_COMPLEX_WORD_RATIO {
            issues.push(format!(
                "Too many complex words ({}%)",
                (complex_ratio * 100.0).round()
            ));
        }

        debug!(
            score,
            sentences = sentences.len(),
            words = words.len(),
            avg_sentence_length,
            avg_syllables_per_word,
            complex_words,
            "readability scored"
        );

        ReadabilityScore {
            score,
            level: ReadingLevel::from_score(score),
            avg_sentence_length: text::round_to(avg_sentence_length, 1),
            avg_word_length: text::round_to(avg_word_length, 1),
            complex_words,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_easy() {
        let result = ReadabilityAnalyzer::new().score("");

        assert_eq!(result.score, 100);
        assert_eq!(result.level, ReadingLevel::Easy);
        assert_eq!(result.avg_sentence_length, 0.0);
        assert_eq!(result.avg_word_length, 0.0);
        assert_eq!(result.complex_words, 0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_short_simple_sentences() {
        // 6 words, 3 sentences, 2 syllables each:
        // 206.835 - 1.015 * 2 - 84.6 * 2 = 35.605
        let result = ReadabilityAnalyzer::new().score("Vize kolay. Evrak hazır. Yola çıkın.");

        assert_eq!(result.avg_sentence_length, 2.0);
        assert_eq!(result.score, 36);
        assert_eq!(result.level, ReadingLevel::Hard);
    }

    #[test]
    fn test_single_syllable_words_score_easy() {
        // 206.835 - 1.015 * 4 - 84.6 * 1 = 118.175, clamped
        let result = ReadabilityAnalyzer::new().score("Bu iş çok hoş. Sen de gel ki.");

        assert_eq!(result.score, 100);
        assert_eq!(result.level, ReadingLevel::Easy);
    }

    #[test]
    fn test_long_sentence_issue() {
        let sentence = vec!["ev"; 30].join(" ");
        let result = ReadabilityAnalyzer::new().score(&sentence);

        assert_eq!(result.avg_sentence_length, 30.0);
        assert_eq!(
            result.issues,
            vec!["Sentences are too long (average 30.0 words)".to_string()]
        );
    }

    #[test]
    fn test_long_and_complex_words() {
        // "uluslararasılaştırma" has 9 syllables and 20 characters
        let result = ReadabilityAnalyzer::new()
            .score("Uluslararasılaştırma süreçlerinin değerlendirilmesi.");

        assert_eq!(result.complex_words, 3);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, ReadingLevel::Hard);
        assert!(result.issues.iter().any(|i| i.starts_with("Words are too long")));
        assert!(result.issues.contains(&"Too many complex words (100%)".to_string()));
    }

    #[test]
    fn test_level_matches_score() {
        let analyzer = ReadabilityAnalyzer::new();
        for content in [
            "",
            "Bu iş çok hoş.",
            "Vize kolay. Evrak hazır.",
            "Başvuru değerlendirme süreci uzundur ve belgeler eksiksiz olmalıdır.",
        ] {
            let result = analyzer.score(content);
            assert_eq!(result.level, ReadingLevel::from_score(result.score));
            assert!(result.score <= 100);
        }
    }
}
