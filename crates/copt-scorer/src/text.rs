//! Tokenising helpers shared by the scorers

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence boundary pattern is valid"));

/// Vowels of the Turkish alphabet, both cases, including the dotted and
/// dotless `i` forms.
const VOWELS: &[char] = &[
    'a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü', 'A', 'E', 'I', 'İ', 'O', 'Ö', 'U', 'Ü',
];

/// Split on runs of `.`, `!` or `?`, dropping blank fragments
pub fn sentences(content: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(content)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Whitespace-separated tokens
pub fn words(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Count syllables as the number of consonant-to-vowel transitions.
/// Every word has at least one syllable.
pub fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut previous_was_vowel = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    count.max(1)
}

/// Non-overlapping occurrences of `needle` in `haystack`. Both must already
/// be lowercase; an empty needle never matches.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Sum of `occurrences` over a term list
pub fn term_hits(haystack: &str, terms: &[String]) -> usize {
    terms.iter().map(|t| occurrences(haystack, t)).sum()
}

/// `numerator / denominator` with the denominator floored at 1
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Clamp a penalty-accumulated score into 0..=100
pub fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
