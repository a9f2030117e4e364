//! On-page SEO checks over markdown content
//!
//! Starts from 100 and subtracts a fixed penalty for every failed check.
//! Penalties are independent and may compound.

use copt_core::SeoScore;
use regex::Regex;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::text;

const TITLE_LENGTH: RangeInclusive<usize> = 30..=60;
const META_DESCRIPTION_LENGTH: RangeInclusive<usize> = 120..=160;
const MIN_H2_HEADINGS: usize = 2;
const MIN_INTERNAL_LINKS: usize = 2;
const MIN_KEYWORD_DENSITY: f64 = 0.5;
const MAX_KEYWORD_DENSITY: f64 = 3.0;

const META_TITLE_PENALTY: i32 = 15;
const META_DESCRIPTION_PENALTY: i32 = 15;
const HEADING_PENALTY: i32 = 10;
const LOW_DENSITY_PENALTY: i32 = 10;
const HIGH_DENSITY_PENALTY: i32 = 15;
const INTERNAL_LINK_PENALTY: i32 = 10;
const ALT_TEXT_PENALTY: i32 = 5;

/// SEO scorer holding its compiled markdown patterns
#[derive(Debug, Clone)]
pub struct SeoAnalyzer {
    h1: Regex,
    h2: Regex,
    internal_link: Regex,
    external_link: Regex,
    image: Regex,
}

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self {
            // A single `#` then whitespace; `## ` lines never match here
            h1: Regex::new(r"(?m)^#\s").expect("h1 pattern is valid"),
            h2: Regex::new(r"(?m)^##\s").expect("h2 pattern is valid"),
            internal_link: Regex::new(r"\[[^\]]+\]\(/[^)]*\)")
                .expect("internal link pattern is valid"),
            external_link: Regex::new(r"\[[^\]]+\]\(https?://[^)]*\)")
                .expect("external link pattern is valid"),
            image: Regex::new(r"!\[([^\]]*)\]").expect("image pattern is valid"),
        }
    }

    /// Score `content` against the optional title, meta description and
    /// target keywords.
    pub fn score(
        &self,
        content: &str,
        title: Option<&str>,
        meta_description: Option<&str>,
        keywords: &[String],
    ) -> SeoScore {
        let mut score: i32 = 100;
        let mut issues = Vec::new();

        let has_meta_title = within(title, &TITLE_LENGTH);
        if !has_meta_title {
            issues.push(length_issue("Meta title", title, &TITLE_LENGTH));
            score -= META_TITLE_PENALTY;
        }

        let has_meta_description = within(meta_description, &META_DESCRIPTION_LENGTH);
        if !has_meta_description {
            issues.push(length_issue(
                "Meta description",
                meta_description,
                &META_DESCRIPTION_LENGTH,
            ));
            score -= META_DESCRIPTION_PENALTY;
        }

        let h1_count = self.h1.find_iter(content).count();
        let h2_count = self.h2.find_iter(content).count();
        let heading_structure = h1_count >= 1 && h2_count >= MIN_H2_HEADINGS;
        if !heading_structure {
            issues.push(format!(
                "Heading structure is incomplete (found {} H1 and {} H2, need at least 1 H1 and 2 H2)",
                h1_count, h2_count
            ));
            score -= HEADING_PENALTY;
        }

        let keyword_density = self.keyword_density(content, keywords);
        if let Some(density) = keyword_density {
            if density < MIN_KEYWORD_DENSITY {
                issues.push(format!(
                    "Keyword density is too low ({:.2}%, aim for 0.5-3%)",
                    density
                ));
                score -= LOW_DENSITY_PENALTY;
            } else if density > MAX_KEYWORD_DENSITY {
                issues.push(format!(
                    "Keyword density is too high ({:.2}%), avoid keyword stuffing",
                    density
                ));
                score -= HIGH_DENSITY_PENALTY;
            }
        }

        let internal_links = self.internal_link.find_iter(content).count();
        if internal_links < MIN_INTERNAL_LINKS {
            issues.push(format!(
                "Add more internal links (found {}, at least {} recommended)",
                internal_links, MIN_INTERNAL_LINKS
            ));
            score -= INTERNAL_LINK_PENALTY;
        }

        let external_links = self.external_link.find_iter(content).count();

        let mut images = 0;
        let mut image_alt_texts = 0;
        for caps in self.image.captures_iter(content) {
            images += 1;
            if caps.get(1).is_some_and(|alt| !alt.as_str().trim().is_empty()) {
                image_alt_texts += 1;
            }
        }
        if images > 0 && image_alt_texts < images {
            issues.push(format!(
                "{} of {} images are missing alt text",
                images - image_alt_texts,
                images
            ));
            score -= ALT_TEXT_PENALTY;
        }

        let score = text::clamp_score(score);
        debug!(
            score,
            h1_count,
            h2_count,
            internal_links,
            external_links,
            images,
            "seo scored"
        );

        SeoScore {
            score,
            keyword_density: keyword_density.map_or(0.0, |d| text::round_to(d, 2)),
            has_meta_title,
            has_meta_description,
            heading_structure,
            internal_links,
            external_links,
            image_alt_texts,
            issues,
        }
    }

    /// Keyword occurrences per 100 words, or `None` when there are no usable
    /// keywords. Matching is case-insensitive substring matching.
    fn keyword_density(&self, content: &str, keywords: &[String]) -> Option<f64> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return None;
        }

        let lowered = content.to_lowercase();
        let hits = text::term_hits(&lowered, &keywords);
        Some(text::ratio(hits, text::words(content).len()) * 100.0)
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn within(value: Option<&str>, range: &RangeInclusive<usize>) -> bool {
    value.is_some_and(|v| range.contains(&v.chars().count()))
}

fn length_issue(label: &str, value: Option<&str>, range: &RangeInclusive<usize>) -> String {
    match value {
        Some(v) => format!(
            "{} should be {}-{} characters (currently {})",
            label,
            range.start(),
            range.end(),
            v.chars().count()
        ),
        None => format!(
            "{} is missing ({}-{} characters recommended)",
            label,
            range.start(),
            range.end()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_keywords() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_empty_content_takes_every_structural_penalty() {
        let result = SeoAnalyzer::new().score("", None, None, &no_keywords());

        // title, description, headings, internal links
        assert_eq!(result.score, 50);
        assert!(!result.has_meta_title);
        assert!(!result.has_meta_description);
        assert!(!result.heading_structure);
        assert_eq!(result.keyword_density, 0.0);
        assert_eq!(result.issues.len(), 4);
        assert_eq!(
            result.issues[0],
            "Meta title is missing (30-60 characters recommended)"
        );
    }

    #[test]
    fn test_title_length_bounds() {
        let analyzer = SeoAnalyzer::new();
        let check = |title: &str| {
            analyzer
                .score("", Some(title), None, &no_keywords())
                .has_meta_title
        };

        assert!(!check(&"a".repeat(29)));
        assert!(check(&"a".repeat(30)));
        assert!(check(&"a".repeat(60)));
        assert!(!check(&"a".repeat(61)));
        // Counted in characters, not bytes
        assert!(check(&"ş".repeat(40)));
    }

    #[test]
    fn test_short_title_issue_reports_length() {
        let result = SeoAnalyzer::new().score("", Some("Vize"), None, &no_keywords());
        assert_eq!(
            result.issues[0],
            "Meta title should be 30-60 characters (currently 4)"
        );
    }

    #[test]
    fn test_meta_description_bounds() {
        let analyzer = SeoAnalyzer::new();
        let check = |desc: &str| {
            analyzer
                .score("", None, Some(desc), &no_keywords())
                .has_meta_description
        };

        assert!(!check(&"d".repeat(119)));
        assert!(check(&"d".repeat(120)));
        assert!(check(&"d".repeat(160)));
        assert!(!check(&"d".repeat(161)));
    }

    #[test]
    fn test_h1_pattern_does_not_match_h2() {
        let analyzer = SeoAnalyzer::new();

        let only_h2 = "## Bir\n## İki\n## Üç";
        assert!(!analyzer.score(only_h2, None, None, &no_keywords()).heading_structure);

        let complete = "# Başlık\n\n## Bir\nmetin\n## İki\n";
        assert!(analyzer.score(complete, None, None, &no_keywords()).heading_structure);

        let one_h2 = "# Başlık\n## Bir\n### Alt";
        assert!(!analyzer.score(one_h2, None, None, &no_keywords()).heading_structure);
    }

    #[test]
    fn test_headings_must_start_the_line() {
        let content = "metin # değil\n ## değil\n## Bir\n## İki";
        assert!(
            !SeoAnalyzer::new()
                .score(content, None, None, &no_keywords())
                .heading_structure
        );
    }

    #[test]
    fn test_link_classification() {
        let content = "[a](/vize) [b](/ulkeler/almanya) [c](https://example.com) \
                       [d](http://example.org/x) [e](mailto:info@example.com)";
        let result = SeoAnalyzer::new().score(content, None, None, &no_keywords());

        assert_eq!(result.internal_links, 2);
        assert_eq!(result.external_links, 2);
        assert!(!result.issues.iter().any(|i| i.contains("internal links")));
    }

    #[test]
    fn test_image_alt_text_coverage() {
        let analyzer = SeoAnalyzer::new();

        let all_alt = "![Pasaport](/p.png) ![Vize](/v.png)";
        let result = analyzer.score(all_alt, None, None, &no_keywords());
        assert_eq!(result.image_alt_texts, 2);
        assert!(!result.issues.iter().any(|i| i.contains("alt text")));

        let missing = "![](/p.png) ![ ](/q.png) ![Vize](/v.png)";
        let result = analyzer.score(missing, None, None, &no_keywords());
        assert_eq!(result.image_alt_texts, 1);
        assert!(result.issues.contains(&"2 of 3 images are missing alt text".to_string()));
    }

    #[test]
    fn test_keyword_density_low() {
        let content = format!("vize {}", vec!["metin"; 299].join(" "));
        let keywords = vec!["Vize".to_string()];
        let result = SeoAnalyzer::new().score(&content, None, None, &keywords);

        assert_eq!(result.keyword_density, 0.33);
        assert!(result.issues.iter().any(|i| i.starts_with("Keyword density is too low")));
    }

    #[test]
    fn test_keyword_density_in_range_has_no_issue() {
        let content = format!("vize {}", vec!["metin"; 99].join(" "));
        let keywords = vec!["vize".to_string()];
        let result = SeoAnalyzer::new().score(&content, None, None, &keywords);

        assert_eq!(result.keyword_density, 1.0);
        assert!(!result.issues.iter().any(|i| i.contains("Keyword density")));
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let keywords = vec!["  ".to_string()];
        let result = SeoAnalyzer::new().score("metin", None, None, &keywords);
        assert_eq!(result.keyword_density, 0.0);
        assert!(!result.issues.iter().any(|i| i.contains("Keyword density")));
    }

    #[test]
    fn test_keywords_accumulate_across_list() {
        let content = format!("Vize pasaport {}", vec!["metin"; 98].join(" "));
        let keywords = vec!["vize".to_string(), "PASAPORT".to_string()];
        let result = SeoAnalyzer::new().score(&content, None, None, &keywords);
        assert_eq!(result.keyword_density, 2.0);
    }

    #[test]
    fn test_penalties_compound() {
        let content = format!("![](/x.png) {}", vec!["vize"; 10].join(" "));
        let keywords = vec!["vize".to_string()];
        let result = SeoAnalyzer::new().score(&content, Some("x"), Some("y"), &keywords);

        // 15 + 15 + 10 + 15 + 10 + 5 = 70 in penalties
        assert_eq!(result.score, 30);
        assert_eq!(result.issues.len(), 6);
    }
}
