//! Snapshot tests for core types

#[cfg(test)]
mod snapshot_tests {
    use crate::{
        ContentAnalysis, Lexicon, QualityScore, ReadabilityScore, ReadingLevel, SeoScore,
        Sentiment, Tone,
    };
    use insta::{assert_json_snapshot, assert_snapshot};

    fn sample_analysis() -> ContentAnalysis {
        ContentAnalysis {
            overall_score: 64,
            readability: ReadabilityScore {
                score: 45,
                level: ReadingLevel::Hard,
                avg_sentence_length: 27.5,
                avg_word_length: 6.2,
                complex_words: 40,
                issues: vec!["Sentences are too long (average 27.5 words)".to_string()],
            },
            seo: SeoScore {
                score: 75,
                keyword_density: 1.25,
                has_meta_title: true,
                has_meta_description: false,
                heading_structure: true,
                internal_links: 3,
                external_links: 1,
                image_alt_texts: 0,
                issues: vec!["Meta description should be 120-160 characters".to_string()],
            },
            quality: QualityScore {
                score: 80,
                word_count: 420,
                unique_words: 250,
                sentiment: Sentiment::Positive,
                tone: Tone::Mixed,
                issues: vec!["Content could be longer (420 words, 500+ recommended)".to_string()],
            },
            suggestions: vec![
                "Simplify the language: use shorter sentences and plainer words".to_string(),
                "Sentences are too long (average 27.5 words)".to_string(),
            ],
        }
    }

    #[test]
    fn test_quality_score_wire_shape() {
        let analysis = sample_analysis();

        assert_json_snapshot!(analysis.quality, @r###"
        {
          "score": 80,
          "wordCount": 420,
          "uniqueWords": 250,
          "sentiment": "positive",
          "tone": "mixed",
          "issues": [
            "Content could be longer (420 words, 500+ recommended)"
          ]
        }
        "###);
    }

    #[test]
    fn test_analysis_top_level_keys() {
        let value = serde_json::to_value(sample_analysis()).unwrap();
        let object = value.as_object().unwrap();

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        for key in ["overallScore", "readability", "seo", "quality", "suggestions"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(value["readability"]["level"], "hard");
        assert_eq!(value["readability"]["avgSentenceLength"], 27.5);
        assert_eq!(value["seo"]["hasMetaDescription"], false);
        assert_eq!(value["seo"]["imageAltTexts"], 0);
    }

    #[test]
    fn test_rewrite_brief_snapshot() {
        let brief = sample_analysis().rewrite_brief();

        assert_snapshot!(brief.trim_end(), @r###"
        Rewrite the content to raise its score from 64/100. Address the following:
        1. Simplify the language: use shorter sentences and plainer words
        2. Sentences are too long (average 27.5 words)
        "###);
    }

    #[test]
    fn test_rewrite_decision() {
        let analysis = sample_analysis();
        assert!(analysis.needs_rewrite(70));
        assert!(!analysis.needs_rewrite(64));
        assert!(!analysis.needs_rewrite(0));
    }

    #[test]
    fn test_rewrite_brief_empty_without_suggestions() {
        let mut analysis = sample_analysis();
        analysis.suggestions.clear();
        assert_eq!(analysis.rewrite_brief(), "");
    }

    #[test]
    fn test_default_lexicon_serializes_by_category() {
        let value = serde_json::to_value(Lexicon::default()).unwrap();

        assert_eq!(
            value["formal"],
            serde_json::json!(["dolayısıyla", "nitekim", "ancak", "lakin", "bilakis"])
        );
        assert_eq!(value["casual"].as_array().map(Vec::len), Some(5));
    }
}
