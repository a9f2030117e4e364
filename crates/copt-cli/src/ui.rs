//! Terminal presentation of analysis results

use colored::*;
use copt_core::{ContentAnalysis, OutputFormat, Result};
use crossterm::terminal::size;
use serde::Serialize;

use crate::LoadedDocument;

/// An analysis paired with its source, as emitted for multi-document runs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReport<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub analysis: &'a ContentAnalysis,
}

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4)).max(40);

    let title = "Content Optimizer";
    let subtitle = "Readability · SEO · Quality";

    println!();
    println!("{}", format!("┌{}┐", "─".repeat(banner_width - 2)).blue());
    for line in [title, subtitle] {
        let padding = banner_width.saturating_sub(line.chars().count() + 4);
        let text = if line == title {
            line.bold().to_string()
        } else {
            line.dimmed().to_string()
        };
        println!("{}  {}{}{}", "│".blue(), text, " ".repeat(padding), "│".blue());
    }
    println!("{}", format!("└{}┘", "─".repeat(banner_width - 2)).blue());
    println!();
}

/// Color a 0-100 score by band
fn paint_score(score: u8) -> ColoredString {
    let text = format!("{:>3}/100", score);
    if score >= 70 {
        text.green()
    } else if score >= 50 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Human-readable report for one document
pub fn render_report(source: &str, analysis: &ContentAnalysis, rewrite_threshold: u8) -> String {
    let r = &analysis.readability;
    let s = &analysis.seo;
    let q = &analysis.quality;

    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("== {} ==", source).bold()));

    let verdict = if analysis.needs_rewrite(rewrite_threshold) {
        "rewrite recommended".red().to_string()
    } else {
        "ok".green().to_string()
    };
    out.push_str(&format!(
        "Overall      {}  {}\n",
        paint_score(analysis.overall_score),
        verdict
    ));
    out.push_str(&format!(
        "Readability  {}  {}, {:.1} words/sentence, {:.1} chars/word, {} complex words\n",
        paint_score(r.score),
        r.level.as_str(),
        r.avg_sentence_length,
        r.avg_word_length,
        r.complex_words
    ));
    out.push_str(&format!(
        "SEO          {}  density {:.2}%, {} internal / {} external links, {} images with alt text\n",
        paint_score(s.score),
        s.keyword_density,
        s.internal_links,
        s.external_links,
        s.image_alt_texts
    ));
    out.push_str(&format!(
        "Quality      {}  {} words ({} unique), {} sentiment, {} tone\n",
        paint_score(q.score),
        q.word_count,
        q.unique_words,
        q.sentiment.as_str(),
        q.tone.as_str()
    ));

    if !analysis.suggestions.is_empty() {
        out.push_str(&format!("{}\n", "Suggestions:".bold()));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            out.push_str(&format!("  {} {}\n", format!("{}.", i + 1).yellow(), suggestion));
        }
    }

    out
}

/// Render every result in the requested format.
///
/// A single document in JSON form is the bare analysis object; several
/// documents become an array tagged with their source.
pub fn render(
    format: OutputFormat,
    results: &[(LoadedDocument, ContentAnalysis)],
    rewrite_threshold: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|(loaded, analysis)| render_report(&loaded.source, analysis, rewrite_threshold))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json | OutputFormat::Pretty => {
            let pretty = format == OutputFormat::Pretty;
            let rendered = match results {
                [(_, analysis)] => to_json(analysis, pretty)?,
                _ => {
                    let reports: Vec<SourceReport<'_>> = results
                        .iter()
                        .map(|(loaded, analysis)| SourceReport {
                            source: &loaded.source,
                            analysis,
                        })
                        .collect();
                    to_json(&reports, pretty)?
                }
            };
            Ok(rendered)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
