//! Scoring loaded documents

use copt_core::ContentAnalysis;
use copt_scorer::ContentOptimizer;
use tracing::info;

use crate::LoadedDocument;

/// Score each loaded document, keeping input order
pub fn analyze_documents(
    optimizer: &ContentOptimizer,
    documents: Vec<LoadedDocument>,
) -> Vec<(LoadedDocument, ContentAnalysis)> {
    documents
        .into_iter()
        .map(|loaded| {
            let analysis = optimizer.analyze(&loaded.document);
            info!(
                source = %loaded.source,
                overall = analysis.overall_score,
                suggestions = analysis.suggestions.len(),
                "analyzed document"
            );
            (loaded, analysis)
        })
        .collect()
}

/// Sources whose overall score falls below `threshold`
pub fn below_threshold(results: &[(LoadedDocument, ContentAnalysis)], threshold: u8) -> Vec<&str> {
    results
        .iter()
        .filter(|(_, analysis)| analysis.needs_rewrite(threshold))
        .map(|(loaded, _)| loaded.source.as_str())
        .collect()
}
