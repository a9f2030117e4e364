//! Loading documents from files or stdin

use copt_core::{Document, Error, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

const STDIN_MARKER: &str = "-";

/// Command-line values applied on top of every loaded document
#[derive(Debug, Clone, Default)]
pub struct DocumentOverrides {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}

impl DocumentOverrides {
    /// Flag values win over values carried in a JSON body
    pub fn apply(&self, mut document: Document) -> Document {
        if let Some(title) = &self.title {
            document.title = Some(title.clone());
        }
        if let Some(meta_description) = &self.meta_description {
            document.meta_description = Some(meta_description.clone());
        }
        if !self.keywords.is_empty() {
            document.keywords = self.keywords.clone();
        }
        document
    }
}

/// A document together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub source: String,
    pub document: Document,
}

/// Load every input. No paths means stdin; `-` also means stdin and may
/// appear at most once, since stdin can only be read once.
pub fn load_documents(
    paths: &[PathBuf],
    json_input: bool,
    overrides: &DocumentOverrides,
) -> Result<Vec<LoadedDocument>> {
    let stdin_entries = paths.iter().filter(|p| is_stdin(p)).count();
    if stdin_entries > 1 {
        return Err(Error::InvalidInput(format!(
            "stdin ('{}') given {} times, it can only be read once",
            STDIN_MARKER, stdin_entries
        )));
    }

    let stdin_only = [PathBuf::from(STDIN_MARKER)];
    let paths = if paths.is_empty() { &stdin_only[..] } else { paths };

    paths
        .iter()
        .map(|path| -> Result<LoadedDocument> {
            let raw = read_source(path)?;
            let document = parse_document(&raw, json_input)?;
            debug!(source = %path.display(), bytes = raw.len(), "loaded document");
            Ok(LoadedDocument {
                source: source_label(path),
                document: overrides.apply(document),
            })
        })
        .collect()
}

/// Interpret raw input either as markdown or as a `Document` JSON body
pub fn parse_document(raw: &str, json_input: bool) -> Result<Document> {
    if json_input {
        serde_json::from_str(raw)
            .map_err(|e| Error::InvalidInput(format!("expected a document JSON object: {}", e)))
    } else {
        Ok(Document::new(raw))
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidInput(format!("cannot read {}: {}", path.display(), e))
        })
    }
}

fn source_label(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
