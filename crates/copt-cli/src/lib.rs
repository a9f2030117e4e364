//! CLI interface for the content optimizer

mod input;
mod runner;
mod ui;


pub use input::{DocumentOverrides, LoadedDocument, load_documents, parse_document};
pub use runner::{analyze_documents, below_threshold};
pub use ui::{SourceReport, display_banner, render, render_report};

// Re-export core types
pub use copt_core::{Error, Result};
