//! Core types for the content optimizer
//!
//! This crate defines the value types shared by the scoring engine and the
//! CLI: the input `Document`, the readability/SEO/quality sub-scores, the
//! aggregate `ContentAnalysis`, the injectable `Lexicon` and runtime
//! configuration.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_REWRITE_THRESHOLD, OptimizerConfig, OutputFormat, parse_threshold};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use types::*;
