//! Runtime configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::{Error, Lexicon, Result};

pub const DEFAULT_REWRITE_THRESHOLD: u8 = 70;

/// How analysis results are written to stdout
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            other => Err(Error::Configuration(format!(
                "unknown output format '{}', expected text, json or pretty",
                other
            ))),
        }
    }
}

/// Configuration for the optimizer binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizerConfig {
    pub lexicon_path: Option<PathBuf>,
    pub rewrite_threshold: u8,
    pub format: OutputFormat,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            rewrite_threshold: DEFAULT_REWRITE_THRESHOLD,
            format: OutputFormat::Text,
        }
    }
}

impl OptimizerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lexicon_path = lookup("CONTENT_OPTIMIZER_LEXICON")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let rewrite_threshold = match lookup("CONTENT_OPTIMIZER_REWRITE_THRESHOLD") {
            Some(raw) => parse_threshold(&raw)?,
            None => DEFAULT_REWRITE_THRESHOLD,
        };

        let format = match lookup("CONTENT_OPTIMIZER_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            lexicon_path,
            rewrite_threshold,
            format,
        })
    }

    /// Resolve the lexicon to use. A configured file that cannot be read
    /// falls back to the default vocabulary with a warning.
    pub fn load_lexicon(&self) -> Lexicon {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_file(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "falling back to default lexicon");
                Lexicon::default()
            }),
            None => Lexicon::default(),
        }
    }
}

/// Parse a 0..=100 score threshold
pub fn parse_threshold(raw: &str) -> Result<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|t| *t <= 100)
        .ok_or_else(|| {
            Error::Configuration(format!(
                "rewrite threshold must be an integer between 0 and 100, got '{}'",
                raw
            ))
        })
}
