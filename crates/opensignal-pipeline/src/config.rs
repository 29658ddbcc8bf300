use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use opensignal_brief::DEFAULT_TITLE;
use opensignal_rules::{default_rules, RuleSetConfig, TypeWeightRule};
use opensignal_transport::DEFAULT_STREAM;

use crate::error::{PipelineError, PipelineResult};

/// Configuration for a [`Pipeline`](crate::Pipeline) run.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// output = "out/run.ndjson"
/// write_brief = false
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stream the events are published on.
    pub stream: String,
    /// NDJSON output path.
    pub output: PathBuf,
    /// Whether to render the AsciiDoc brief after the sink write.
    pub write_brief: bool,
    /// Brief output path.
    pub brief_path: PathBuf,
    /// Brief document title.
    pub brief_title: String,
    /// Scoring rules in evaluation order.
    pub rules: Vec<TypeWeightRule>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stream: DEFAULT_STREAM.to_string(),
            output: PathBuf::from("out/events.ndjson"),
            write_brief: true,
            brief_path: PathBuf::from("out/daily-brief.adoc"),
            brief_title: DEFAULT_TITLE.to_string(),
            rules: default_rules(),
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> PipelineResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PipelineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The configured rules as a rule set.
    pub fn rule_set(&self) -> RuleSetConfig {
        RuleSetConfig {
            rules: self.rules.clone(),
        }
    }
}
