use serde::{Deserialize, Serialize};

use crate::builtin::default_rules;
use crate::error::Result;
use crate::rule::TypeWeightRule;

/// Declarative rule set, loadable from TOML.
///
/// ```toml
/// [[rules]]
/// id = "base_sanction_weight"
/// event_type = "sanction_update"
/// weight = 0.5
/// explanation = "Baseline risk weight applied for sanction event"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<TypeWeightRule>,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

impl RuleSetConfig {
    /// Parse a rule set from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
