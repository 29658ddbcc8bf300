//! Transparent, additive risk scoring for OpenSignal events.
//!
//! The [`RuleEngine`] runs an ordered list of [`Rule`]s over an event. Rules
//! are evaluated independently: each one that matches adds its weight to the
//! score and appends its id and explanation to the event's risk trail. No
//! rule can lower the score or override another rule's contribution.
//!
//! # Quick Start
//!
//! ```rust
//! use opensignal_envelope::{create_event, Payload};
//! use opensignal_rules::RuleEngine;
//!
//! let engine = RuleEngine::with_default_rules();
//! let event = create_event("sanction_update", "public_list", Payload::new());
//! let enriched = engine.apply(event);
//! assert_eq!(enriched.risk.score, 0.5);
//! assert_eq!(enriched.risk.rules_applied, vec!["base_sanction_weight"]);
//! ```

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod rule;

pub use builtin::{base_sanction_weight, default_rules, economic_baseline};
pub use config::RuleSetConfig;
pub use engine::{apply_rules, RuleEngine};
pub use error::{Result, RuleError};
pub use rule::{Rule, RuleHit, TypeWeightRule};
