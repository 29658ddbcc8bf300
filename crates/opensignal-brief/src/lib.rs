//! Human-readable briefs for batches of enriched events.
//!
//! The output is AsciiDoc: a document title, then one section per event in
//! input order with its source, risk score, and (when present) the rules
//! that fired and their explanations.

mod generator;

pub use generator::{format_score, generate_brief, BriefGenerator, DEFAULT_TITLE};
