use tracing::debug;

use opensignal_envelope::Event;

/// Title used by [`generate_brief`].
pub const DEFAULT_TITLE: &str = "OpenSignal Daily Brief";

/// Renders enriched events into an AsciiDoc brief.
///
/// Pure: the same events always produce the same text. Input order is kept
/// and nothing is sorted or deduplicated.
#[derive(Clone, Debug)]
pub struct BriefGenerator {
    title: String,
}

impl BriefGenerator {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the brief.
    pub fn generate(&self, events: &[Event]) -> String {
        let mut lines = vec![format!("= {}", self.title), String::new()];

        for event in events {
            lines.push(format!("== {}", event.event_type));
            lines.push(format!("*Source:* {}", event.source));
            lines.push(format!("*Risk Score:* {}", format_score(event.risk.score)));
            push_list(&mut lines, "Applied Rules", &event.risk.rules_applied);
            push_list(&mut lines, "Explanation", &event.risk.explain);
            lines.push(String::new());
        }

        debug!(events = events.len(), lines = lines.len(), "brief rendered");
        lines.join("\n")
    }
}

impl Default for BriefGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Bulleted list under a bold label. Empty lists render nothing.
fn push_list(lines: &mut Vec<String>, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("*{label}:*"));
    lines.push(String::new());
    lines.extend(items.iter().map(|item| format!("* {item}")));
}

/// Shortest decimal form of a score, always with a fractional part
/// (`0.0`, `0.5`, `0.7`).
pub fn format_score(score: f64) -> String {
    let text = score.to_string();
    if score.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Render a brief with the default title.
pub fn generate_brief(events: &[Event]) -> String {
    BriefGenerator::default().generate(events)
}
