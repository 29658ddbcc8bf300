//! Synthetic signal feeds for demos and load generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use opensignal_envelope::Payload;

/// Event types and their originating feeds.
pub const EVENT_TYPES: [(&str, &str); 3] = [
    ("sanction_update", "public_list"),
    ("economic_indicator_update", "public_stats"),
    ("policy_announcement", "public_bulletin"),
];

const INDICATORS: [&str; 3] = ["GDP", "inflation", "unemployment"];
const TOPICS: [&str; 3] = ["finance", "trade", "security"];

/// Inputs for one call to the envelope factory.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSignal {
    pub event_type: &'static str,
    pub source: &'static str,
    pub data: Payload,
}

fn payload(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}

// ---------------------------------------------------------------------------
// DemoSource
// ---------------------------------------------------------------------------

/// Deterministic feed cycling sanction, economic, and policy events.
#[derive(Clone, Debug)]
pub struct DemoSource {
    index: usize,
    count: usize,
}

impl DemoSource {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }
}

impl Iterator for DemoSource {
    type Item = SyntheticSignal;

    fn next(&mut self) -> Option<SyntheticSignal> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index;
        self.index += 1;

        let (event_type, source) = EVENT_TYPES[i % 3];
        let data = match i % 3 {
            0 => json!({ "entity": format!("Entity {i}") }),
            1 => json!({ "indicator": "GDP", "seq": i }),
            _ => json!({ "title": format!("Policy {i}") }),
        };
        Some(SyntheticSignal {
            event_type,
            source,
            data: payload(data),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DemoSource {}

// ---------------------------------------------------------------------------
// LoadSource
// ---------------------------------------------------------------------------

/// Seeded random feed. The same seed always yields the same sequence.
#[derive(Clone, Debug)]
pub struct LoadSource {
    rng: StdRng,
    index: usize,
    count: usize,
}

impl LoadSource {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            count,
        }
    }
}

impl Iterator for LoadSource {
    type Item = SyntheticSignal;

    fn next(&mut self) -> Option<SyntheticSignal> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index;
        self.index += 1;

        let (event_type, source) = EVENT_TYPES[self.rng.gen_range(0..EVENT_TYPES.len())];
        let data = match event_type {
            "sanction_update" => json!({
                "entity": format!("Entity {i}"),
                "list": "demo_sanctions_list",
            }),
            "economic_indicator_update" => {
                let indicator = INDICATORS[self.rng.gen_range(0..INDICATORS.len())];
                // Four decimal places.
                let value = (self.rng.gen::<f64>() * 100.0 * 10_000.0).round() / 10_000.0;
                json!({ "indicator": indicator, "value": value, "seq": i })
            }
            _ => json!({
                "title": format!("Policy bulletin {i}"),
                "topic": TOPICS[self.rng.gen_range(0..TOPICS.len())],
            }),
        };
        Some(SyntheticSignal {
            event_type,
            source,
            data: payload(data),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LoadSource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_cycles_types() {
        let kinds: Vec<&str> = DemoSource::new(6).map(|s| s.event_type).collect();
        assert_eq!(
            kinds,
            vec![
                "sanction_update",
                "economic_indicator_update",
                "policy_announcement",
                "sanction_update",
                "economic_indicator_update",
                "policy_announcement",
            ]
        );
    }

    #[test]
    fn demo_payloads() {
        let signals: Vec<_> = DemoSource::new(3).collect();
        assert_eq!(signals[0].data["entity"], "Entity 0");
        assert_eq!(signals[0].source, "public_list");
        assert_eq!(signals[1].data["indicator"], "GDP");
        assert_eq!(signals[1].data["seq"], 1);
        assert_eq!(signals[2].data["title"], "Policy 2");
    }

    #[test]
    fn demo_respects_count() {
        assert_eq!(DemoSource::new(0).count(), 0);
        assert_eq!(DemoSource::new(10).len(), 10);
    }

    #[test]
    fn load_is_repeatable_for_a_seed() {
        let a: Vec<_> = LoadSource::new(50, 42).collect();
        let b: Vec<_> = LoadSource::new(50, 42).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn load_differs_across_seeds() {
        let a: Vec<_> = LoadSource::new(50, 1).collect();
        let b: Vec<_> = LoadSource::new(50, 2).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn load_payload_shapes() {
        for signal in LoadSource::new(200, 7) {
            match signal.event_type {
                "sanction_update" => {
                    assert_eq!(signal.data["list"], "demo_sanctions_list");
                    assert_eq!(signal.source, "public_list");
                }
                "economic_indicator_update" => {
                    let value = signal.data["value"].as_f64().unwrap();
                    assert!((0.0..=100.0).contains(&value));
                    assert!(INDICATORS.contains(&signal.data["indicator"].as_str().unwrap()));
                }
                "policy_announcement" => {
                    assert!(TOPICS.contains(&signal.data["topic"].as_str().unwrap()));
                }
                other => panic!("unexpected type {other}"),
            }
        }
    }
}
