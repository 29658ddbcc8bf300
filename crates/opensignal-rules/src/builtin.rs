//! The standard OpenSignal ruleset.

use crate::rule::TypeWeightRule;

/// Baseline weight for macroeconomic indicator updates.
pub fn economic_baseline() -> TypeWeightRule {
    TypeWeightRule {
        id: "economic_baseline".into(),
        event_type: "economic_indicator_update".into(),
        weight: 0.2,
        explanation: "Baseline risk weight applied for economic indicator event".into(),
    }
}

/// Baseline weight for sanction list updates.
pub fn base_sanction_weight() -> TypeWeightRule {
    TypeWeightRule {
        id: "base_sanction_weight".into(),
        event_type: "sanction_update".into(),
        weight: 0.5,
        explanation: "Baseline risk weight applied for sanction event".into(),
    }
}

/// Default rules in evaluation order.
pub fn default_rules() -> Vec<TypeWeightRule> {
    vec![economic_baseline(), base_sanction_weight()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_ordered() {
        let rules = default_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, "economic_baseline");
        assert_eq!(rules[1].id, "base_sanction_weight");
        for rule in &rules {
            rule.validate().unwrap();
        }
    }
}
