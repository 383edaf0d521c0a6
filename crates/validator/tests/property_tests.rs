//! Property-based tests for trellis-validator.

use proptest::prelude::*;
use serde_json::json;
use trellis_validator::prelude::*;

fn rules_for(field: &str, rules: Vec<Rule>) -> RuleSet {
    let mut set = RuleSet::new();
    set.insert(field.to_owned(), rules);
    set
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn string_rules_idempotent(s in ".{0,40}") {
        let rules = rules_for("value", vec![Rule::Required, Rule::min(3), Rule::max(20), Rule::Email]);
        let data = json!({ "value": s });
        let validator = RuleValidator::new();

        let r1 = validator.validate(&data, &rules, &MessageMap::new(), &AttributeMap::new());
        let r2 = validator.validate(&data, &rules, &MessageMap::new(), &AttributeMap::new());
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn numeric_bounds_match_comparison(n in -1000i64..1000, lo in -500i64..0, hi in 0i64..500) {
        let rules = rules_for("n", vec![Rule::Between(lo as f64, hi as f64)]);
        let ok = RuleValidator::new()
            .validate(&json!({ "n": n }), &rules, &MessageMap::new(), &AttributeMap::new())
            .is_ok();
        prop_assert_eq!(ok, n >= lo && n <= hi);
    }
}

// ============================================================================
// RULE STRINGS: parse(display(rule)) == rule
// ============================================================================

proptest! {
    #[test]
    fn size_rules_survive_display(n in 0u32..100_000) {
        for rule in [Rule::min(n), Rule::max(n), Rule::Size(f64::from(n))] {
            let parsed: Rule = rule.to_string().parse().unwrap();
            prop_assert_eq!(parsed, rule);
        }
    }

    #[test]
    fn in_lists_survive_display(options in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let rule = Rule::one_of(options.clone());
        let parsed: Rule = rule.to_string().parse().unwrap();
        prop_assert_eq!(parsed, Rule::In(options));
    }
}

// ============================================================================
// VALIDATE_ONLY: never reports other fields
// ============================================================================

proptest! {
    #[test]
    fn validate_only_reports_only_its_field(name in ".{0,5}", email in ".{0,10}") {
        let mut rules = RuleSet::new();
        rules.insert("name".into(), vec![Rule::Required, Rule::min(3)]);
        rules.insert("email".into(), vec![Rule::Required, Rule::Email]);

        let result = RuleValidator::new().validate_only(
            "email",
            &json!({ "name": name, "email": email }),
            &rules,
            &MessageMap::new(),
            &AttributeMap::new(),
            &DataOverrides::new(),
        );

        if let Err(err) = result {
            prop_assert!(!err.has("name"));
            prop_assert!(err.has("email"));
        }
    }
}
