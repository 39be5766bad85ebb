// tests/grammar.rs
use lsys_canvas::{ExpandError, ParseRuleError, RuleTable, expand, expand_bounded};

fn bush_rules() -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert('F', "F[+F]F[-F]F");
    rules
}

#[test]
fn test_zero_iterations_returns_axiom() {
    let rules = bush_rules();
    assert_eq!(expand("F", &rules, 0), "F");
    assert_eq!(expand("", &rules, 0), "");
    assert_eq!(expand("X+Y", &rules, 0), "X+Y");
}

#[test]
fn test_unmapped_symbols_are_fixed_points() {
    // Punctuation and placeholders survive expansion untouched.
    let empty = RuleTable::new();
    assert_eq!(expand("X", &empty, 1), "X");
    assert_eq!(expand("+-[]", &empty, 5), "+-[]");
}

#[test]
fn test_rewrite_is_parallel_not_recursive() {
    // F -> FF doubles the string once per generation. A recursive
    // substitution would rewrite the freshly produced characters within
    // the same pass and blow up differently.
    let mut rules = RuleTable::new();
    rules.insert('F', "FF");
    assert_eq!(expand("F", &rules, 1), "FF");
    assert_eq!(expand("F", &rules, 2), "FFFF");
    assert_eq!(expand("F", &rules, 3), "FFFFFFFF");
}

#[test]
fn test_bush_rule_single_generation() {
    let rules = bush_rules();
    assert_eq!(expand("F", &rules, 1), "F[+F]F[-F]F");
}

#[test]
fn test_empty_replacement_erases_symbol() {
    let rules: RuleTable = "F:".parse().unwrap();
    assert_eq!(expand("F+F", &rules, 1), "+");
}

#[test]
fn test_parse_rules_basic() {
    let rules: RuleTable = "F:FF, X:F+X".parse().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.get('F'), Some("FF"));
    assert_eq!(rules.get('X'), Some("F+X"));
    assert_eq!(rules.get('Y'), None);
}

#[test]
fn test_parse_rules_round_trip() {
    let rules: RuleTable = "F:FF, X:F+X".parse().unwrap();
    let reparsed: RuleTable = rules.to_string().parse().unwrap();
    assert_eq!(rules, reparsed);
}

#[test]
fn test_parse_skips_empty_segments() {
    let rules: RuleTable = "F:FF,".parse().unwrap();
    assert_eq!(rules.len(), 1);
}

#[test]
fn test_parse_rejects_missing_separator() {
    let err = "FFF".parse::<RuleTable>().unwrap_err();
    assert_eq!(
        err,
        ParseRuleError::MissingSeparator {
            segment: "FFF".into()
        }
    );
}

#[test]
fn test_parse_rejects_extra_separator() {
    let err = "F:F:F".parse::<RuleTable>().unwrap_err();
    assert_eq!(
        err,
        ParseRuleError::ExtraSeparator {
            segment: "F:F:F".into()
        }
    );
}

#[test]
fn test_parse_rejects_multi_character_symbol() {
    let err = "AB:F".parse::<RuleTable>().unwrap_err();
    assert_eq!(err, ParseRuleError::BadSymbol { symbol: "AB".into() });
}

#[test]
fn test_bounded_expansion_within_limit() {
    let mut rules = RuleTable::new();
    rules.insert('F', "FF");
    // 2^4 = 16 characters, comfortably under the cap.
    assert_eq!(
        expand_bounded("F", &rules, 4, 100).unwrap(),
        expand("F", &rules, 4)
    );
}

#[test]
fn test_bounded_expansion_trips_the_limit() {
    let mut rules = RuleTable::new();
    rules.insert('F', "FF");
    // Doubling from 1: first generation over 100 characters is the 7th (128).
    let err = expand_bounded("F", &rules, 10, 100).unwrap_err();
    assert_eq!(
        err,
        ExpandError::OutputLimitExceeded {
            generation: 7,
            limit: 100
        }
    );
}
