// Unit tests for the decision table.
//
// Tests RuleSet::decide priority ordering, strict threshold boundaries,
// absent scores, and JSON rule set loading/validation.

use std::io::Write;

use tactful::rules::{RewriteCategory, RuleSet};
use tactful::toxicity::traits::{Category, CategoryScores};
use tactful::ModerationError;

fn scores(
    toxicity: f64,
    severe: Option<f64>,
    insult: Option<f64>,
    profanity: Option<f64>,
    threat: Option<f64>,
) -> CategoryScores {
    CategoryScores {
        toxicity,
        severe_toxicity: severe,
        insult,
        profanity,
        threat,
    }
}

fn winner(s: &CategoryScores) -> Option<RewriteCategory> {
    RuleSet::default().decide(s).map(|rule| rule.rewrite)
}

// ============================================================
// Priority ordering
// ============================================================

#[test]
fn threat_beats_everything() {
    let s = scores(0.99, Some(0.99), Some(0.99), Some(0.99), Some(0.26));
    assert_eq!(winner(&s), Some(RewriteCategory::Threat));
}

#[test]
fn threat_wins_over_higher_severe() {
    let s = scores(0.1, Some(0.90), None, None, Some(0.30));
    assert_eq!(winner(&s), Some(RewriteCategory::Threat));
}

#[test]
fn severe_when_threat_at_threshold() {
    let s = scores(0.1, Some(0.26), None, None, Some(0.25));
    assert_eq!(winner(&s), Some(RewriteCategory::Severe));
}

#[test]
fn insult_checked_before_toxicity() {
    let s = scores(0.8, None, Some(0.6), None, None);
    assert_eq!(winner(&s), Some(RewriteCategory::Insult));
}

#[test]
fn profanity_before_general() {
    let s = scores(0.9, Some(0.1), Some(0.1), Some(0.31), Some(0.1));
    assert_eq!(winner(&s), Some(RewriteCategory::Profanity));
}

#[test]
fn toxicity_alone_maps_to_general() {
    let s = scores(0.36, None, None, None, None);
    assert_eq!(winner(&s), Some(RewriteCategory::General));
}

// ============================================================
// Boundaries — comparisons are strict
// ============================================================

#[test]
fn all_just_below_thresholds_is_allowed() {
    let s = scores(0.34, Some(0.24), Some(0.29), Some(0.29), Some(0.24));
    assert_eq!(winner(&s), None);
}

#[test]
fn exactly_at_every_threshold_is_allowed() {
    let s = scores(0.35, Some(0.25), Some(0.30), Some(0.30), Some(0.25));
    assert_eq!(winner(&s), None);
}

#[test]
fn toxicity_exactly_at_threshold_is_allowed() {
    let s = scores(0.35, None, None, None, None);
    assert_eq!(winner(&s), None);
}

#[test]
fn absent_scores_never_match() {
    let s = scores(0.0, None, None, None, None);
    assert_eq!(winner(&s), None);
}

#[test]
fn decide_returns_matching_category() {
    let rules = RuleSet::default();
    let s = scores(0.1, Some(0.5), None, None, None);
    let rule = rules.decide(&s).unwrap();
    assert_eq!(rule.category, Category::SevereToxicity);
    assert_eq!(rule.threshold, 0.25);
}

// ============================================================
// Catalog
// ============================================================

#[test]
fn default_catalog_sizes() {
    let rules = RuleSet::default();
    assert_eq!(rules.suggestions_for(RewriteCategory::Insult).len(), 4);
    for rewrite in [
        RewriteCategory::Threat,
        RewriteCategory::Severe,
        RewriteCategory::Insult,
        RewriteCategory::Profanity,
        RewriteCategory::General,
    ] {
        let n = rules.suggestions_for(rewrite).len();
        assert!((3..=4).contains(&n), "{rewrite} has {n} suggestions");
    }
}

// ============================================================
// Loading from JSON
// ============================================================

#[test]
fn default_rule_set_survives_json() {
    let json = serde_json::to_string(&RuleSet::default()).unwrap();
    assert_eq!(RuleSet::from_json(&json).unwrap(), RuleSet::default());
}

#[test]
fn custom_rule_set_from_file() {
    let json = r#"{
        "version": 2,
        "rules": [
            {"category": "toxicity", "threshold": 0.5, "rewrite": "general"}
        ],
        "suggestions": {"general": ["Parlons-en calmement."]}
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let rules = RuleSet::from_path(file.path()).unwrap();
    assert_eq!(rules.version, 2);
    assert_eq!(rules.rules.len(), 1);
    assert!(rules.decide(&scores(0.45, None, None, None, None)).is_none());
    assert!(rules.decide(&scores(0.51, None, None, None, None)).is_some());
}

#[test]
fn rule_without_suggestions_is_rejected() {
    let json = r#"{
        "version": 1,
        "rules": [{"category": "threat", "threshold": 0.25, "rewrite": "threat"}],
        "suggestions": {"threat": []}
    }"#;
    assert!(matches!(
        RuleSet::from_json(json),
        Err(ModerationError::InvalidRules(_))
    ));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let json = r#"{
        "version": 1,
        "rules": [{"category": "insult", "threshold": 1.5, "rewrite": "insult"}],
        "suggestions": {"insult": ["Je ne suis pas d'accord."]}
    }"#;
    assert!(matches!(
        RuleSet::from_json(json),
        Err(ModerationError::InvalidRules(_))
    ));
}

#[test]
fn empty_rule_list_is_rejected() {
    let json = r#"{"version": 1, "rules": [], "suggestions": {}}"#;
    assert!(RuleSet::from_json(json).is_err());
}

#[test]
fn unknown_category_is_rejected() {
    let json = r#"{
        "version": 1,
        "rules": [{"category": "identityAttack", "threshold": 0.2, "rewrite": "general"}],
        "suggestions": {"general": ["ok"]}
    }"#;
    assert!(matches!(
        RuleSet::from_json(json),
        Err(ModerationError::InvalidRules(_))
    ));
}

#[test]
fn missing_file_is_invalid_rules() {
    let result = RuleSet::from_path(std::path::Path::new("/nonexistent/tactful-rules.json"));
    assert!(matches!(result, Err(ModerationError::InvalidRules(_))));
}
