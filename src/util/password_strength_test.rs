use super::*;

// =============================================================
// RuleBasedEvaluator
// =============================================================

#[test]
fn empty_password_scores_zero_with_all_hints() {
    let result = RuleBasedEvaluator::default().evaluate("");
    assert_eq!(result.score, 0);
    assert!(!result.is_strong);
    assert_eq!(
        result.feedback,
        vec![
            "Password should be at least 8 characters long",
            "Add lowercase letters",
            "Add uppercase letters",
            "Add numbers",
            "Add special characters",
        ]
    );
}

#[test]
fn all_rules_satisfied_scores_max() {
    let result = RuleBasedEvaluator::default().evaluate("Sup3r$ecret");
    assert_eq!(result.score, MAX_SCORE);
    assert!(result.is_strong);
    assert!(result.feedback.is_empty());
}

#[test]
fn four_rules_is_strong_by_default() {
    let result = RuleBasedEvaluator::default().evaluate("Password1");
    assert_eq!(result.score, 4);
    assert!(result.is_strong);
    assert_eq!(result.feedback, vec!["Add special characters"]);
}

#[test]
fn three_rules_is_weak() {
    let result = RuleBasedEvaluator::default().evaluate("password1");
    assert_eq!(result.score, 3);
    assert!(!result.is_strong);
}

#[test]
fn short_password_reports_length_first() {
    let result = RuleBasedEvaluator::default().evaluate("Ab1!");
    assert_eq!(result.score, 4);
    assert_eq!(result.feedback.first().map(String::as_str), Some("Password should be at least 8 characters long"));
}

#[test]
fn whitespace_is_not_a_special_character() {
    let result = RuleBasedEvaluator::default().evaluate("abc defgh");
    assert!(result.feedback.iter().any(|f| f == "Add special characters"));
}

#[test]
fn min_strong_score_is_configurable() {
    let strict = RuleBasedEvaluator { min_strong_score: MAX_SCORE };
    assert!(!strict.evaluate("Password1").is_strong);
}

// =============================================================
// Closure evaluators
// =============================================================

#[test]
fn closures_act_as_evaluators() {
    let always_strong = |_: &str| PasswordStrength { score: 5, is_strong: true, feedback: Vec::new() };
    assert!(always_strong.evaluate("x").is_strong);
}
