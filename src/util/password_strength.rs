//! Password strength scoring.
//!
//! The sign-up form treats the evaluator as a black box and only reads the
//! `PasswordStrength` it returns, so alternative policies plug in through
//! `PasswordEvaluator`.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

/// Highest score any evaluator may report.
pub const MAX_SCORE: u8 = 5;

pub const MIN_LENGTH: usize = 8;
pub const DEFAULT_MIN_STRONG_SCORE: u8 = 4;

/// Result of scoring one password value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0..=`MAX_SCORE`.
    pub score: u8,
    pub is_strong: bool,
    /// Hints for the rules the password fails, in rule order.
    pub feedback: Vec<String>,
}

/// Pure, synchronous password scoring function.
pub trait PasswordEvaluator {
    fn evaluate(&self, password: &str) -> PasswordStrength;
}

impl<F> PasswordEvaluator for F
where
    F: Fn(&str) -> PasswordStrength,
{
    fn evaluate(&self, password: &str) -> PasswordStrength {
        self(password)
    }
}

/// One point per satisfied rule: length, lowercase, uppercase, digit, symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleBasedEvaluator {
    pub min_strong_score: u8,
}

impl Default for RuleBasedEvaluator {
    fn default() -> Self {
        Self { min_strong_score: DEFAULT_MIN_STRONG_SCORE }
    }
}

impl PasswordEvaluator for RuleBasedEvaluator {
    fn evaluate(&self, password: &str) -> PasswordStrength {
        let rules: [(bool, &str); 5] = [
            (password.chars().count() >= MIN_LENGTH, "Password should be at least 8 characters long"),
            (password.chars().any(char::is_lowercase), "Add lowercase letters"),
            (password.chars().any(char::is_uppercase), "Add uppercase letters"),
            (password.chars().any(|c| c.is_ascii_digit()), "Add numbers"),
            (password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()), "Add special characters"),
        ];

        let mut score = 0u8;
        let mut feedback = Vec::new();
        for (passed, hint) in rules {
            if passed {
                score += 1;
            } else {
                feedback.push(hint.to_owned());
            }
        }

        PasswordStrength { score, is_strong: score >= self.min_strong_score, feedback }
    }
}
