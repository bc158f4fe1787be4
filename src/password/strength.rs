//! Password strength scoring.
//!
//! One point per criterion, checked in a fixed order: length >= 8,
//! lowercase, uppercase, digit, special character. The 0-5 score maps
//! to six severity levels. Feedback lists a reason for every criterion
//! not met, in check order.

use std::fmt;

/// Punctuation counted as special characters by the scorer.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The six strength levels, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }

    /// Levels 0-1: candidates for the `stats` weak count.
    pub fn is_weak(self) -> bool {
        self <= Self::Weak
    }

    /// Levels 4-5: candidates for the `stats` strong count.
    pub fn is_strong(self) -> bool {
        self >= Self::Strong
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password and explain every unmet criterion.
///
/// Pure function: no side effects, no hidden state.
pub fn score(password: &str) -> (Strength, Vec<String>) {
    let mut points = 0u8;
    let mut feedback = Vec::new();

    if password.chars().count() >= 8 {
        points += 1;
    } else {
        feedback.push("shorter than 8 characters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    } else {
        feedback.push("no lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    } else {
        feedback.push("no uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    } else {
        feedback.push("no digits".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        points += 1;
    } else {
        feedback.push("no special characters".to_string());
    }

    (Strength::from_score(points), feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_lowercase_letter_scores_weak() {
        // "a" passes only the lowercase check: score 1, four reasons.
        let (level, feedback) = score("a");
        assert_eq!(level, Strength::Weak);
        assert_eq!(feedback.len(), 4);
    }

    #[test]
    fn all_criteria_met_scores_very_strong() {
        let (level, feedback) = score("Abcdefg1!");
        assert_eq!(level, Strength::VeryStrong);
        assert!(feedback.is_empty());
    }

    #[test]
    fn empty_password_scores_very_weak() {
        let (level, feedback) = score("");
        assert_eq!(level, Strength::VeryWeak);
        assert_eq!(feedback.len(), 5);
    }

    #[test]
    fn feedback_follows_check_order() {
        let (_, feedback) = score("");
        assert_eq!(
            feedback,
            vec![
                "shorter than 8 characters",
                "no lowercase letters",
                "no uppercase letters",
                "no digits",
                "no special characters",
            ]
        );
    }

    #[test]
    fn long_digits_only_scores_fair() {
        // Length + digits, nothing else.
        let (level, feedback) = score("12345678");
        assert_eq!(level, Strength::Fair);
        assert_eq!(feedback.len(), 3);
    }

    #[test]
    fn weak_and_strong_buckets() {
        assert!(Strength::VeryWeak.is_weak());
        assert!(Strength::Weak.is_weak());
        assert!(!Strength::Fair.is_weak());
        assert!(!Strength::Good.is_strong());
        assert!(Strength::Strong.is_strong());
        assert!(Strength::VeryStrong.is_strong());
    }
}
