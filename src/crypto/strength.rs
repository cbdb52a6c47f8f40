//! Password strength scoring for the create flow.
//!
//! The vault engine never scores passwords itself; the create flow asks a
//! [`StrengthScorer`] for a 0-4 level and rejects anything below the
//! configured minimum.

/// Result of scoring a candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    /// 0 (trivially guessable) through 4 (strong).
    pub level: u8,
    /// Human-readable hints for improving the password.
    pub suggestions: Vec<String>,
}

impl Strength {
    /// Display label for the level.
    pub fn label(&self) -> &'static str {
        match self.level {
            0 | 1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }
}

/// Anything that can rate a password.
pub trait StrengthScorer {
    fn score(&self, text: &str) -> Strength;
}

/// Guess-count estimate from `zxcvbn`: dictionary words, keyboard walks,
/// l33t substitutions, dates and repeats all count against the password.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, text: &str) -> Strength {
        if text.is_empty() {
            return Strength {
                level: 0,
                suggestions: vec!["Enter a password.".to_string()],
            };
        }

        let estimate = zxcvbn::zxcvbn(text, &[]);

        let mut suggestions = Vec::new();
        if let Some(feedback) = estimate.feedback() {
            if let Some(warning) = feedback.warning() {
                suggestions.push(warning.to_string());
            }
            suggestions.extend(feedback.suggestions().iter().map(ToString::to_string));
        }

        Strength {
            level: estimate.score() as u8,
            suggestions,
        }
    }
}
