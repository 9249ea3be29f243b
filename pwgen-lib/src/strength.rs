use crate::charset::SPECIAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        label(*self)
    }
}

impl std::fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(std::format_args!("{}", self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
    Exceptional,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Weak => f.write_str("Weak"),
            Self::Moderate => f.write_str("Moderate"),
            Self::Strong => f.write_str("Strong"),
            Self::VeryStrong => f.write_str("Very Strong"),
            Self::Exceptional => f.write_str("Exceptional"),
        };
    }
}

/// Scores a password by summing six checks: two length thresholds and the
/// presence of uppercase, lowercase, digit and special characters.
///
/// The highest reachable score is 6.
pub fn evaluate(password: &str) -> StrengthScore {
    let length = password.chars().count();

    // Case presence is detected by comparing against the case transforms, so
    // characters without case never count as either
    let has_uppercase = password != password.to_lowercase();
    let has_lowercase = password != password.to_uppercase();
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL.contains(c));

    let checks = [
        length >= 8,
        length >= 12,
        has_uppercase,
        has_lowercase,
        has_digits,
        has_special,
    ];

    StrengthScore(checks.iter().filter(|check| **check).count() as u8)
}

// "Exceptional" needs a score above 7, which evaluate() never produces
pub fn label(score: StrengthScore) -> StrengthLabel {
    match score.value() {
        0..=1 => StrengthLabel::Weak,
        2..=3 => StrengthLabel::Moderate,
        4..=5 => StrengthLabel::Strong,
        6..=7 => StrengthLabel::VeryStrong,
        _ => StrengthLabel::Exceptional,
    }
}
