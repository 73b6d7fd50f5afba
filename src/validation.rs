//! Validation System - Field Rules and Verdicts
//!
//! Rules produce structured violations.
//! The record layer composes rules per field and aggregates violations.

use serde::{Deserialize, Serialize};

use crate::syllable::count_syllables;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { valid: true, violations: vec![] }
    }

    pub fn failure(violations: Vec<ValidationViolation>) -> Self {
        Self { valid: false, violations }
    }

    /// Violation messages for one field, in declaration order.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }
}

/// Field-level validation rule - produces violations
///
/// Rules receive the field's candidate value, `None` when the field is
/// absent. Each rule decides for itself whether absence is its concern;
/// most defer to [`RequiredRule`]. Rules hold no state and never panic,
/// so one instance serves any number of concurrent validation passes.
pub trait FieldRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, field: &str, value: Option<&str>) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

/// Fails when the value is absent or empty.
pub struct RequiredRule;

impl FieldRule for RequiredRule {
    fn name(&self) -> &'static str { "required" }

    fn check(&self, field: &str, value: Option<&str>) -> Vec<ValidationViolation> {
        match value {
            Some(v) if !v.is_empty() => vec![],
            _ => vec![ValidationViolation {
                field: field.to_string(),
                rule: self.name().to_string(),
                message: format!("The {} field is required.", field),
                expected: None,
                actual: None,
            }],
        }
    }
}

/// Fails when the value exceeds `max` characters. Absent values pass;
/// presence is [`RequiredRule`]'s concern.
pub struct MaxLengthRule {
    pub max: usize,
    pub message: &'static str,
}

impl FieldRule for MaxLengthRule {
    fn name(&self) -> &'static str { "max_length" }

    fn check(&self, field: &str, value: Option<&str>) -> Vec<ValidationViolation> {
        let Some(value) = value else {
            return vec![];
        };

        let length = value.chars().count();
        if length > self.max {
            vec![ValidationViolation {
                field: field.to_string(),
                rule: self.name().to_string(),
                message: self.message.to_string(),
                expected: Some(format!("{} characters max", self.max)),
                actual: Some(format!("{} characters", length)),
            }]
        } else {
            vec![]
        }
    }
}

/// Meter rule: the line must estimate to exactly `expected` syllables.
///
/// The message is fixed at declaration time and never derived from the
/// actual count; the count still rides along as structured context.
/// Absent values pass (the required rule owns that failure).
pub struct SyllableCountRule {
    pub expected: usize,
    pub message: &'static str,
}

impl SyllableCountRule {
    pub fn new(expected: usize, message: &'static str) -> Self {
        Self { expected, message }
    }
}

impl FieldRule for SyllableCountRule {
    fn name(&self) -> &'static str { "syllable_count" }

    fn check(&self, field: &str, value: Option<&str>) -> Vec<ValidationViolation> {
        let Some(line) = value else {
            return vec![];
        };

        let actual = count_syllables(line);
        if actual == self.expected {
            vec![]
        } else {
            vec![ValidationViolation {
                field: field.to_string(),
                rule: self.name().to_string(),
                message: self.message.to_string(),
                expected: Some(format!("{} syllables", self.expected)),
                actual: Some(format!("{} syllables", actual)),
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_rule_static_message() {
        let rule = SyllableCountRule::new(5, "Must be five syllables");

        let violations = rule.check("lineOne", Some("Whisper"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Must be five syllables");
        assert_eq!(violations[0].expected.as_deref(), Some("5 syllables"));
        assert_eq!(violations[0].actual.as_deref(), Some("2 syllables"));
    }

    #[test]
    fn test_syllable_rule_passes_matching_line() {
        let rule = SyllableCountRule::new(5, "Must be five syllables");
        assert!(rule.check("lineOne", Some("An old silent pond...")).is_empty());
    }

    #[test]
    fn test_syllable_rule_skips_absent_value() {
        let rule = SyllableCountRule::new(5, "Must be five syllables");
        assert!(rule.check("lineOne", None).is_empty());
    }

    #[test]
    fn test_required_rule() {
        assert_eq!(RequiredRule.check("title", None).len(), 1);
        assert_eq!(RequiredRule.check("title", Some("")).len(), 1);
        assert!(RequiredRule.check("title", Some("Untitled")).is_empty());
    }

    #[test]
    fn test_max_length_rule() {
        let rule = MaxLengthRule { max: 5, message: "Too long." };
        assert!(rule.check("title", Some("haiku")).is_empty());
        assert!(rule.check("title", None).is_empty());

        let violations = rule.check("title", Some("haikus"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Too long.");
    }
}
