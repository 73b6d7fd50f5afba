//! Haiku Record - Field Schema and Validation Pass
//!
//! Declares the record's fields and their rules, including the 5-7-5
//! meter, and runs every rule of every field in one pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{
    FieldRule, MaxLengthRule, RequiredRule, SyllableCountRule, ValidationResult,
};

/// The fixed meter the three lines must satisfy.
pub const METER: [usize; 3] = [5, 7, 5];

#[derive(Debug, Error)]
pub enum HaikuError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Haiku {
    #[serde(default)]
    pub id: u64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub line_one: Option<String>,
    #[serde(default)]
    pub line_two: Option<String>,
    #[serde(default)]
    pub line_three: Option<String>,
    #[serde(default = "default_creator_id")]
    pub creator_id: u64,
}

fn default_title() -> String { "Untitled".to_string() }

// Creator 1 is the "Unknown Author" placeholder.
fn default_creator_id() -> u64 { 1 }

impl Haiku {
    pub fn from_json(payload: &str) -> Result<Self, HaikuError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One field of the record: its wire name, how to read it, and the rules
/// declared on it, checked in declaration order.
struct FieldSchema {
    name: &'static str,
    get: fn(&Haiku) -> Option<&str>,
    rules: Vec<Box<dyn FieldRule>>,
}

/// Runs the per-field validation pass over a haiku.
///
/// Holds only the declared schema, so a single validator is reusable
/// across any number of records and threads.
pub struct HaikuValidator {
    fields: Vec<FieldSchema>,
}

impl HaikuValidator {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSchema {
                    name: "title",
                    get: |h: &Haiku| Some(h.title.as_str()),
                    rules: vec![
                        Box::new(RequiredRule),
                        Box::new(MaxLengthRule {
                            max: 100,
                            message: "Title length can't be more than 100.",
                        }),
                    ],
                },
                FieldSchema {
                    name: "lineOne",
                    get: |h: &Haiku| h.line_one.as_deref(),
                    rules: vec![
                        Box::new(RequiredRule),
                        Box::new(MaxLengthRule {
                            max: 50,
                            message: "First line length can't be more than 50.",
                        }),
                        Box::new(SyllableCountRule::new(METER[0], "Must be five syllables")),
                    ],
                },
                FieldSchema {
                    name: "lineTwo",
                    get: |h: &Haiku| h.line_two.as_deref(),
                    rules: vec![
                        Box::new(RequiredRule),
                        Box::new(MaxLengthRule {
                            max: 50,
                            message: "Second line length can't be more than 50.",
                        }),
                        Box::new(SyllableCountRule::new(METER[1], "Must be seven syllables")),
                    ],
                },
                FieldSchema {
                    name: "lineThree",
                    get: |h: &Haiku| h.line_three.as_deref(),
                    rules: vec![
                        Box::new(RequiredRule),
                        Box::new(MaxLengthRule {
                            max: 50,
                            message: "Third line length can't be more than 50.",
                        }),
                        Box::new(SyllableCountRule::new(METER[2], "Must be five syllables")),
                    ],
                },
            ],
        }
    }

    /// Check every rule of every field and aggregate all violations.
    /// Rules never short-circuit each other; a field can fail several
    /// rules in one pass.
    pub fn validate(&self, haiku: &Haiku) -> ValidationResult {
        let mut all_violations = vec![];

        for field in &self.fields {
            let value = (field.get)(haiku);
            for rule in &field.rules {
                all_violations.extend(rule.check(field.name, value));
            }
        }

        if all_violations.is_empty() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(all_violations)
        }
    }
}

impl Default for HaikuValidator {
    fn default() -> Self {
        Self::new()
    }
}
