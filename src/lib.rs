//! Haiku Meter Core - Syllable Estimation Engine
//!
//! # The Ground Rules (Non-Negotiable)
//! 1. The Estimator Is a Heuristic, Not a Dictionary
//! 2. Step Order Is Behavior
//! 3. Rules Produce Violations, Messages Stay Static
//! 4. Pure Functions, No Hidden State
//! 5. No Input Is an Error

pub mod syllable;
pub mod validation;
pub mod haiku;

pub use syllable::{count_syllables, count_word_syllables, tokenize};
pub use validation::{
    FieldRule, MaxLengthRule, RequiredRule, SyllableCountRule, ValidationResult,
    ValidationViolation,
};
pub use haiku::{Haiku, HaikuError, HaikuValidator, METER};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
