//! Form field validation for the product category page.
//!
//! The checks are free functions so any handler can call them directly.
//! Failures are collected into an [`ErrorMessages`] map keyed by form field
//! name; a later failure on the same field replaces an earlier one.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Form field (and HTML `name`/`id` attribute) carrying the category name.
pub const PTYPE: &str = "ptype";

/// Human-readable label used in the category field's messages.
pub const PTYPE_LABEL: &str = "Product Category";

/// Word characters only. The empty string counts as a single word; emptiness
/// is reported by [`is_empty_field`].
const SINGLE_WORD_PATTERN: &str = r"^\w*$";

static SINGLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SINGLE_WORD_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Returns `true` if the submitted value is empty after trimming.
pub fn is_empty_field(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `true` if `value` contains only word characters.
pub fn is_single_word(value: &str) -> bool {
    SINGLE_WORD_RE.is_match(value)
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a {label}.")]
    EmptyField { label: &'static str },

    #[error("Please enter a {label} as a Single Word.")]
    NotSingleWord { label: &'static str },
}

// ---------------------------------------------------------------------------
// Error map
// ---------------------------------------------------------------------------

/// Per-request map of form field name to error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMessages(BTreeMap<String, String>);

impl ErrorMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for `field`, replacing any earlier message for it.
    pub fn record(&mut self, field: &str, error: &ValidationError) {
        self.0.insert(field.to_string(), error.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ---------------------------------------------------------------------------
// Category name
// ---------------------------------------------------------------------------

/// A category name that passed [`validate_category_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedName(String);

impl ValidatedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate the raw `ptype` value submitted with the category form.
///
/// Both checks always run, empty check first. When both fail, the single-word
/// message overwrites the empty-field message, so whitespace-only input
/// reports only the single-word message.
pub fn validate_category_name(raw: &str) -> Result<ValidatedName, ErrorMessages> {
    let mut errors = ErrorMessages::new();

    if is_empty_field(raw) {
        errors.record(PTYPE, &ValidationError::EmptyField { label: PTYPE_LABEL });
    }
    if !is_single_word(raw) {
        errors.record(PTYPE, &ValidationError::NotSingleWord { label: PTYPE_LABEL });
    }

    if errors.is_empty() {
        Ok(ValidatedName(raw.trim().to_string()))
    } else {
        Err(errors)
    }
}
