// File: src/rules.rs
// Purpose: Per-field validation rules (regex and length checks)

use crate::field::FieldName;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Browser whitespace: WhiteSpace and LineTerminator code points. Unlike
// Unicode White_Space this has U+FEFF and lacks U+0085.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Letters and whitespace only
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z{}]+$", BROWSER_WHITESPACE)).unwrap()
});

// Exactly ten ASCII digits
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

// local@domain.tld, no whitespace, a single '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let ws = BROWSER_WHITESPACE;
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).unwrap()
});

/// Default minimum password length.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

/// Why a value failed its field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RuleViolation {
    #[error("This field is required")]
    Empty,

    #[error("Must be {expected}")]
    PatternMismatch { expected: &'static str },

    #[error("Must be at least {min} characters")]
    TooShort { min: usize, actual: usize },
}

/// The rule attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    field: FieldName,
    password_min_length: usize,
}

impl FieldRule {
    pub fn new(field: FieldName, password_min_length: usize) -> Self {
        Self {
            field,
            password_min_length,
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Evaluates `value` against this rule.
    ///
    /// Emptiness is judged on the trimmed value for every field. Pattern
    /// rules match the trimmed value; the password length is counted on
    /// the raw value, in UTF-16 code units like a browser input's `length`.
    pub fn evaluate(&self, value: &str) -> Result<(), RuleViolation> {
        let trimmed = trim(value);
        if trimmed.is_empty() {
            return Err(RuleViolation::Empty);
        }

        match self.field {
            FieldName::Username => {
                matches_pattern(&USERNAME_REGEX, trimmed, "letters and spaces only")
            }
            FieldName::Mobile => matches_pattern(&MOBILE_REGEX, trimmed, "exactly 10 digits"),
            FieldName::Email => matches_pattern(&EMAIL_REGEX, trimmed, "a valid email address"),
            FieldName::Password => {
                let actual = value.encode_utf16().count();
                if actual < self.password_min_length {
                    Err(RuleViolation::TooShort {
                        min: self.password_min_length,
                        actual,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn is_satisfied(&self, value: &str) -> bool {
        self.evaluate(value).is_ok()
    }
}

fn matches_pattern(
    regex: &Regex,
    value: &str,
    expected: &'static str,
) -> Result<(), RuleViolation> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(RuleViolation::PatternMismatch { expected })
    }
}

/// Trims the characters a browser's `String.prototype.trim` removes.
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

/// WhiteSpace or LineTerminator as browsers define them
fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}
