//! Input validation for new show entries.
//!
//! The add-show dialog validates its two text fields on every change and
//! again right before submission. The rules are fixed: names are
//! alphanumeric/underscore, codes are one uppercase letter followed by
//! digits.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_]+$").expect("name pattern is valid"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][0-9]+$").expect("code pattern is valid"));

/// Why a show field was rejected.
///
/// The `Display` text of each variant is the exact message shown to the
/// user next to the offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameMissing,

    #[error("Name can only contain letters, numbers and underscore")]
    NameInvalid,

    #[error("Code is required")]
    CodeMissing,

    #[error("Code must start with uppercase letter followed by numbers")]
    CodeInvalid,
}

/// Validates a show name.
///
/// Names must be non-empty and consist only of ASCII letters, digits and
/// underscores.
pub fn validate_show_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::NameMissing)
    } else if !NAME_PATTERN.is_match(name) {
        Err(ValidationError::NameInvalid)
    } else {
        Ok(())
    }
}

/// Validates a show code.
///
/// Codes must be one uppercase ASCII letter followed by one or more digits.
pub fn validate_show_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        Err(ValidationError::CodeMissing)
    } else if !CODE_PATTERN.is_match(code) {
        Err(ValidationError::CodeInvalid)
    } else {
        Ok(())
    }
}

/// Validates both fields of a new show entry, name first.
pub fn validate_new_show(name: &str, code: &str) -> Result<(), ValidationError> {
    validate_show_name(name)?;
    validate_show_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_show_name("breaking_bad").is_ok());
        assert!(validate_show_name("Show42").is_ok());
        assert!(validate_show_name("_").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(validate_show_name(""), Err(ValidationError::NameMissing));
        assert_eq!(
            validate_show_name("with space"),
            Err(ValidationError::NameInvalid)
        );
        assert_eq!(
            validate_show_name("dash-ed"),
            Err(ValidationError::NameInvalid)
        );
        assert_eq!(
            validate_show_name("über"),
            Err(ValidationError::NameInvalid)
        );
    }

    #[test]
    fn test_valid_codes() {
        assert!(validate_show_code("A1").is_ok());
        assert!(validate_show_code("Z90210").is_ok());
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(validate_show_code(""), Err(ValidationError::CodeMissing));
        // missing digits
        assert_eq!(validate_show_code("A"), Err(ValidationError::CodeInvalid));
        // lowercase leading letter
        assert_eq!(validate_show_code("a1"), Err(ValidationError::CodeInvalid));
        // digits before the letter
        assert_eq!(validate_show_code("1A"), Err(ValidationError::CodeInvalid));
        // trailing non-digit
        assert_eq!(
            validate_show_code("A1b"),
            Err(ValidationError::CodeInvalid)
        );
    }

    #[test]
    fn test_validate_new_show_reports_name_first() {
        assert_eq!(
            validate_new_show("", ""),
            Err(ValidationError::NameMissing)
        );
        assert_eq!(
            validate_new_show("ok_name", "bad"),
            Err(ValidationError::CodeInvalid)
        );
        assert!(validate_new_show("ok_name", "C3").is_ok());
    }

    #[test]
    fn test_error_messages_match_dialog_labels() {
        assert_eq!(ValidationError::NameMissing.to_string(), "Name is required");
        assert_eq!(
            ValidationError::NameInvalid.to_string(),
            "Name can only contain letters, numbers and underscore"
        );
        assert_eq!(ValidationError::CodeMissing.to_string(), "Code is required");
        assert_eq!(
            ValidationError::CodeInvalid.to_string(),
            "Code must start with uppercase letter followed by numbers"
        );
    }
}
