use crate::error::{Result, RuleError};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

pub const NAME_MAX_LENGTH: usize = 64;
pub const DESCRIPTION_MAX_LENGTH: usize = 1024;

const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Identifier validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("name regex is valid"))
}

/// Validate a skill or rule identifier.
///
/// Lowercase alphanumeric runs separated by single hyphens, 1-64 characters.
/// Returns the input unchanged.
pub fn validate_name(name: &str) -> Result<&str> {
    validate_name_with_limit(name, NAME_MAX_LENGTH)
}

pub fn validate_name_with_limit(name: &str, max: usize) -> Result<&str> {
    if name.is_empty() {
        return Err(RuleError::EmptyName);
    }
    let len = name.chars().count();
    if len > max {
        return Err(RuleError::NameTooLong { len, max });
    }
    if !name_re().is_match(name) {
        return Err(RuleError::InvalidNameFormat(name.to_string()));
    }
    Ok(name)
}

// ---------------------------------------------------------------------------
// Description validation
// ---------------------------------------------------------------------------

/// Reject empty, whitespace-only, or over-length descriptions.
pub fn validate_description(text: &str, max: usize) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(RuleError::EmptyDescription);
    }
    let len = text.chars().count();
    if len > max {
        return Err(RuleError::DescriptionTooLong { len, max });
    }
    Ok(text)
}

/// Cut `text` down to exactly `max` characters, ending in `...`, when it is
/// longer than `max`. Shorter text is returned as-is. Limits below the
/// ellipsis length get a plain cut with no ellipsis.
pub fn truncate_description(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    if max < ELLIPSIS.len() {
        return Cow::Owned(text.chars().take(max).collect());
    }
    let mut out: String = text.chars().take(max - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
