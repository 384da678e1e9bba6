//! Branch and tag name checks.
//!
//! Both kinds share one namespace, so one rule set covers them. A name is a
//! `/`-separated path of segments, and each segment is checked on its own:
//! it must be non-empty, may not begin or end with `.`, and may not end in
//! `.lock`. The name as a whole may not contain `..`, `@{`, control
//! characters, whitespace, or any of `~ ^ : ? * [ \`.

use crate::error::{RefError, Result};

/// Fails with a reason when `ch` may not appear in a name.
fn check_char(ch: char) -> std::result::Result<(), String> {
    if ch.is_whitespace() || ch.is_control() {
        return Err(format!("contains whitespace or control character {ch:?}"));
    }
    if matches!(ch, '~' | '^' | ':' | '?' | '*' | '[' | '\\') {
        return Err(format!("contains reserved character {ch:?}"));
    }
    Ok(())
}

fn check_segment(segment: &str) -> std::result::Result<(), String> {
    if segment.is_empty() {
        return Err("has an empty path segment".into());
    }
    if segment.starts_with('.') || segment.ends_with('.') {
        return Err(format!("segment {segment:?} begins or ends with '.'"));
    }
    if segment.ends_with(".lock") {
        return Err(format!("segment {segment:?} ends with '.lock'"));
    }
    Ok(())
}

/// Check that `name` can be used for a branch or tag.
///
/// Failures are reported as [`RefError::InvalidArgument`] carrying the
/// offending name.
///
/// # Examples
///
/// ```
/// use arbor_refs::names::validate_reference_name;
///
/// assert!(validate_reference_name("release/1.0").is_ok());
/// assert!(validate_reference_name("bad..name").is_err());
/// ```
pub fn validate_reference_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RefError::invalid(name, "reference name must not be empty"));
    }
    let checked = name
        .chars()
        .try_for_each(check_char)
        .and_then(|()| {
            for pattern in ["..", "@{"] {
                if name.contains(pattern) {
                    return Err(format!("contains {pattern:?}"));
                }
            }
            Ok(())
        })
        .and_then(|()| name.split('/').try_for_each(check_segment));
    checked.map_err(|reason| RefError::invalid(name, reason))
}
