//! Property name conversion: kebab-case to camelCase, custom properties to
//! quoted keys.

use std::fmt;

use crate::convert::converter::ConvertError;

/// A converted declaration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleName {
    /// A standard property, stored in camelCase (`backgroundColor`).
    Property(String),
    /// A name starting with `-` (`--brand`, `-webkit-box`), kept verbatim.
    Custom(String),
}

impl RuleName {
    /// Convert a trimmed property token.
    pub fn parse(token: &str) -> Result<Self, ConvertError> {
        if token.is_empty() {
            return Err(ConvertError::EmptyRuleName);
        }
        if token.starts_with('-') {
            return Ok(RuleName::Custom(token.to_string()));
        }
        to_camel_case(token).map(RuleName::Property)
    }

    /// The name that value formatting should see for this rule, if any.
    ///
    /// Custom names never become the active context: a value that follows
    /// one is formatted against the previous standard property.
    pub fn context(&self) -> Option<&str> {
        match self {
            RuleName::Property(name) => Some(name),
            RuleName::Custom(_) => None,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleName::Property(name) => f.write_str(name),
            RuleName::Custom(name) => write!(f, "'{name}'"),
        }
    }
}

/// Convert `kebab-case` into `camelCase`.
///
/// Each segment is capitalized with the rest of it lower-cased, then the
/// first character of the whole result is lower-cased, so `Background-COLOR`
/// becomes `backgroundColor`. Trailing hyphens are ignored; an empty segment
/// anywhere else is an error.
pub fn to_camel_case(name: &str) -> Result<String, ConvertError> {
    let mut result = String::with_capacity(name.len());

    for (index, segment) in name.trim_end_matches('-').split('-').enumerate() {
        let mut chars = segment.chars();
        let first = chars.next().ok_or_else(|| ConvertError::EmptyNameSegment {
            name: name.to_string(),
        })?;
        if index == 0 {
            result.extend(first.to_lowercase());
        } else {
            result.extend(first.to_uppercase());
        }
        result.push_str(&chars.as_str().to_lowercase());
    }

    Ok(result)
}
