//! Declaration value formatting.
//!
//! A value is split on top-level commas into parts and each part on
//! top-level spaces into components:
//!
//! ```text
//! rgba(0, 0, 0, 0.3) 0 30px, red
//! └──────── part ─────────┘  └┬┘
//!   component  comp  comp    part
//! ```
//!
//! Components become numbers or single-quoted strings, multi-component parts
//! become inline arrays and multi-part values become arrays of parts.

use crate::convert::config::ConverterConfig;
use crate::convert::converter::ConvertError;
use crate::convert::preprocess::normalize_whitespace;
use crate::convert::split::{split_structural, Separator};

/// The trailing flag re-encoded for shorthand properties.
pub const IMPORTANT: &str = "!important";

/// Format a trimmed raw value for the property named `context`.
///
/// A value with an empty comma-delimited part (`a,,b` or `,a`) has no JSS
/// rendering and is rejected.
pub fn format_value(
    raw: &str,
    context: &str,
    config: &ConverterConfig,
) -> Result<String, ConvertError> {
    let pieces = split_structural(raw, Separator::Comma);
    if pieces.iter().any(|piece| piece.is_empty()) {
        return Err(ConvertError::EmptyValuePart {
            value: raw.to_string(),
        });
    }

    let parts: Vec<String> = pieces
        .iter()
        .map(|part| format_part(part, context, config))
        .collect();

    Ok(match parts.len() {
        0 | 1 => parts.concat(),
        _ if parts.iter().any(|p| p.starts_with('[')) => {
            format!("[\n{}\n]", parts.join(",\n"))
        }
        _ => inline_list(&parts),
    })
}

/// Format one comma-delimited part.
fn format_part(part: &str, context: &str, config: &ConverterConfig) -> String {
    let part = normalize_whitespace(part);
    let tokens = if config.is_atomic(context) {
        vec![part]
    } else {
        split_structural(&part, Separator::Space)
    };

    let mut components: Vec<String> = tokens.iter().map(|t| format_component(t)).collect();

    if components.len() < 2 {
        return components.concat();
    }

    let important = tokens.last().is_some_and(|t| t == IMPORTANT);
    if important && config.is_important_shorthand(context) {
        components.pop();
        return format!("[{}, '{IMPORTANT}']", inline_list(&components));
    }

    inline_list(&components)
}

/// Format a single leaf value: drop surrounding quotes and a `px` suffix,
/// escape apostrophes, then quote anything that is not a number.
pub fn format_component(raw: &str) -> String {
    let unquoted = strip_quotes(raw);
    let unitless = unquoted.strip_suffix("px").unwrap_or(unquoted);
    let escaped = unitless.replace('\'', "\\'");

    match parse_numeric(&escaped) {
        Some(_) => escaped,
        None => format!("'{escaped}'"),
    }
}

/// Parse `text` as a finite floating point literal.
pub fn parse_numeric(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Remove one leading and one trailing quote of each kind, single first.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('\'').unwrap_or(text);
    let text = text.strip_suffix('\'').unwrap_or(text);
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

fn inline_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value(raw: &str, context: &str) -> String {
        format_value(raw, context, &ConverterConfig::default())
            .unwrap_or_else(|e| panic!("format failed: {e}"))
    }

    // ── Components ───────────────────────────────────────────────────

    #[test]
    fn component_strips_px() {
        assert_eq!(format_component("10px"), "10");
        assert_eq!(format_component("-0.5px"), "-0.5");
    }

    #[test]
    fn component_quotes_non_numeric() {
        assert_eq!(format_component("red"), "'red'");
        assert_eq!(format_component("50%"), "'50%'");
        assert_eq!(format_component("1em"), "'1em'");
        assert_eq!(format_component("#fff"), "'#fff'");
    }

    #[test]
    fn component_strips_surrounding_quotes() {
        assert_eq!(format_component("\"Arial\""), "'Arial'");
        assert_eq!(format_component("'Arial'"), "'Arial'");
    }

    #[test]
    fn component_quoted_pixels_become_numbers() {
        assert_eq!(format_component("'12px'"), "12");
    }

    #[test]
    fn component_escapes_apostrophes() {
        assert_eq!(format_component("\"it's\""), "'it\\'s'");
    }

    #[test]
    fn component_empty_is_empty_string() {
        assert_eq!(format_component(""), "''");
        assert_eq!(format_component("px"), "''");
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(parse_numeric("0"), Some(0.0));
        assert_eq!(parse_numeric(".8"), Some(0.8));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("10px"), None);
        assert_eq!(parse_numeric(""), None);
    }

    // ── Parts ────────────────────────────────────────────────────────

    #[test]
    fn scalar_value() {
        assert_eq!(value("10px", "width"), "10");
        assert_eq!(value("block", "display"), "'block'");
    }

    #[test]
    fn space_separated_value() {
        assert_eq!(value("10px 20px", "margin"), "[10, 20]");
    }

    #[test]
    fn important_tuple_for_shorthand() {
        assert_eq!(
            value("10px 20px !important", "margin"),
            "[[10, 20], '!important']"
        );
        assert_eq!(value("0 !important", "padding"), "[[0], '!important']");
    }

    #[test]
    fn important_stays_plain_elsewhere() {
        assert_eq!(value("red !important", "color"), "['red', '!important']");
    }

    #[test]
    fn lone_important_is_scalar() {
        assert_eq!(value("!important", "margin"), "'!important'");
    }

    #[test]
    fn function_call_is_one_component() {
        assert_eq!(value("calc(100% - 10px)", "width"), "'calc(100% - 10px)'");
    }

    #[test]
    fn font_family_parts_stay_whole() {
        assert_eq!(
            value("'Helvetica Neue', Arial, sans-serif", "fontFamily"),
            "['Helvetica Neue', 'Arial', 'sans-serif']"
        );
    }

    #[test]
    fn font_family_unquoted_multi_word() {
        assert_eq!(value("Open Sans", "fontFamily"), "'Open Sans'");
    }

    // ── Multi-part values ────────────────────────────────────────────

    #[test]
    fn comma_list_of_scalars() {
        assert_eq!(
            value("opacity, transform", "transitionProperty"),
            "['opacity', 'transform']"
        );
    }

    #[test]
    fn comma_list_of_arrays_is_multiline() {
        let result = value(
            "rgba(0, 0, 0, 0.3) 0 30px 60px -30px, inset 0 1px red",
            "boxShadow",
        );
        assert_eq!(
            result,
            "[\n['rgba(0, 0, 0, 0.3)', 0, 30, 60, -30],\n['inset', 0, 1, 'red']\n]"
        );
    }

    #[test]
    fn mixed_list_is_multiline() {
        assert_eq!(
            value("opacity 0.3s, color", "transition"),
            "[\n['opacity', '0.3s'],\n'color'\n]"
        );
    }

    #[test]
    fn empty_interior_part_fails() {
        let config = ConverterConfig::default();
        assert_eq!(
            format_value("a,,b", "transitionProperty", &config),
            Err(ConvertError::EmptyValuePart {
                value: "a,,b".into()
            })
        );
        assert!(format_value(", a", "fontFamily", &config).is_err());
    }

    #[test]
    fn trailing_comma_is_ignored() {
        assert_eq!(value("a,", "transitionProperty"), "'a'");
    }

    #[test]
    fn empty_value() {
        assert_eq!(value("", "color"), "");
    }

    #[test]
    fn configured_shorthands() {
        let config = ConverterConfig::default().with_important_shorthands(["inset"]);
        assert_eq!(
            format_value("0 0 !important", "inset", &config).unwrap(),
            "[[0, 0], '!important']"
        );
        assert_eq!(
            format_value("1px 2px !important", "margin", &config).unwrap(),
            "[1, 2, '!important']"
        );
    }
}
