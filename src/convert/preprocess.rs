//! Text clean-up applied before scanning: whitespace collapsing and comment
//! removal.

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Trim the input and collapse every whitespace run (newlines included) into
/// a single space.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `/* ... */` blocks.
///
/// Each pass cuts from the first `/*` through the first `*/` that follows
/// it. Comments do not nest, so `/* a /* b */ c */` leaves ` c */` behind.
/// An opener without a closer is left untouched.
pub fn strip_comments(input: &str) -> String {
    let mut result = input.to_string();

    while let Some(start) = result.find(COMMENT_OPEN) {
        let Some(offset) = result[start + COMMENT_OPEN.len()..].find(COMMENT_CLOSE) else {
            break;
        };
        let end = start + COMMENT_OPEN.len() + offset + COMMENT_CLOSE.len();
        result.replace_range(start..end, "");
    }

    result
}

/// Returns `true` if a comment opener survived [`strip_comments`].
pub fn has_unterminated_comment(input: &str) -> bool {
    input.contains(COMMENT_OPEN)
}

/// Whitespace normalization followed by comment removal.
pub fn preprocess(input: &str) -> String {
    strip_comments(&normalize_whitespace(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(
            normalize_whitespace("  color:\n\t red ;\r\n  "),
            "color: red ;"
        );
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn strip_single_comment() {
        assert_eq!(strip_comments("/* note */ color: red;"), " color: red;");
    }

    #[test]
    fn strip_multiple_comments() {
        assert_eq!(
            strip_comments("a/* 1 */b/* 2 */c"),
            "abc"
        );
    }

    #[test]
    fn strip_does_not_nest() {
        assert_eq!(strip_comments("/* a /* b */ c */"), " c */");
    }

    #[test]
    fn strip_leaves_unterminated_opener() {
        let input = "color: red; /* dangling";
        assert_eq!(strip_comments(input), input);
        assert!(has_unterminated_comment(&strip_comments(input)));
    }

    #[test]
    fn strip_ignores_stray_closer_before_opener() {
        assert_eq!(strip_comments("a */ b /* c */ d"), "a */ b  d");
    }

    #[test]
    fn preprocess_removes_multiline_comment() {
        let input = "/*\n * header\n */\ncolor: red;";
        assert_eq!(preprocess(input), " color: red;");
        assert!(!has_unterminated_comment(&preprocess(input)));
    }
}
