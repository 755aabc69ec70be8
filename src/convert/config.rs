//! Converter configuration.

/// Default prefix for every converted declaration line.
pub const DEFAULT_INDENT: &str = "    ";

/// Properties whose space-separated values may carry a trailing
/// `!important` that is re-encoded as a `[[...], '!important']` tuple.
pub const DEFAULT_IMPORTANT_SHORTHANDS: [&str; 2] = ["margin", "padding"];

/// Properties whose comma-separated parts are never split on spaces.
pub const DEFAULT_ATOMIC_PROPERTIES: [&str; 1] = ["fontFamily"];

/// Configuration for a [`Converter`](crate::convert::Converter).
///
/// Property names are matched in their converted (camelCase) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Prefix written before every property key.
    pub indent: String,
    /// Properties eligible for the `!important` tuple rendering.
    pub important_shorthands: Vec<String>,
    /// Properties whose value parts are kept whole.
    pub atomic_properties: Vec<String>,
    /// Report malformed input as an error instead of truncating the output.
    pub strict: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            important_shorthands: DEFAULT_IMPORTANT_SHORTHANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            atomic_properties: DEFAULT_ATOMIC_PROPERTIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            strict: false,
        }
    }
}

impl ConverterConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line prefix (builder).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indent with `width` spaces (builder).
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }

    /// Replace the `!important` shorthand set (builder).
    pub fn with_important_shorthands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.important_shorthands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the atomic property set (builder).
    pub fn with_atomic_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atomic_properties = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable strict mode (builder).
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_important_shorthand(&self, property: &str) -> bool {
        self.important_shorthands.iter().any(|p| p == property)
    }

    pub fn is_atomic(&self, property: &str) -> bool {
        self.atomic_properties.iter().any(|p| p == property)
    }
}
